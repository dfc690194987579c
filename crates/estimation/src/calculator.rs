//! Coverage calculation: area + yield + coats -> liters -> containers.

use serde::{Deserialize, Serialize};

use paintcalc_catalog::{Entity, ProductEntry};
use paintcalc_core::{ValidationError, ValidationResult};

use crate::validation::{ResolvedSelection, SelectionMode, check_area, check_coat_count, resolve_surface_class};

/// Outcome of one coverage computation.
///
/// `total_liters` is kept unrounded; use [`total_liters_rounded`](Self::total_liters_rounded)
/// or [`total_liters_display`](Self::total_liters_display) at the presentation edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageResult {
    /// m² per liter per coat (per application for single-application products).
    pub per_coat_yield: f64,
    pub total_liters: f64,
    pub container_count: u64,
}

impl CoverageResult {
    /// Liters rounded half away from zero to two decimals.
    pub fn total_liters_rounded(&self) -> f64 {
        (self.total_liters * 100.0).round() / 100.0
    }

    /// Liters formatted with exactly two decimals.
    pub fn total_liters_display(&self) -> String {
        format!("{:.2}", self.total_liters)
    }
}

/// Compute liters and containers for `selection` on `entry` over `area_m2` square meters.
///
/// Rejects instead of computing when the selection does not belong to `entry`
/// (different product, coat count not offered, yield value not offered) or the
/// area is not strictly positive.
pub fn compute_coverage(
    entry: &ProductEntry,
    selection: &ResolvedSelection,
    area_m2: f64,
) -> ValidationResult<CoverageResult> {
    if selection.product_id != *entry.id() {
        return Err(ValidationError::ProductNotFound(selection.product_id.clone()));
    }
    check_area(area_m2)?;
    check_coat_count(entry, selection.coat_count)?;

    let per_coat_yield = match entry.yield_kind().fixed_yield() {
        Some(fixed) => fixed,
        None => {
            // Defaults are substituted during validation, never here.
            resolve_surface_class(entry, selection.yield_value, SelectionMode::Interactive)?
                .map(|option| option.value())
                .ok_or_else(|| ValidationError::MissingSurfaceClass(entry.id().clone()))?
        }
    };

    let total_liters = (area_m2 / per_coat_yield) * f64::from(selection.coat_count);
    let container_count = containers_for(total_liters, entry.container_size_liters())?;

    Ok(CoverageResult {
        per_coat_yield,
        total_liters,
        container_count,
    })
}

/// Whole containers needed for `liters`; any partial container counts as one.
///
/// Counts that do not fit a `u64` are rejected rather than saturated.
fn containers_for(liters: f64, container_size_liters: f64) -> ValidationResult<u64> {
    let containers = (liters / container_size_liters).ceil();
    if containers >= MAX_CONTAINERS {
        return Err(ValidationError::invalid_area(format!(
            "area is too large: needs {containers} containers, limit is {MAX_CONTAINERS}"
        )));
    }
    Ok(containers as u64)
}

/// Exclusive upper bound on container counts (2^64).
const MAX_CONTAINERS: f64 = u64::MAX as f64;

#[cfg(test)]
mod tests {
    use super::*;
    use paintcalc_catalog::{Catalog, SurfaceClassOption};
    use paintcalc_core::ProductId;

    fn selection(entry: &ProductEntry, coats: u32, yield_value: Option<f64>) -> ResolvedSelection {
        ResolvedSelection {
            product_id: entry.id().clone(),
            coat_count: coats,
            yield_value,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fixed_range_midpoint_two_coats() {
        let entry = ProductEntry::fixed_range("Flex", 10.0, 12.0, vec![2, 3], 18.0);
        let result = compute_coverage(&entry, &selection(&entry, 2, None), 100.0).unwrap();

        assert_eq!(result.per_coat_yield, 11.0);
        assert!(approx(result.total_liters, 200.0 / 11.0));
        assert_eq!(result.total_liters_display(), "18.18");
        assert_eq!(result.container_count, 2);
    }

    #[test]
    fn fixed_yield_three_coats() {
        let entry = ProductEntry::fixed_range("Green", 7.8, 7.8, vec![2, 3], 18.0);
        let result = compute_coverage(&entry, &selection(&entry, 3, None), 50.0).unwrap();

        assert_eq!(result.per_coat_yield, 7.8);
        assert!(approx(result.total_liters, (50.0 / 7.8) * 3.0));
        assert_eq!(result.total_liters_display(), "19.23");
        assert_eq!(result.container_count, 2);
    }

    #[test]
    fn surface_class_single_coat() {
        let catalog = Catalog::builtin();
        let entry = catalog.lookup("Moshe 3000 Repel").unwrap();
        let result = compute_coverage(entry, &selection(entry, 1, Some(5.0)), 40.0).unwrap();

        assert_eq!(result.per_coat_yield, 5.0);
        assert_eq!(result.total_liters, 8.0);
        assert_eq!(result.total_liters_display(), "8.00");
        assert_eq!(result.container_count, 1);
    }

    #[test]
    fn exact_multiple_of_container_does_not_round_up() {
        let entry = ProductEntry::fixed_range("P", 10.0, 10.0, vec![1], 18.0);
        let result = compute_coverage(&entry, &selection(&entry, 1, None), 360.0).unwrap();
        assert_eq!(result.total_liters, 36.0);
        assert_eq!(result.container_count, 2);
    }

    #[test]
    fn tiny_area_still_needs_one_container() {
        let entry = ProductEntry::fixed_range("P", 10.0, 10.0, vec![1], 18.0);
        let result = compute_coverage(&entry, &selection(&entry, 1, None), 0.01).unwrap();
        assert_eq!(result.container_count, 1);
        assert_eq!(result.total_liters_rounded(), 0.0);
    }

    #[test]
    fn non_positive_area_is_rejected() {
        let entry = ProductEntry::fixed_range("P", 10.0, 10.0, vec![1], 18.0);
        for area in [0.0, -5.0] {
            let err = compute_coverage(&entry, &selection(&entry, 1, None), area).unwrap_err();
            assert_eq!(err.code(), "invalid_area");
        }
    }

    #[test]
    fn selection_for_other_product_is_rejected() {
        let entry = ProductEntry::fixed_range("P", 10.0, 10.0, vec![1], 18.0);
        let foreign = ResolvedSelection {
            product_id: ProductId::new("Q"),
            coat_count: 1,
            yield_value: None,
        };
        assert_eq!(
            compute_coverage(&entry, &foreign, 10.0).unwrap_err(),
            ValidationError::ProductNotFound(ProductId::new("Q"))
        );
    }

    #[test]
    fn yield_value_not_offered_is_rejected() {
        let entry = ProductEntry::by_surface_class(
            "Repel",
            vec![SurfaceClassOption::new("Média", 7.5)],
            vec![1, 2],
            18.0,
        );
        let err = compute_coverage(&entry, &selection(&entry, 1, Some(8.5)), 10.0).unwrap_err();
        assert_eq!(err.code(), "invalid_surface_class");

        let err = compute_coverage(&entry, &selection(&entry, 1, None), 10.0).unwrap_err();
        assert_eq!(err, ValidationError::MissingSurfaceClass(ProductId::new("Repel")));
    }

    #[test]
    fn coat_count_not_offered_is_rejected() {
        let entry = ProductEntry::fixed_range("P", 10.0, 10.0, vec![2, 3], 18.0);
        let err = compute_coverage(&entry, &selection(&entry, 4, None), 10.0).unwrap_err();
        assert_eq!(err.code(), "invalid_coat_count");
    }

    #[test]
    fn area_needing_more_containers_than_representable_is_rejected() {
        let entry = ProductEntry::fixed_range("Flex", 10.0, 12.0, vec![2, 3], 18.0);
        let err = compute_coverage(&entry, &selection(&entry, 2, None), 1e25).unwrap_err();
        assert_eq!(err.code(), "invalid_area");

        let tiny_yield = ProductEntry::fixed_range("Thin", 1e-300, 1e-300, vec![1], 18.0);
        let err = compute_coverage(&tiny_yield, &selection(&tiny_yield, 1, None), 1e10).unwrap_err();
        assert_eq!(err.code(), "invalid_area");
    }

    #[test]
    fn large_representable_area_keeps_rounding_law() {
        let entry = ProductEntry::fixed_range("Flex", 10.0, 12.0, vec![2, 3], 18.0);
        let result = compute_coverage(&entry, &selection(&entry, 2, None), 1e15).unwrap();
        let expected = (result.total_liters / 18.0).ceil();
        assert_eq!(result.container_count as f64, expected);
    }

    #[test]
    fn rounding_helpers_round_half_up() {
        let result = CoverageResult {
            per_coat_yield: 1.0,
            total_liters: 2.345_000_1,
            container_count: 1,
        };
        assert_eq!(result.total_liters_rounded(), 2.35);
        assert_eq!(result.total_liters_display(), "2.35");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn builtin_selections() -> Vec<(ProductEntry, ResolvedSelection)> {
            let catalog = Catalog::builtin();
            let mut out = Vec::new();
            for entry in catalog.entries() {
                for &coats in entry.coat_options() {
                    let values: Vec<Option<f64>> = if entry.yield_kind().requires_surface_class() {
                        entry.yield_kind().surface_classes().iter().map(|o| Some(o.value())).collect()
                    } else {
                        vec![None]
                    };
                    for value in values {
                        out.push((entry.clone(), selection(entry, coats, value)));
                    }
                }
            }
            out
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: same inputs, same output.
            #[test]
            fn computation_is_idempotent(
                pick in proptest::sample::select(builtin_selections()),
                area in 0.001f64..100_000.0,
            ) {
                let (entry, sel) = pick;
                let first = compute_coverage(&entry, &sel, area).unwrap();
                let second = compute_coverage(&entry, &sel, area).unwrap();
                prop_assert_eq!(first, second);
            }

            /// Property: more area never needs less paint or fewer containers.
            #[test]
            fn totals_are_monotonic_in_area(
                pick in proptest::sample::select(builtin_selections()),
                area in 0.001f64..50_000.0,
                extra in 0.0f64..50_000.0,
            ) {
                let (entry, sel) = pick;
                let smaller = compute_coverage(&entry, &sel, area).unwrap();
                let larger = compute_coverage(&entry, &sel, area + extra).unwrap();
                prop_assert!(larger.total_liters >= smaller.total_liters);
                prop_assert!(larger.container_count >= smaller.container_count);
            }

            /// Property: container count is the ceiling of liters over container size.
            #[test]
            fn container_count_is_ceiling_of_liters(
                pick in proptest::sample::select(builtin_selections()),
                area in 0.001f64..100_000.0,
            ) {
                let (entry, sel) = pick;
                let result = compute_coverage(&entry, &sel, area).unwrap();
                let expected = (result.total_liters / entry.container_size_liters()).ceil();
                prop_assert_eq!(result.container_count as f64, expected);
                prop_assert!(result.container_count >= 1);
                prop_assert!(result.per_coat_yield > 0.0);
            }
        }
    }
}
