//! The product line shipped with the calculator.

use crate::product::{ProductEntry, SurfaceClassOption};

/// Every built-in product is sold in the same bucket size.
pub const STANDARD_BUCKET_LITERS: f64 = 18.0;

/// Built-in entries in display order.
pub fn builtin_entries() -> Vec<ProductEntry> {
    vec![
        ProductEntry::fixed_range("Moshe 3000 Flex", 10.0, 12.0, vec![2, 3], STANDARD_BUCKET_LITERS),
        ProductEntry::fixed_range("Moshe 3000 Green", 7.8, 7.8, vec![2, 3], STANDARD_BUCKET_LITERS),
        ProductEntry::fixed_range(
            "Moshe 3000 Flex Metal",
            3.45,
            3.45,
            vec![2, 3],
            STANDARD_BUCKET_LITERS,
        ),
        ProductEntry::by_surface_class(
            "Moshe 3000 Repel",
            vec![
                SurfaceClassOption::new("Baixa Absorção (10 m²/L/demão)", 10.0),
                SurfaceClassOption::new("Média Absorção (7.5 m²/L/demão)", 7.5),
                SurfaceClassOption::new("Alta Absorção (5 m²/L/demão)", 5.0),
            ],
            vec![1, 2],
            STANDARD_BUCKET_LITERS,
        ),
        // Applied once; yields are per application rather than per coat.
        ProductEntry::by_surface_class(
            "Moshe 3000 Wood",
            vec![
                SurfaceClassOption::new("Baixa Absorção (10 m²/L)", 10.0),
                SurfaceClassOption::new("Média Absorção (8.5 m²/L)", 8.5),
                SurfaceClassOption::new("Alta Absorção (7 m²/L)", 7.0),
            ],
            vec![1],
            STANDARD_BUCKET_LITERS,
        ),
    ]
}
