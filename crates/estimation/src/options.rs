//! Option schema resolution: what has to be asked for a product, and what to preselect.

use serde::{Deserialize, Serialize};

use paintcalc_catalog::{ProductEntry, SurfaceClassOption};

/// Coat count choices; always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoatCountGroup {
    pub choices: Vec<u32>,
    pub default: u32,
}

/// A (label, yield) pair offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceClassChoice {
    pub label: String,
    pub value: f64,
}

impl From<&SurfaceClassOption> for SurfaceClassChoice {
    fn from(option: &SurfaceClassOption) -> Self {
        Self {
            label: option.label().to_string(),
            value: option.value(),
        }
    }
}

/// Surface absorption class choices; only for variable-yield products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceClassGroup {
    pub choices: Vec<SurfaceClassChoice>,
    pub default: SurfaceClassChoice,
}

/// One configurable option group, in the order it should be presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionGroup {
    CoatCount(CoatCountGroup),
    SurfaceClass(SurfaceClassGroup),
}

impl OptionGroup {
    pub fn as_coat_count(&self) -> Option<&CoatCountGroup> {
        match self {
            OptionGroup::CoatCount(group) => Some(group),
            OptionGroup::SurfaceClass(_) => None,
        }
    }

    pub fn as_surface_class(&self) -> Option<&SurfaceClassGroup> {
        match self {
            OptionGroup::SurfaceClass(group) => Some(group),
            OptionGroup::CoatCount(_) => None,
        }
    }
}

/// Describe the selectable option groups of `entry`.
///
/// The coat count group always comes first; a surface class group follows when
/// the product's yield depends on the surface. Same entry, same output.
pub fn resolve_option_groups(entry: &ProductEntry) -> Vec<OptionGroup> {
    let mut groups = vec![OptionGroup::CoatCount(CoatCountGroup {
        choices: entry.coat_options().to_vec(),
        default: entry.default_coat_count(),
    })];

    let kind = entry.yield_kind();
    if let Some(default) = kind.default_surface_class() {
        groups.push(OptionGroup::SurfaceClass(SurfaceClassGroup {
            choices: kind.surface_classes().iter().map(SurfaceClassChoice::from).collect(),
            default: default.into(),
        }));
    }

    groups
}
