/// Minimum similarity for a typo to be corrected to a known food.
pub const DEFAULT_SIMILARITY_CUTOFF: f64 = 0.6;

// ─────────────────────────────────────────────────────────────────────────────
// Suggestion thresholds, in the reference table's units
// ─────────────────────────────────────────────────────────────────────────────

/// Meals with less protein than this (g) get a protein suggestion.
pub const PROTEIN_MIN_G: f64 = 20.0;

/// Meals with less fiber than this (g) get a fiber suggestion.
pub const FIBER_MIN_G: f64 = 10.0;

/// Meals with less vitamin C than this (mg) get a vitamin C suggestion.
pub const VITAMIN_C_MIN_MG: f64 = 15.0;

pub const PROTEIN_SUGGESTION: &str = "Add protein-rich foods like dal, paneer, or chicken.";
pub const FIBER_SUGGESTION: &str = "Include fiber-rich veggies or fruits.";
pub const VITAMIN_C_SUGGESTION: &str = "Add vitamin C sources like guava, orange, or capsicum.";
