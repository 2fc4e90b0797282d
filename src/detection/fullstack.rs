//! Composite project recognition from sibling directories

/// Sibling directory pairs tried in order; the first side becomes "Backend",
/// the second "Frontend".
pub const SIBLING_PAIRS: &[(&str, &str)] = &[
    ("backend", "frontend"),
    ("server", "client"),
    ("api", "web"),
    ("api", "client"),
    ("backend", "client"),
    ("server", "frontend"),
];

pub const BACKEND_NAME: &str = "Backend";
pub const FRONTEND_NAME: &str = "Frontend";
