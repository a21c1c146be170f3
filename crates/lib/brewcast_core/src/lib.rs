//! # brewcast_core
//!
//! Core domain logic for Brewcast: the forecasting-preset data model and
//! the session store that keeps an editable draft synchronized with the
//! remote preset resource.

pub mod config;
pub mod models;
pub mod presets;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
