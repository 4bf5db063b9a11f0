//! Filter builder - assemble filters against a dataset synopsis
//!
//! Umbrella crate re-exporting the workspace members:
//! - `filter-builder-core`: data model, synopsis normalizer and filter reducer
//! - `filter-builder-client`: synopsis fetcher with retry and form sessions
//!
//! The command line front end lives in `filter-builder-cli`.

pub use filter_builder_client as client;
pub use filter_builder_core as core;

/// Returns the version of the package.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let state = core::FilterState::new().apply(core::FilterAction::FilterAdded("colX".into()));
        assert_eq!(state.filters[0].name, "colX");
        assert_eq!(client::SynopsisClient::new("http://localhost/synopsis").max_attempts(), 3);
        assert!(!version().is_empty());
    }
}
