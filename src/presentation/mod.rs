//! JavaScript-facing bridge. Minimal logic: everything is delegated to the
//! application layer and serialised to plain JS objects.

pub mod dashboard_api;

pub use dashboard_api::*;
