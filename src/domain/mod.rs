pub mod brief;
pub mod conflicts;
pub mod costs;
pub mod facts;
pub mod listing;
pub mod synthesize;

// The one entry point the router actually calls.
pub use synthesize::synthesize_brief;
