pub mod auth_tests;
pub mod properties_tests;
