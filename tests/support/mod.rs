// tests/support/mod.rs
// Shared by several integration test binaries; not every helper is used in each.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
