// Application Layer - Use Cases

pub mod constants;
pub mod smoke_test;

// Re-exports
pub use smoke_test::SmokeTestRunner;
