pub mod app;
pub mod audio;
pub mod config;
pub mod input;
pub mod model;
pub mod render;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
