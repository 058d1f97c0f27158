pub mod app;
pub mod controls;
pub mod surface;

#[cfg(test)]
mod app_test;

pub use app::*;
