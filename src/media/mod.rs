pub mod element;
pub mod engine;
pub mod fullscreen;

#[cfg(test)]
mod engine_test;

pub use element::*;
pub use engine::*;
pub use fullscreen::*;
