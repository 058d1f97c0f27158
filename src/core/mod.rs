pub mod config;
pub mod timecode;

#[cfg(test)]
mod timecode_test;

pub use config::*;
pub use timecode::*;
