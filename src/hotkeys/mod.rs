pub mod bindings;
pub mod events;


pub use bindings::*;
pub use events::*;
