pub mod autohide;
pub mod controller;
pub mod view;


pub use autohide::*;
pub use controller::*;
pub use view::*;
