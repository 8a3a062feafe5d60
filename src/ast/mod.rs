mod display;
pub mod input;
pub mod syntax;

pub use input::*;
pub use syntax::*;
