pub mod builder;
pub mod model;
pub mod node;

pub use builder::*;
pub use model::*;
pub use node::*;
