pub mod abstraction;
pub use abstraction::*;

pub mod builder;
pub use builder::*;

pub mod key;
pub use key::*;

pub mod node;
pub use node::*;

pub mod tree;
pub use tree::*;
