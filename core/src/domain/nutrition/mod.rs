pub mod catalog;
pub mod entities;

pub use catalog::*;
pub use entities::*;
