pub mod assembler;
pub mod entities;
pub mod fallback;
pub mod health_tips;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
