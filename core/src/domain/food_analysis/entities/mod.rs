pub mod analysis_result;
pub mod food_item;
pub mod prediction;
pub mod product;

pub use analysis_result::*;
pub use food_item::*;
pub use prediction::*;
pub use product::*;
