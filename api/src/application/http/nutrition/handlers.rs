pub mod get_nutrition;
pub mod list_nutrition;
