pub mod http_client;
pub mod mappers;

pub use http_client::FoodBackendClient;
