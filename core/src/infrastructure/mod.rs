pub mod food_backend;
pub mod notifications;
pub mod simulated;
