pub mod simulated_backend;

pub use simulated_backend::SimulatedFoodBackend;
