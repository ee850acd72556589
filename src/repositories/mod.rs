pub mod memory;
pub mod quote_repository;
pub mod quote_request_repository;
pub mod seed;
pub mod store;
pub mod vehicle_repository;

pub use quote_repository::QuoteRepository;
pub use quote_request_repository::QuoteRequestRepository;
pub use store::WorkshopStore;
pub use vehicle_repository::VehicleRepository;
