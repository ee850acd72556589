pub mod auth_controller;
pub mod dashboard_controller;
pub mod quote_controller;
pub mod quote_request_controller;
pub mod service_controller;
pub mod vehicle_controller;
