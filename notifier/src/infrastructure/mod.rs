pub mod api;
pub mod database;
pub mod service;
pub mod service_provider;
pub mod telemetry;
