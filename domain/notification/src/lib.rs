pub mod model;
pub mod repository;
pub mod service;
#[cfg(feature = "mock")]
pub mod mock;
