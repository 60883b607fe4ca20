pub mod config;
pub mod error;
pub mod species;
pub mod telemetry;
pub mod voyage;
