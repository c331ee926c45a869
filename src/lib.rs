//! mapme-setup: generate the backend, frontend, and database `.env` files for MapMe.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::api::{
    AppError, ConfigureOptions, ConfigureOutcome, configure, configure_at, configure_with_input,
    detect_local_ip,
};
pub use domain::{EnvFile, EnvFiles, EnvSchema, ResolvedConfig};
