pub mod derivation;
pub mod env_file;
pub mod env_schema;
pub mod error;
pub mod paths;

pub use derivation::EnvFiles;
pub use env_file::EnvFile;
pub use env_schema::{EnvSchema, ResolvedConfig, SchemaEntry};
pub use error::AppError;
