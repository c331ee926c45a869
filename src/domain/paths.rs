//! Output locations, relative to the project root.

pub const BACKEND_DIR: &str = "backend";
pub const FRONTEND_DIR: &str = "frontend";
pub const DATABASE_DIR: &str = "database";

pub const ENV_FILE_NAME: &str = ".env";

pub fn backend_env() -> String {
    format!("{}/{}", BACKEND_DIR, ENV_FILE_NAME)
}

pub fn frontend_env() -> String {
    format!("{}/{}", FRONTEND_DIR, ENV_FILE_NAME)
}

pub fn database_env() -> String {
    format!("{}/{}", DATABASE_DIR, ENV_FILE_NAME)
}
