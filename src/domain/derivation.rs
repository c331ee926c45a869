//! Projection of a resolved config onto the backend, frontend, and database env files.

use super::env_file::EnvFile;
use super::env_schema::{
    BACKEND_PORT, DB_HOST, DB_NAME, DB_PASS, DB_PORT, DB_USER, LOCAL_IP,
    POSTGRES_HOST_AUTH_METHOD, ResolvedConfig, SPOTIFY_CLIENT_ID, SPOTIFY_CLIENT_SECRET,
};
use super::paths;

/// Port the Expo dev server listens on.
pub const EXPO_DEV_PORT: &str = "8081";

/// Dashboard where the backend redirect URI must be registered by hand.
pub const SPOTIFY_DASHBOARD_URL: &str = "https://developer.spotify.com/dashboard";

/// Spotify redirect URI used by the backend.
pub fn backend_redirect_uri(local_ip: &str) -> String {
    format!("exp://{}:{}", local_ip, EXPO_DEV_PORT)
}

/// Spotify redirect URI exposed to the frontend.
///
/// Historically the frontend applied `8081` as a width rather than a port:
/// the address is left-aligned and space-padded to 8081 columns.
pub fn frontend_redirect_uri(local_ip: &str) -> String {
    format!("exp://{:<8081}", local_ip)
}

/// Base URL the frontend uses to reach the backend.
pub fn backend_url(local_ip: &str, backend_port: &str) -> String {
    format!("http://{}:{}", local_ip, backend_port)
}

/// The three env files produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFiles {
    pub backend: EnvFile,
    pub frontend: EnvFile,
    pub database: EnvFile,
}

impl EnvFiles {
    /// Derive every file from a resolved config.
    pub fn derive(config: &ResolvedConfig) -> Self {
        Self { backend: backend(config), frontend: frontend(config), database: database(config) }
    }

    /// Files in write order.
    pub fn iter(&self) -> impl Iterator<Item = &EnvFile> {
        [&self.backend, &self.frontend, &self.database].into_iter()
    }
}

pub fn backend(config: &ResolvedConfig) -> EnvFile {
    EnvFile::new(paths::backend_env())
        .with("PORT", config.value(BACKEND_PORT))
        .with("DB_USER", config.value(DB_USER))
        .with("DB_PASS", config.value(DB_PASS))
        .with("DB_HOST", config.value(DB_HOST))
        .with("DB_NAME", config.value(DB_NAME))
        .with("DB_PORT", config.value(DB_PORT))
        .with("SPOTIFY_CLIENT_SECRET", config.value(SPOTIFY_CLIENT_SECRET))
        .with("SPOTIFY_CLIENT_ID", config.value(SPOTIFY_CLIENT_ID))
        .with("SPOTIFY_REDIRECT_URI", backend_redirect_uri(&config.value(LOCAL_IP)))
}

pub fn frontend(config: &ResolvedConfig) -> EnvFile {
    let local_ip = config.value(LOCAL_IP);
    EnvFile::new(paths::frontend_env())
        .with("EXPO_PUBLIC_SPOTIFY_CLIENT_ID", config.value(SPOTIFY_CLIENT_ID))
        .with("EXPO_PUBLIC_SPOTIFY_REDIRECT_URI", frontend_redirect_uri(&local_ip))
        .with("EXPO_PUBLIC_BACKEND_URL", backend_url(&local_ip, &config.value(BACKEND_PORT)))
}

pub fn database(config: &ResolvedConfig) -> EnvFile {
    // POSTGRES_DB is fed from DB_PORT, not DB_NAME. Kept as-is until the
    // database container's expectations are confirmed.
    EnvFile::new(paths::database_env())
        .with("POSTGRES_DB", config.value(DB_PORT))
        .with("POSTGRES_USER", config.value(DB_USER))
        .with("POSTGRES_PASSWORD", config.value(DB_PASS))
        .with("POSTGRES_HOST_AUTH_METHOD", config.value(POSTGRES_HOST_AUTH_METHOD))
}
