//! Configure command: detect the local IP, collect values, write the env files.

mod collect;
mod emit;

use std::path::PathBuf;

use console::style;

use crate::app::AppContext;
use crate::domain::env_schema::LOCAL_IP;
use crate::domain::{AppError, EnvFiles, EnvSchema, ResolvedConfig};
use crate::ports::{AddressLookup, RepositoryFilesystem, ValuePrompt};
use crate::services::AddressResolver;

pub use collect::collect;
pub use emit::write_env_file;

/// Options for a configure run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureOptions {
    /// Seed `LOCAL_IP` from local address detection.
    pub detect_ip: bool,
    /// Take every default without prompting.
    pub accept_defaults: bool,
    /// Print the derived files instead of writing them.
    pub dry_run: bool,
}

impl Default for ConfigureOptions {
    fn default() -> Self {
        Self { detect_ip: true, accept_defaults: false, dry_run: false }
    }
}

/// Result of a configure run.
#[derive(Debug, Clone)]
pub struct ConfigureOutcome {
    pub detected_ip: Option<String>,
    pub config: ResolvedConfig,
    pub files: EnvFiles,
    /// Absolute paths written, in write order. Empty for a dry run.
    pub written: Vec<PathBuf>,
}

impl ConfigureOutcome {
    /// Redirect URI to register with the Spotify developer dashboard.
    pub fn redirect_uri(&self) -> &str {
        self.files.backend.get("SPOTIFY_REDIRECT_URI").unwrap_or_default()
    }
}

/// Build the prompt schema, seeding `LOCAL_IP` when detection succeeds.
pub fn seed_schema<L: AddressLookup>(lookup: L, detect_ip: bool) -> (EnvSchema, Option<String>) {
    let schema = EnvSchema::mapme();
    if !detect_ip {
        return (schema, None);
    }

    match AddressResolver::new(lookup).resolve_local_ip() {
        Some(ip) => (schema.with_default(LOCAL_IP, ip.clone()), Some(ip)),
        None => (schema, None),
    }
}

/// Execute the configure command.
///
/// Files are written one after another; a write failure stops the run and
/// leaves files already written in place.
pub fn execute<F, L, P>(
    ctx: &AppContext<F, L>,
    prompt: &mut P,
    options: &ConfigureOptions,
) -> Result<ConfigureOutcome, AppError>
where
    F: RepositoryFilesystem,
    L: AddressLookup,
    P: ValuePrompt + ?Sized,
{
    println!("{}", style("\n--- Environment Variable Configuration ---").cyan().bright());

    let (schema, detected_ip) = seed_schema(ctx.lookup(), options.detect_ip);
    if let Some(ip) = &detected_ip {
        println!("Detected local ip: {}", ip);
    }

    let config = if options.accept_defaults {
        println!("Using default values for every key.");
        schema.defaults()
    } else {
        println!("Press Enter to accept the default value shown in [brackets].");
        println!("------------------------------------------");
        collect(&schema, prompt)?
    };

    let files = EnvFiles::derive(&config);
    let mut written = Vec::new();

    if options.dry_run {
        for file in files.iter() {
            println!("\n# {}", file.path());
            print!("{}", file.render());
        }
    } else {
        println!("\nCreating .env files...");
        for file in files.iter() {
            let path = write_env_file(ctx.filesystem(), file)?;
            println!("Generated/Updated {}", path.display());
            written.push(path);
        }
    }

    Ok(ConfigureOutcome { detected_ip, config, files, written })
}
