//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemStore, LinePrompt, SystemAddressLookup};
use crate::app::{AppContext, commands::configure};
use crate::ports::ValuePrompt;
use crate::services::AddressResolver;

pub use crate::app::commands::configure::{ConfigureOptions, ConfigureOutcome};
pub use crate::domain::AppError;

/// Create an `AppContext` for a given project root.
fn create_context(root: PathBuf) -> AppContext<FilesystemStore, SystemAddressLookup> {
    AppContext::new(FilesystemStore::new(root), SystemAddressLookup::new())
}

fn ensure_root(root: &Path) -> Result<(), AppError> {
    if !root.is_dir() {
        return Err(AppError::RootNotFound(root.display().to_string()));
    }
    Ok(())
}

/// Run the configure flow in the current directory.
pub fn configure<P: ValuePrompt + ?Sized>(
    options: &ConfigureOptions,
    prompt: &mut P,
) -> Result<ConfigureOutcome, AppError> {
    configure_at(std::env::current_dir()?, options, prompt)
}

/// Run the configure flow with `root` as the project root.
pub fn configure_at<P: ValuePrompt + ?Sized>(
    root: impl Into<PathBuf>,
    options: &ConfigureOptions,
    prompt: &mut P,
) -> Result<ConfigureOutcome, AppError> {
    let root = root.into();
    ensure_root(&root)?;

    let ctx = create_context(root);
    configure::execute(&ctx, prompt, options)
}

/// Run the configure flow reading one answer per line from `input`.
pub fn configure_with_input<R: BufRead>(
    root: impl Into<PathBuf>,
    options: &ConfigureOptions,
    input: R,
) -> Result<ConfigureOutcome, AppError> {
    let mut prompt = LinePrompt::new(input, io::stdout());
    configure_at(root, options, &mut prompt)
}

/// Detect the local IP the way the configure flow does.
pub fn detect_local_ip() -> Option<String> {
    AddressResolver::new(SystemAddressLookup::new()).resolve_local_ip()
}
