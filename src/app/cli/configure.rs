//! Configure command implementation.

use std::io::IsTerminal;
use std::path::PathBuf;

use console::style;

use crate::adapters::{ConsolePrompt, LinePrompt};
use crate::app::api;
use crate::app::commands::configure::ConfigureOptions;
use crate::domain::AppError;
use crate::domain::derivation::SPOTIFY_DASHBOARD_URL;
use crate::ports::ValuePrompt;

pub fn run_configure(root: Option<PathBuf>, options: ConfigureOptions) -> Result<(), AppError> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let mut prompt: Box<dyn ValuePrompt> =
        if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
            Box::new(ConsolePrompt::new())
        } else {
            Box::new(LinePrompt::stdio())
        };

    let outcome = api::configure_at(root, &options, prompt.as_mut())?;

    if options.dry_run {
        println!("\n{}", style("Dry run: no files were written.").yellow());
        return Ok(());
    }

    println!("{}", style("\nConfiguration complete!").green().bright());
    println!(
        "\nRemember to add Spotify Redirect URI to your spotify api dashboard (at {}):",
        SPOTIFY_DASHBOARD_URL
    );
    println!("{}", outcome.redirect_uri());
    Ok(())
}

pub fn run_detect_ip() -> Result<(), AppError> {
    match api::detect_local_ip() {
        Some(ip) => println!("{}", ip),
        None => println!("No local IP could be detected."),
    }
    Ok(())
}
