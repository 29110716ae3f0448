mod api;
mod app;
mod cli;
mod error;
mod logging;
mod output;
mod query;
mod rename;
mod scanner;
mod session;
mod ui;

use api::{config_from_env, AniListClient};
use app::App;
use clap::Parser;
use cli::Args;
use error::AppError;
use output::display_summary;
use query::QueryOptions;
use scanner::list_folders;
use session::Session;
use std::sync::Arc;
use tracing::{error, info};
use ui::{Ui, UiConfig};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut ui = Ui::new(UiConfig::new());
    ui.header(env!("CARGO_PKG_VERSION"));

    let folders = list_folders(&args.target_dir)?;

    if folders.is_empty() {
        println!("No subfolders found in {}.", args.target_dir.display());
        return Ok(());
    }

    info!("Found {} folders to consider", folders.len());
    ui.info(&format!(
        "{} folders found in {}.",
        folders.len(),
        args.target_dir.display()
    ));
    if args.dry {
        ui.warning("Dry run: nothing will be renamed.");
    }

    let client = Arc::new(
        AniListClient::new(config_from_env()).map_err(|e| AppError::Other(e.to_string()))?,
    );

    let options = QueryOptions {
        strip_brackets: !args.keep_brackets,
        override_query: None,
    };

    let app = App::new(
        args.target_dir.clone(),
        Session::new(folders),
        client,
        options,
        args.dry,
        ui,
    );

    let outcomes = app.run()?;

    display_summary(&outcomes, args.dry, &mut std::io::stdout())
        .map_err(|e| AppError::Other(format!("Failed to display summary: {}", e)))?;

    Ok(())
}
