//! SaveTracks CLI entry point

use std::process::ExitCode;

use clap::Parser;

use save_tracks::cli::{
    app::{run_configure, run_edit_track, run_encoders, run_save, EXIT_ERROR},
    args::{Cli, Commands, SaveArgs},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use save_tracks::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Encoders { json }) => run_encoders(json).await,
        Some(Commands::Configure { name }) => run_configure(&name).await,
        Some(Commands::EditTrack {
            sheet,
            number,
            title,
            artist,
        }) => run_edit_track(sheet, number, title, artist).await,
        Some(Commands::Save(args)) => run_save(args).await,
        None => run_save(SaveArgs::default()).await,
    }
}
