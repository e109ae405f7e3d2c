use clap::Parser;
use fileman::core::config;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "fileman",
    version,
    about = "Interactive file manager for the ./files directory"
)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}; using default settings");
            config::FilemanConfig::default()
        }
    };
    let resolved = config::resolve(&file_config);

    // File logger only: the terminal belongs to the menu
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("fileman starting up with {:?}", resolved);

    match fileman::tui::run(&resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            log::info!("Input closed, exiting");
            println!();
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Terminal I/O failed: {}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
