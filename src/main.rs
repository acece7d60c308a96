use clap::error::ErrorKind;
use clap::Parser;
use filemux::cli::{normalize_flag_args, CliArgs};
use filemux::logger::initialize_logger;
use filemux::{run, MuxConfig, SystemClipboard};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli_args = match CliArgs::try_parse_from(normalize_flag_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };
    initialize_logger();

    let config = MuxConfig::from(&cli_args);
    debug!("Running with {:?}", config);

    let mut clipboard = SystemClipboard::new();
    let mut stdout = std::io::stdout().lock();

    match run(&config, &cli_args.files, &mut clipboard, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
