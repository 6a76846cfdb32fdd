use clap::Parser;
use inverse_cidr::cmd::{self, Cli};
use inverse_cidr::config::Settings;
use inverse_cidr::logging::init_logging;
use inverse_cidr::output::format_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let settings = match Settings::from_env() {
        Ok(settings) => cli.settings(settings),
        Err(e) => {
            eprintln!("{}", format_error(&e));
            return ExitCode::from(2);
        }
    };
    if let Err(e) = init_logging(&settings.log_config) {
        eprintln!("{}", format_error(e.as_ref()));
    }
    log::info!("#Start main()");

    match cmd::run(&cli.command, &settings) {
        Ok(report) => match report.render(settings.output) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", format_error(&e));
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::warn!("{:?} failed: {e}", cli.command);
            eprintln!("{}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}
