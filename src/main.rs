use std::env;
use std::process::ExitCode;

use pixelplane::{config::RunConfig, error::PixelplaneError, run};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match RunConfig::from_args(&args) {
        Ok(config) => config,
        Err(PixelplaneError::InvalidArgs) => {
            println!("Invalid args");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
