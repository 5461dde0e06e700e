use std::{error::Error, process::ExitCode};

use resize_in_place::{
    args::{self, Command},
    help,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match real_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    let arguments: Vec<_> = std::env::args_os().collect();
    match args::parse_args(arguments)? {
        Command::PrintHelp => help::print_help(env!("CARGO_PKG_NAME")),
        Command::Resize(job) => job.execute()?,
    }
    Ok(())
}
