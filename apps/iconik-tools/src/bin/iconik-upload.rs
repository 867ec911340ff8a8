use iconik_tools::commands::upload::{UploadArgs, run};

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let args = UploadArgs::parse();

    if let Err(e) = args.common.init_logging() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
