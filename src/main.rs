mod cli;
mod workflow;

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    match workflow::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", e);
            // 原因をたどって表示する
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  原因: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
