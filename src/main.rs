use anyhow::{Context, Result};
use bump_rust_version::{
    arguments::{Arguments, program_name},
    bumper::{Status, run},
    errors::BumpError,
};
use clap::{Parser, error::ErrorKind};
use log::LevelFilter;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let program = program_name(std::env::args_os().next().as_deref());
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            eprintln!("{}", BumpError::Usage { program });
            return Ok(Status::Usage.into());
        }
    };

    pretty_env_logger::formatted_builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .init();

    let status = run(&args, &program, &mut std::io::stdout(), &mut std::io::stderr())
        .context("Failed to bump the workspace version")?;
    Ok(status.into())
}
