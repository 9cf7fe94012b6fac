use crate::{
    bumper::{BumpOptions, BumpOutcome},
    utils::{
        logger::{LogLevel, Logger},
        signature::get_signature,
        version::get_version,
    },
};
use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser, error::ErrorKind};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

mod bumper;
mod utils;

const USAGE: &str = "Usage: buildbump <path-to-project.godot>";

#[derive(Parser)]
#[command(name = "buildbump")]
#[command(author = "Labscend Studios")]
#[command(about = "Increment the build number of config/version in a project.godot file")]
struct Cli {
    /// Path to the project.godot file to update
    path: Option<PathBuf>,

    /// Print the version report without writing the file
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Log every matched and skipped version line
    #[arg(short, long, default_value_t = false, env = "BUILDBUMP_VERBOSE")]
    verbose: bool,

    /// Extra arguments after the path are ignored
    #[arg(hide = true)]
    #[allow(dead_code)]
    ignored: Vec<OsString>,
}

impl Cli {
    /// Fallback when clap rejects the arguments (unknown flags, paths that
    /// start with `-`): the first raw argument is the path, the rest is ignored.
    fn from_raw_args(raw_args: &[OsString]) -> Self {
        Cli {
            path: raw_args.get(1).map(PathBuf::from),
            dry_run: false,
            verbose: false,
            ignored: raw_args.iter().skip(2).cloned().collect(),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let version = get_version();
    let signature = get_signature(&version);

    let version_static: &'static str = Box::leak(format!("v{}", version).into_boxed_str());
    let signature_static: &'static str = Box::leak(signature.into_boxed_str());

    let raw_args: Vec<OsString> = std::env::args_os().collect();
    if raw_args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", signature_static);
        return Ok(ExitCode::SUCCESS);
    }

    let cmd = Cli::command()
        .version(version_static)
        .before_help(signature_static);
    let cli = match cmd.try_get_matches_from(&raw_args) {
        Ok(matches) => Cli::from_arg_matches(&matches).context("failed to parse cli args")?,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => Cli::from_raw_args(&raw_args),
    };

    let logger = Logger::new();

    let Some(path) = cli.path else {
        logger.log_message_with_trace(LogLevel::Error, "Missing path argument", vec![USAGE]);
        return Ok(ExitCode::FAILURE);
    };

    if !path.is_file() {
        logger.log_message(
            LogLevel::Error,
            &format!("File not found: {}", path.display()),
        );
        return Ok(ExitCode::FAILURE);
    }

    let options = BumpOptions {
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };
    let outcome = bumper::bump_file(&path, &options)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Version bump failed for {}", path.display()))?;

    if options.verbose {
        if let BumpOutcome::Bumped { count, written } = outcome {
            logger.log_message(
                LogLevel::Info,
                &format!(
                    "{} version line(s) bumped, file {}",
                    count,
                    if written { "written" } else { "untouched" }
                ),
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
