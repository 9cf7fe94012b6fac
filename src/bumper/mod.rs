pub mod rewrite;
pub mod summary;

use crate::utils::logger::{LogLevel, Logger};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct BumpOptions {
    pub dry_run: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BumpOutcome {
    Bumped { count: usize, written: bool },
    KeyNotFound,
}

/// Increments the build number of every version line in the given file.
///
/// ### Parameters
/// - `path`: The config file to rewrite (expected to exist).
/// - `options`: Dry-run and verbosity switches.
///
pub fn bump_file(path: &Path, options: &BumpOptions) -> Result<BumpOutcome, String> {
    let logger = Logger::new();

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let rewrite = rewrite::rewrite_config(&content);

    if options.verbose {
        for line_number in &rewrite.malformed {
            logger.log_message(
                LogLevel::Debug,
                &format!(
                    "Skipping line {}: '{}' without a quoted value",
                    line_number,
                    rewrite::KEY_PREFIX
                ),
            );
        }
    }

    if !rewrite.found() {
        summary::print_missing_key_warning(path);
        return Ok(BumpOutcome::KeyNotFound);
    }

    for bump in &rewrite.bumps {
        if options.verbose {
            logger.log_message(
                LogLevel::Debug,
                &format!("Line {}: {} -> {}", bump.line_number, bump.old, bump.new),
            );
        }
        summary::print_bump_summary(bump, path, options.dry_run);
    }

    let written = !options.dry_run;
    if written {
        fs::write(path, rewrite.render())
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    } else if options.verbose {
        logger.log_message(
            LogLevel::Info,
            &format!("Dry run, {} left unchanged", path.display()),
        );
    }

    Ok(BumpOutcome::Bumped {
        count: rewrite.bumps.len(),
        written,
    })
}
