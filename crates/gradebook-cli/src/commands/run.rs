//! The `gradebook run` command.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::load_config_from;
use crate::shell::Shell;

pub fn execute(
    script: PathBuf,
    fail_on_error: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let file = File::open(&script)
        .with_context(|| format!("failed to open script: {}", script.display()))?;

    let stats = Shell::new(config, BufReader::new(file), io::stdout().lock())
        .echo(true)
        .run()
        .with_context(|| format!("failed while running script: {}", script.display()))?;

    info!(
        script = %script.display(),
        actions = stats.actions,
        rejected = stats.rejected,
        "script finished"
    );

    if fail_on_error && stats.rejected > 0 {
        anyhow::bail!(
            "{} of {} command(s) rejected in {}",
            stats.rejected,
            stats.actions,
            script.display()
        );
    }

    Ok(())
}
