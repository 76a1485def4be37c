//! The `gradebook shell` command.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::config::load_config_from;
use crate::shell::Shell;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    info!(interactive, table_style = %config.table_style, "session started");

    let stats = Shell::new(config, stdin.lock(), io::stdout().lock())
        .interactive(interactive)
        .run()?;

    info!(
        actions = stats.actions,
        rejected = stats.rejected,
        "session ended"
    );
    Ok(())
}
