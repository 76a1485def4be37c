//! Session configuration.
//!
//! Only presentation settings live here; roster data is never read from or
//! written to disk.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Border style used when printing the student table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Utf8,
    Ascii,
    Markdown,
}

impl FromStr for TableStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" => Ok(TableStyle::Utf8),
            "ascii" => Ok(TableStyle::Ascii),
            "markdown" | "md" => Ok(TableStyle::Markdown),
            other => {
                anyhow::bail!("unknown table style '{other}' (expected utf8, ascii or markdown)")
            }
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableStyle::Utf8 => write!(f, "utf8"),
            TableStyle::Ascii => write!(f, "ascii"),
            TableStyle::Markdown => write!(f, "markdown"),
        }
    }
}

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Prompt shown before each command in an interactive session.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Border style of the student table.
    #[serde(default)]
    pub table_style: TableStyle,
    /// Reprint the table after every action that changes the roster.
    #[serde(default = "default_true")]
    pub auto_table: bool,
}

fn default_prompt() -> String {
    "gradebook> ".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            table_style: TableStyle::default(),
            auto_table: true,
        }
    }
}

/// Environment variable that overrides `table_style`.
pub const TABLE_STYLE_ENV: &str = "GRADEBOOK_TABLE_STYLE";

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// `GRADEBOOK_TABLE_STYLE` overrides the table style from any source.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradebookConfig::default(),
    };

    if let Ok(style) = std::env::var(TABLE_STYLE_ENV) {
        config.table_style = style
            .parse()
            .with_context(|| format!("invalid {TABLE_STYLE_ENV}"))?;
    }

    Ok(config)
}

/// Parse a configuration document.
pub fn parse_config(content: &str) -> Result<GradebookConfig> {
    Ok(toml::from_str::<GradebookConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GradebookConfig::default();
        assert_eq!(config.prompt, "gradebook> ");
        assert_eq!(config.table_style, TableStyle::Utf8);
        assert!(config.auto_table);
    }

    #[test]
    fn parse_full_config() {
        let config = parse_config(
            r#"
prompt = "> "
table_style = "markdown"
auto_table = false
"#,
        )
        .unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.table_style, TableStyle::Markdown);
        assert!(!config.auto_table);
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), GradebookConfig::default());
    }

    #[test]
    fn parse_rejects_unknown_style() {
        assert!(parse_config("table_style = \"fancy\"").is_err());
    }

    #[test]
    fn table_style_from_str() {
        assert_eq!("ASCII".parse::<TableStyle>().unwrap(), TableStyle::Ascii);
        assert_eq!(" md ".parse::<TableStyle>().unwrap(), TableStyle::Markdown);
        assert!("round".parse::<TableStyle>().is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_config_from(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradebook.toml");
        std::fs::write(&path, "prompt = \"grades$ \"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.prompt, "grades$ ");
        assert!(config.auto_table);
    }
}
