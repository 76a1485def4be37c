//! The `gradebook init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = Path::new("gradebook.toml");
    if path.exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust the prompt and table style in gradebook.toml");
    println!("  2. Run: gradebook");
    println!("  3. Type `help` inside the session for the command list");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Prompt shown before each command in an interactive session.
prompt = "gradebook> "

# Table borders: "utf8", "ascii" or "markdown".
# GRADEBOOK_TABLE_STYLE overrides this value.
table_style = "utf8"

# Reprint the student table after every change to the roster.
auto_table = true
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses() {
        let config = crate::config::parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, crate::config::GradebookConfig::default());
    }
}
