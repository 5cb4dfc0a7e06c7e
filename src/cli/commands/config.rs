//! Configuration command implementations

use super::{GlobalArgs, config_root};
use crate::cli::{ConfigCommands, Output, ShowFormat};
use crate::config::LintgateConfig;
use anyhow::{Context, Result};

/// Execute config commands
pub fn execute(cmd: ConfigCommands, global: &GlobalArgs, output: &Output) -> Result<i32> {
    let config = global.load_config(&config_root())?;
    match cmd {
        ConfigCommands::Show { format } => show(&config, format, output),
        ConfigCommands::Validate => validate(&config, output),
    }
}

fn show(config: &LintgateConfig, format: ShowFormat, output: &Output) -> Result<i32> {
    let rendered = match format {
        ShowFormat::Text => {
            print_summary(config, output);
            return Ok(0);
        }
        ShowFormat::Toml => toml::to_string_pretty(config).context("Failed to render TOML")?,
        ShowFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to render JSON")?
        }
        ShowFormat::Yaml => serde_yml::to_string(config).context("Failed to render YAML")?,
    };

    println!("{}", rendered.trim_end());
    Ok(0)
}

fn print_summary(config: &LintgateConfig, output: &Output) {
    output.header("⚙️ Configuration");
    output.table_row("Required tools", &config.tools.required.join(", "));
    output.table_row("Skip tool check", &config.tools.skip_check.to_string());

    for language in &config.languages {
        output.header(&format!("Language: {}", language.name));
        output.table_row("Extensions", &language.extensions.join(", "));
        output.table_row(
            "Linter",
            &format!("{} {}", language.linter.command, language.linter.args.join(" ")),
        );
        output.table_row(
            "Formatter",
            &format!(
                "{} {}",
                language.formatter.command,
                language.formatter.args.join(" ")
            ),
        );
        if !language.formatter.exclude.is_empty() {
            output.table_row("Excluded", &language.formatter.exclude.join(", "));
        }
    }

    output.header("Debug statements");
    output.table_row("Enabled", &config.debug.enabled.to_string());
    for pattern in &config.debug.patterns {
        output.table_row(&pattern.name, &pattern.regex);
    }

    output.header("Commit message");
    output.table_row("Enabled", &config.commit_msg.enabled.to_string());
    output.table_row("Issue pattern", &config.commit_msg.pattern);
    output.table_row("Prefix", &config.commit_msg.prefix);
}

fn validate(config: &LintgateConfig, output: &Output) -> Result<i32> {
    match config.validate() {
        Ok(()) => {
            output.success("Configuration is valid");
            output.table_row("Languages", &config.languages.len().to_string());
            output.table_row("Debug patterns", &config.debug.patterns.len().to_string());
            Ok(0)
        }
        Err(e) => {
            output.error(&format!("Configuration is invalid: {:#}", e));
            Ok(1)
        }
    }
}
