use crate::format::{DEFAULT_COMMAND, Formatter};
use crate::header::DEFAULT_TEMPLATE;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub format: Option<FormatConfig>,
    pub header: Option<HeaderConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormatConfig {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HeaderConfig {
    /// tinytemplate text; `{from}`, `{tool}` and `{url}` are available
    pub template: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            let text = fs::read_to_string(p).with_context(|| format!("reading config at {p}"))?;
            return parse(&text).with_context(|| "parsing config");
        }
        let default = Self::default_path()?;
        if default.exists() {
            let text = fs::read_to_string(&default)
                .with_context(|| format!("reading config at {}", default.display()))?;
            parse(&text).with_context(|| "parsing config")
        } else {
            Ok(Self::default())
        }
    }

    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| anyhow!("cannot resolve config dir"))?;
        Ok(base.join("goat").join("config.toml"))
    }

    /// Formatter from config, with `--formatter` taking precedence over the command.
    pub fn formatter(&self, command_override: Option<&str>) -> Formatter {
        let fc = self.format.clone().unwrap_or_default();
        Formatter {
            command: command_override
                .map(str::to_string)
                .or(fc.command)
                .unwrap_or_else(|| DEFAULT_COMMAND.into()),
            args: fc.args.unwrap_or_default(),
            timeout_ms: fc.timeout_ms,
        }
    }

    pub fn header_template(&self) -> &str {
        self.header
            .as_ref()
            .and_then(|h| h.template.as_deref())
            .unwrap_or(DEFAULT_TEMPLATE)
    }
}

fn parse(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse("").unwrap();
        let f = cfg.formatter(None);
        assert_eq!(f.command, "gofmt");
        assert!(f.args.is_empty());
        assert_eq!(f.timeout_ms, None);
        assert_eq!(cfg.header_template(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn reads_format_and_header_sections() {
        let cfg = parse(
            r#"
[format]
command = "rustfmt"
args = ["--edition", "2021"]
timeout_ms = 5000

[header]
template = "// generated by {tool}\n"
"#,
        )
        .unwrap();
        let f = cfg.formatter(None);
        assert_eq!(f.command, "rustfmt");
        assert_eq!(f.args, vec!["--edition", "2021"]);
        assert_eq!(f.timeout_ms, Some(5000));
        assert_eq!(cfg.header_template(), "// generated by {tool}\n");
    }

    #[test]
    fn flag_overrides_configured_command() {
        let cfg = parse("[format]\ncommand = \"rustfmt\"\nargs = [\"-q\"]\n").unwrap();
        let f = cfg.formatter(Some("cat"));
        assert_eq!(f.command, "cat");
        assert_eq!(f.args, vec!["-q"]);
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(parse("[format\ncommand = ").is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        assert!(Config::load(Some("/definitely/not/here/goat.toml")).is_err());
    }
}
