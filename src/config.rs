use crate::render::OutputFormat;
use crate::theme::Theme;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Must exist before a run; it is never created.
    pub dir: PathBuf,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::Pdf,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub theme: Theme,
    pub output: OutputConfig,
    /// Seed for the randomized graphs and spring layouts. `None` draws fresh
    /// entropy on every run.
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    theme: Option<Theme>,
    output_dir: Option<PathBuf>,
    format: Option<OutputFormat>,
    seed: Option<u64>,
}

/// Loads the defaults, overridden by the JSON5 file at `path` if given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    let parsed = parse_config(&contents)
        .with_context(|| format!("invalid config file {}", path.display()))?;

    if let Some(theme) = parsed.theme {
        config.theme = theme;
    }
    if let Some(dir) = parsed.output_dir {
        config.output.dir = dir;
    }
    if let Some(format) = parsed.format {
        config.output.format = format;
    }
    if parsed.seed.is_some() {
        config.seed = parsed.seed;
    }
    Ok(config)
}

fn parse_config(contents: &str) -> anyhow::Result<ConfigFile> {
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    Ok(json5::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Color;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("output"));
        assert_eq!(config.output.format, OutputFormat::Pdf);
        assert_eq!(config.seed, None);
        assert_eq!(config.theme, Theme::workshop());
    }

    #[test]
    fn partial_theme_keeps_defaults() {
        let file = write_config(
            r##"{
                // comments are allowed
                theme: { nodeColor: "#ff0000", withLabels: true },
                outputDir: "figs",
                format: "svg",
                seed: 42,
            }"##,
        );
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.theme.node_color, Color::rgb(255, 0, 0));
        assert!(config.theme.with_labels);
        assert_eq!(config.theme.node_size, 75.0);
        assert_eq!(config.output.dir, PathBuf::from("figs"));
        assert_eq!(config.output.format, OutputFormat::Svg);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn rejects_bad_colors_and_keys() {
        let file = write_config(r#"{ theme: { edgeColor: "teal" } }"#);
        assert!(load_config(Some(file.path())).is_err());
        let file = write_config(r#"{ outDir: "x" }"#);
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/netplots.json5"))).is_err());
    }
}
