use crate::emitter::{TerminatorPolicy, DEFAULT_WRAP_EVERY};
use crate::error::{ClassUnionError, Result};
use crate::scanner::ExtractionMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "base.css";
pub const DEFAULT_OUTPUT: &str = "output.txt";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    pub path: PathBuf,
    pub mode: ModeSelection,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatConfig {
    pub wrap_every: usize,
    pub terminator: TerminatorPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

/// Extraction mode as configured: either fixed, or inferred from the input name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSelection {
    #[default]
    Auto,
    Stylesheet,
    List,
}

impl ModeSelection {
    pub fn resolve(self, input: &Path) -> ExtractionMode {
        match self {
            ModeSelection::Auto => ExtractionMode::from_path(input),
            ModeSelection::Stylesheet => ExtractionMode::Stylesheet,
            ModeSelection::List => ExtractionMode::List,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT),
            mode: ModeSelection::Auto,
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            wrap_every: DEFAULT_WRAP_EVERY,
            terminator: TerminatorPolicy::Position,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ClassUnionError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ClassUnionError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ClassUnionError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["class-union.toml", ".class-union.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref input) = cli_args.input {
            self.input.path = input.clone();
        }

        if let Some(mode) = cli_args.mode {
            self.input.mode = mode;
        }

        if let Some(wrap_every) = cli_args.wrap_every {
            self.format.wrap_every = wrap_every;
        }

        if let Some(terminator) = cli_args.terminator {
            self.format.terminator = terminator;
        }

        if let Some(ref output) = cli_args.output {
            self.output.path = output.clone();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| ClassUnionError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| ClassUnionError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.path.as_os_str().is_empty() {
            return Err(ClassUnionError::Config {
                message: "Input path must not be empty".to_string(),
            });
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(ClassUnionError::Config {
                message: "Output path must not be empty".to_string(),
            });
        }

        if self.format.wrap_every == 0 {
            return Err(ClassUnionError::Config {
                message: "Line wrap width must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// The mode the configured input will be read with.
    pub fn extraction_mode(&self) -> ExtractionMode {
        self.input.mode.resolve(&self.input.path)
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub mode: Option<ModeSelection>,
    pub wrap_every: Option<usize>,
    pub terminator: Option<TerminatorPolicy>,
    pub output: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input;
        self
    }

    pub fn with_mode(mut self, mode: Option<ModeSelection>) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_wrap_every(mut self, wrap_every: Option<usize>) -> Self {
        self.wrap_every = wrap_every;
        self
    }

    pub fn with_terminator(mut self, terminator: Option<TerminatorPolicy>) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}
