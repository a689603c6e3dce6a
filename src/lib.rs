pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod files;
pub mod report;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, FormatConfig, InputConfig, ModeSelection, OutputConfig};
pub use error::{ClassUnionError, Result, UserFriendlyError};

// Core functionality re-exports
pub use emitter::{TerminatorPolicy, UnionFormatter};
pub use files::{FileOperations, InputText};
pub use report::{GenerationReport, Preview};
pub use scanner::{extract_identifiers, split_lines, ExtractionMode, SelectorScanner};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;
use std::time::Instant;

/// Main library interface: read → extract → format → write.
pub struct ClassUnion {
    config: Config,
    scanner: SelectorScanner,
    formatter: UnionFormatter,
    output_formatter: OutputFormatter,
}

impl ClassUnion {
    /// Create a new ClassUnion instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        config.validate()?;

        let formatter = UnionFormatter::new()
            .with_wrap_every(config.format.wrap_every)
            .with_policy(config.format.terminator);

        Ok(Self {
            config,
            scanner: SelectorScanner::new()?,
            formatter,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
        })
    }

    /// Create ClassUnion instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Self::new(config, output_mode, cli_args.verbosity_level(), cli_args.quiet)
    }

    /// Extract identifiers from `text` and render them as a union.
    pub fn render(&self, text: &str) -> String {
        let identifiers = self.extract(text);
        self.formatter.format(&identifiers)
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        extract_identifiers(text, self.config.extraction_mode(), &self.scanner)
    }

    /// Run the whole pipeline and overwrite the configured output file.
    pub fn generate(&self) -> Result<GenerationReport> {
        let preview = self.preview()?;
        let output_path = &self.config.output.path;

        self.output_formatter.debug(&format!("Writing {}", output_path.display()));
        let file_ops = FileOperations::new();
        let bytes_written = file_ops.write_output(output_path, &preview.rendered)?;

        self.output_formatter.success(&format!(
            "Wrote {} identifiers to {}",
            preview.report.identifier_count,
            output_path.display()
        ));

        Ok(GenerationReport {
            bytes_written,
            dry_run: false,
            ..preview.report
        })
    }

    /// Read, extract and format without touching the output file.
    pub fn preview(&self) -> Result<Preview> {
        let start_time = Instant::now();
        let input_path = &self.config.input.path;
        let mode = self.config.extraction_mode();

        self.output_formatter.start_operation(&format!(
            "Reading {} ({} mode)",
            input_path.display(),
            mode
        ));

        let file_ops = FileOperations::new();
        let input = file_ops.read_input(input_path)?;
        if input.lossy {
            self.output_formatter.warning(&format!(
                "{} is not valid UTF-8; invalid bytes were replaced",
                input_path.display()
            ));
        }

        let identifiers = extract_identifiers(&input.text, mode, &self.scanner);
        self.output_formatter.info(&format!("Found {} identifiers", identifiers.len()));

        if identifiers.is_empty() {
            self.output_formatter.warning(&format!(
                "No class selectors found in {}; the output will be empty",
                input_path.display()
            ));
        }

        let rendered = self.formatter.format(&identifiers);
        let report = GenerationReport {
            input_path: input_path.display().to_string(),
            output_path: self.config.output.path.display().to_string(),
            mode,
            identifier_count: identifiers.len(),
            line_count: report::count_lines(&rendered),
            bytes_read: input.bytes_read,
            bytes_written: 0,
            lossy_input: input.lossy,
            dry_run: true,
            duration: start_time.elapsed(),
            generated_at: chrono::Utc::now(),
        };

        Ok(Preview { report, rendered })
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(ClassUnionError::Io)?;
        Ok(())
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &ClassUnionError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convert a stylesheet to a union with default settings, without any I/O.
pub fn render_stylesheet(css: &str) -> Result<String> {
    let scanner = SelectorScanner::new()?;
    let identifiers = scanner.scan(css);
    Ok(UnionFormatter::new().format(&identifiers))
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get build information
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        build_date: option_env!("BUILD_DATE").unwrap_or("unknown"),
        target: std::env::consts::ARCH.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_date: &'static str,
    pub target: String,
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "class-union {} ({}) built on {} for {}",
            self.version, self.git_hash, self.build_date, self.target
        )
    }
}
