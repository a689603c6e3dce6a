use clap::Parser;
use class_union::{
    Cli, ClassUnion, ClassUnionError, OutputFormatter, OutputMode, UserFriendlyError,
};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let class_union = match ClassUnion::from_cli(&cli) {
        Ok(class_union) => class_union,
        Err(e) => {
            print_startup_error(&cli, &e);
            return exit_code_for(&e);
        }
    };

    if cli.dry_run {
        return handle_dry_run(&class_union);
    }

    match class_union.generate() {
        Ok(report) => {
            class_union
                .output_formatter()
                .print_generation_report(&report);
            0
        }
        Err(e) => {
            class_union.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &ClassUnionError) -> i32 {
    match error {
        ClassUnionError::Config { .. } => 2,
        ClassUnionError::InputNotFound { .. } => 3,
        ClassUnionError::Permission { .. } | ClassUnionError::OutputNotWritable { .. } => 4,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "class-union.toml".to_string());

    match ClassUnion::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  class-union --config {}", config_path);
            println!("\nEdit the file to customize settings for your needs.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(class_union: &ClassUnion) -> i32 {
    let formatter = class_union.output_formatter();

    formatter.info("DRY RUN MODE - the output file will not be written");

    match class_union.preview() {
        Ok(preview) => {
            formatter.print_separator();
            formatter.print_rendered(&preview.rendered);
            formatter.print_separator();
            formatter.print_generation_report(&preview.report);
            0
        }
        Err(e) => {
            class_union.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn print_startup_error(cli: &Cli, error: &ClassUnionError) {
    let mode = match cli.output_format {
        class_union::OutputFormat::Human => OutputMode::Human,
        class_union::OutputFormat::Json => OutputMode::Json,
        class_union::OutputFormat::Plain => OutputMode::Plain,
    };
    let formatter = OutputFormatter::new(mode, 0, false);
    formatter.print_user_friendly_error(error);
}
