use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use schema_form_core::{
    FormFile, MetadataField, SchemaAssembler, SchemaDocument, SchemaType, SubmitError,
    WARNING_HEADER,
};
use tracing_subscriber::EnvFilter;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

/// CLI-specific schema type enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliSchemaType {
    String,
    Number,
    Object,
    Array,
    Enums,
    Multiple,
    Boolean,
    Null,
}

impl From<CliSchemaType> for SchemaType {
    fn from(ty: CliSchemaType) -> Self {
        match ty {
            CliSchemaType::String => Self::String,
            CliSchemaType::Number => Self::Number,
            CliSchemaType::Object => Self::Object,
            CliSchemaType::Array => Self::Array,
            CliSchemaType::Enums => Self::Enums,
            CliSchemaType::Multiple => Self::Multiple,
            CliSchemaType::Boolean => Self::Boolean,
            CliSchemaType::Null => Self::Null,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "schema-form")]
#[command(about = "Assemble JSON Schema documents from form input")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a JSON Schema document from a form file and/or flags.
    Build(BuildArgs),
    /// Check that form files carry the required metadata.
    Validate(ValidateArgs),
    /// List the supported schema types.
    Types,
}

#[derive(Debug, Args)]
struct BuildArgs {
    /// Form file (YAML or JSON) to start from.
    #[arg(long)]
    form: Option<PathBuf>,
    /// Schema title (overrides the form file).
    #[arg(long)]
    title: Option<String>,
    /// Schema description (overrides the form file).
    #[arg(long)]
    description: Option<String>,
    /// Schema id (overrides the form file).
    #[arg(long)]
    id: Option<String>,
    /// Schema type (overrides the form file; a different type resets its options).
    #[arg(long = "type", value_enum)]
    schema_type: Option<CliSchemaType>,
    /// Write the document here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Output format (default: json).
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Form files to check.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Build(args) => run_build(args),
        Command::Validate(args) => run_validate(args),
        Command::Types => run_types(),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_form(path: &Path, assembler: &mut SchemaAssembler) -> Result<(), String> {
    tracing::debug!(path = %path.display(), "applying form file");
    let form = FormFile::load(path)
        .map_err(|err| format!("Failed to load form '{}': {err}", path.display()))?;
    form.apply(assembler)
        .map_err(|err| format!("Invalid form '{}': {err}", path.display()))
}

fn run_build(args: BuildArgs) -> Result<(), String> {
    let mut assembler = SchemaAssembler::new();
    if let Some(path) = &args.form {
        load_form(path, &mut assembler)?;
    }

    let overrides = [
        (MetadataField::Title, args.title),
        (MetadataField::Description, args.description),
        (MetadataField::Id, args.id),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            assembler.update_metadata(field, value);
        }
    }
    if let Some(ty) = args.schema_type {
        assembler.select_type(ty.into());
    }

    let mut produced = None;
    assembler
        .submit(|document| produced = Some(document))
        .map_err(|err| match err {
            SubmitError::Validation(err) => format!("{WARNING_HEADER}: {err}"),
            SubmitError::NoTypeSelected => {
                "No schema type selected (use --type or a form file with a schema entry)"
                    .to_string()
            }
        })?;
    let document = produced.ok_or("Schema consumer was not called")?;

    let raw = render(&document, args.format)?;
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|err| {
                        format!(
                            "Failed to create output directory '{}': {err}",
                            parent.display()
                        )
                    })?;
                }
            }
            fs::write(path, raw)
                .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
            eprintln!(
                "Wrote schema '{}' to '{}'.",
                document.id().unwrap_or_default(),
                path.display()
            );
        }
        None => println!("{raw}"),
    }

    Ok(())
}

fn render(document: &SchemaDocument, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => document
            .to_json_pretty()
            .map_err(|err| format!("Failed to serialize schema as JSON: {err}")),
        CliOutputFormat::Yaml => serde_yaml::to_string(document)
            .map_err(|err| format!("Failed to serialize schema as YAML: {err}")),
    }
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut failures = 0usize;

    for path in &args.inputs {
        let mut assembler = SchemaAssembler::new();
        if let Err(err) = load_form(path, &mut assembler) {
            eprintln!("{err}");
            failures += 1;
            continue;
        }

        match assembler.validate() {
            Ok(()) if assembler.selected_type().is_none() => {
                eprintln!("{}: no schema type selected", path.display());
                failures += 1;
            }
            Ok(()) => println!("{}: ok", path.display()),
            Err(err) => {
                eprintln!("{}: {WARNING_HEADER}: {err}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!(
            "{failures} of {} form file(s) failed validation",
            args.inputs.len()
        ));
    }

    println!("Validated {} form file(s).", args.inputs.len());
    Ok(())
}

fn run_types() -> Result<(), String> {
    for ty in SchemaType::ALL {
        let kind = if ty.is_terminal() { "terminal" } else { "options" };
        println!("{:<10} {:<10} {kind}", ty.as_str(), ty.label());
    }
    Ok(())
}
