// Command-line interface for the template processor
//
// This binary turns instantiated template markup into documents.
//
// The markup is produced upstream by the templating step; this program picks it up from a file,
// converts it through the tp-babel library and writes the result. It is a thin shell: argument
// parsing, configuration, logging and file I/O live here, everything else in tp-babel.
//
// Usage:
//  template-processor <input> --to <format> [--output <file>]          - Convert markup (default)
//  template-processor convert <input> --to <format> [--output <file>]  - Same as above (explicit)
//  template-processor process <input> --output <base> [--postprocessor <name>]
//                                                  - Run a postprocessor, writing <base>.md/.docx
//  template-processor inspect <input> [outline|json]                   - Print the document model
//  template-processor --list-formats                                   - List available formats
//
// Image sources are resolved relative to the input file's directory unless --base-dir is given.
// Diagnostics go to stderr through env_logger: warnings by default, debug with --verbose,
// anything RUST_LOG asks for otherwise.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use std::path::{Path, PathBuf};
use tp_babel::{
    convert, publish, ConvertOptions, Format, FormatRegistry, Postprocessor, PublishSpec,
    SerializedDocument,
};
use tp_config::{Loader, TpConfig};

/// Configuration file picked up from the working directory when present.
const LOCAL_CONFIG: &str = "template-processor.toml";

const SUBCOMMANDS: &[&str] = &["convert", "process", "inspect", "help"];

fn build_cli() -> Command {
    Command::new("template-processor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns instantiated template markup into structured documents")
        .long_about(
            "template-processor converts the markdown produced by a document template into\n\
            structured documents such as DOCX.\n\n\
            Commands:\n  \
            - convert: Convert markup to a registered format (default command)\n  \
            - process: Run a postprocessor, writing <base>.md or <base>.docx\n  \
            - inspect: Print the converted document model\n\n\
            Examples:\n  \
            template-processor report.md --to docx -o report.docx\n  \
            template-processor report.md -o report.docx          # format from extension\n  \
            template-processor process report.md -o out/report   # writes out/report.docx\n  \
            template-processor inspect report.md json",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a template-processor.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log skipped content and other debug details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert markup to a document format (default command)")
                .long_about(
                    "Convert markup to one of the registered formats.\n\n\
                    Supported formats:\n  \
                    - docx:    Word document (.docx), requires -o\n  \
                    - json:    Document model as JSON (.json)\n  \
                    - outline: Tree outline of the document model\n\n\
                    Without --to, the format is detected from the extension of -o.\n\
                    Text output goes to stdout by default.",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (detected from --output when omitted)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(base_dir_arg()),
        )
        .subcommand(
            Command::new("process")
                .about("Run a postprocessor over instantiated markup")
                .long_about(
                    "Write instantiated markup to its final form next to a base file name.\n\n\
                    Postprocessors:\n  \
                    - none:    write the markup unchanged to <base>.md\n  \
                    - md2docx: convert the markup and write <base>.docx (default)",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output path without extension")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("postprocessor")
                        .long("postprocessor")
                        .short('p')
                        .help("Postprocessor to run (defaults to the configured one)")
                        .value_parser(["none", "md2docx", "html2docx"]),
                )
                .arg(base_dir_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the document model converted from markup")
                .arg(input_arg())
                .arg(
                    Arg::new("view")
                        .help("View to print. Defaults to the configured one ('outline')")
                        .required(false)
                        .index(2)
                        .value_parser(["outline", "json"]),
                )
                .arg(base_dir_arg()),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input markup file")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn base_dir_arg() -> Arg {
    Arg::new("base-dir")
        .long("base-dir")
        .value_name("DIR")
        .help("Directory image sources are resolved against (defaults to the input's directory)")
        .value_hint(ValueHint::DirPath)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A file as first argument means the default `convert` subcommand.
            if args.len() > 1 && !args[1].starts_with('-') && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let options = convert_options(&config, input, sub_matches);
            handle_convert_command(input, to, output, &options);
        }
        Some(("process", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let output = required_arg(sub_matches, "output");
            let postprocessor = match sub_matches.get_one::<String>("postprocessor") {
                Some(name) => name.parse::<Postprocessor>().unwrap_or_else(|e| fail(e)),
                None => config.publish.postprocessor,
            };
            let options = convert_options(&config, input, sub_matches);
            handle_process_command(input, output, postprocessor, options);
        }
        Some(("inspect", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or(config.inspect.format.as_str());
            let options = convert_options(&config, input, sub_matches);
            handle_inspect_command(input, view, &options);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    options: &ConvertOptions,
) {
    let registry = FormatRegistry::default();

    let to = match (to, output) {
        (Some(to), _) => to.to_string(),
        (None, Some(path)) => registry
            .detect_format_from_filename(path)
            .unwrap_or_else(|| {
                fail(format!(
                    "Could not detect format from filename '{path}'. Please specify --to explicitly"
                ))
            }),
        (None, None) => fail("Please specify --to or an --output file"),
    };

    // Fail on unknown formats before doing any work
    let format = registry.get(&to).unwrap_or_else(|e| fail(e));
    if format.is_binary() && output.is_none() {
        fail(format!(
            "Binary formats (like {to}) require an output file. Use -o <path>."
        ));
    }

    let source = read_input(input);
    let doc = convert(&source, options).unwrap_or_else(|e| fail(format!("Conversion error: {e}")));
    log::debug!("converted '{input}' into {} blocks", doc.blocks.len());

    let result = format
        .serialize(&doc)
        .unwrap_or_else(|e| fail(format!("Serialization error: {e}")));

    match (output, result) {
        (Some(path), data) => {
            fs::write(path, data.into_bytes())
                .unwrap_or_else(|e| fail(format!("Error writing file '{path}': {e}")));
        }
        (None, SerializedDocument::Text(text)) => print!("{text}"),
        (None, SerializedDocument::Binary(_)) => {
            fail("Binary formats require an output file. Use -o <path>.")
        }
    }
}

/// Handle the process command
fn handle_process_command(
    input: &str,
    output: &str,
    postprocessor: Postprocessor,
    options: ConvertOptions,
) {
    let markup = read_input(input);
    let spec = PublishSpec::new(&markup, output)
        .with_postprocessor(postprocessor)
        .with_options(options);
    let path = publish(spec).unwrap_or_else(|e| fail(e));
    log::info!("wrote {}", path.display());
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, view: &str, options: &ConvertOptions) {
    let source = read_input(input);
    let doc = convert(&source, options).unwrap_or_else(|e| fail(format!("Conversion error: {e}")));
    let output = FormatRegistry::default()
        .serialize_text(&doc, view)
        .unwrap_or_else(|e| fail(e));
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let extensions = format.file_extensions().join(", ");
            println!("  {name:<10} {} [{extensions}]", format.description());
        }
    }

    println!("\nPostprocessors (process --postprocessor):");
    for postprocessor in [Postprocessor::None, Postprocessor::Md2Docx] {
        println!(
            "  {:<10} writes <base>.{}",
            postprocessor.as_str(),
            postprocessor.extension()
        );
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_cli_config(explicit_path: Option<&str>) -> TpConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(format!("Failed to load configuration: {err}")))
}

/// Conversion options from the configuration plus the image base directory.
fn convert_options(config: &TpConfig, input: &str, matches: &ArgMatches) -> ConvertOptions {
    let options = ConvertOptions::from(&config.convert);
    match base_dir(input, matches.get_one::<String>("base-dir").map(|s| s.as_str())) {
        Some(dir) => options.with_base_dir(dir),
        None => options,
    }
}

/// Explicit `--base-dir`, else the directory holding the input file.
fn base_dir(input: &str, explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(PathBuf::from(dir));
    }
    Path::new(input)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| fail(format!("Error reading file '{path}': {e}")))
}

fn required_arg<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value.as_str(),
        None => fail(format!("Missing required argument '{name}'")),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
