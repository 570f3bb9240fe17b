use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command line from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const FORMATS: &[&str] = &["docx", "json", "outline"];
const POSTPROCESSORS: &[&str] = &["none", "md2docx", "html2docx"];
const VIEWS: &[&str] = &["outline", "json"];

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
        .help("Directory image sources are resolved against")
        .value_hint(ValueHint::DirPath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("template-processor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns instantiated template markup into structured documents")
        .arg_required_else_help(true)
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
                .help("Path to a template-processor.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert markup to a document format")
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(base_dir_arg()),
        )
        .subcommand(
            Command::new("process")
                .about("Run a postprocessor over instantiated markup")
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output path without extension")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("postprocessor")
                        .long("postprocessor")
                        .short('p')
                        .help("Postprocessor to run")
                        .value_parser(clap::builder::PossibleValuesParser::new(POSTPROCESSORS)),
                )
                .arg(base_dir_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the converted document model")
                .arg(input_arg())
                .arg(
                    Arg::new("view")
                        .help("View to print")
                        .index(2)
                        .value_parser(clap::builder::PossibleValuesParser::new(VIEWS)),
                )
                .arg(base_dir_arg()),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "template-processor", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "template-processor", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "template-processor", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
