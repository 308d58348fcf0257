use clap::{Arg, ArgMatches, Command};
use console::Style;
use go2c_core::{Source, generate_error_report, transpile_source};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Command::new("go2c")
        .version("0.1.0")
        .about("Transpiles a Go-subset source file into C");

    let cli = setup_cli(cli);
    let matches = cli.get_matches();
    dispatch(&matches)
}

/// Sets up the CLI arguments: an input path and an output path, both
/// required. A wrong argument count makes `clap` print its usage
/// message and exit before `dispatch` runs.
fn setup_cli(cli: Command) -> Command {
    cli.arg(
        Arg::new("input")
            .help("The source file to transpile")
            .required(true)
            .index(1),
    )
    .arg(
        Arg::new("output")
            .help("The file to write the generated C to")
            .required(true)
            .index(2),
    )
}

fn dispatch(matches: &ArgMatches) -> ExitCode {
    let input = matches.get_one::<String>("input").expect("required argument");
    let output = matches.get_one::<String>("output").expect("required argument");

    let source = match Source::new(PathBuf::from(input)) {
        Ok(source) => source,
        Err(e) => {
            eprintln!(
                "{} could not open file '{}'",
                Style::new().red().bold().apply_to("Error:"),
                input
            );
            eprintln!("Reason: {}", e.message());
            return ExitCode::FAILURE;
        }
    };

    let (code, reports) = match transpile_source(&source) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", generate_error_report(e.as_ref()));
            return ExitCode::FAILURE;
        }
    };

    // Non-fatal diagnostics never block the write; they are surfaced
    // alongside the generated output.
    for report in &reports.reports {
        report.pretty_with_source(&source.content);
    }

    if let Err(e) = std::fs::write(output, &code) {
        eprintln!(
            "{} could not write generated code to '{}'",
            Style::new().red().bold().apply_to("Error:"),
            output
        );
        eprintln!("Reason: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
