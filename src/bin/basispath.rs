use anyhow::{Context, Result};
use basispath::classify::paths::BasisPath;
use basispath::cli::{Cli, ClassifyArgs, Command, RunArgs};
use basispath::logging::{init_tracing, init_tracing_json};
use basispath::runner::report::render_console;
use basispath::{classify_batch, harness, io};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.json_log {
        init_tracing_json();
    } else {
        init_tracing();
    }

    match dispatch(cli.command) {
        Ok(code) => code,
        Err(err) => {
            let err = basispath::log_error!(err, "basispath failed");
            eprintln!("basispath failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command) -> Result<ExitCode> {
    match command {
        Command::Run(args) => run(&args),
        Command::Classify(args) => classify(&args),
        Command::Paths => {
            paths();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run(args: &RunArgs) -> Result<ExitCode> {
    let config = args.resolve_config().context("loading configuration")?;
    let run = harness::run(&config).context("running basis path harness")?;

    print!("{}", render_console(&run.summary));

    if config.options.strict && !run.summary.all_passed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn classify(args: &ClassifyArgs) -> Result<ExitCode> {
    let vectors = io::read_vectors(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    for result in classify_batch(&vectors) {
        println!("{}: {}", result.case_id, result.label);
    }
    Ok(ExitCode::SUCCESS)
}

fn paths() {
    for path in BasisPath::ALL {
        let (a, b, c) = path.sides();
        println!(
            "{path}  {:<28} ({a}, {b}, {c})  {}",
            path.label().as_str(),
            path.description()
        );
    }
}
