use clap::Parser;
use poly_calc::Calculator;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Stack-based calculator for sparse multivariate polynomials.
#[derive(Parser, Debug)]
#[command(name = "poly-calc")]
#[command(version)]
#[command(about = "Stack-based calculator for sparse multivariate polynomials")]
struct Args {
    /// Input file. If not provided, reads from stdin, interactively if stdin is a terminal.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Log to stderr; repeat to log more (`-v` info, `-vv` debug, `-vvv` trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not print a detailed report for malformed polynomials in interactive mode
    #[arg(long)]
    no_report: bool,
}

/// Installs a subscriber that logs to stderr, if logging was requested.
fn init_logging(verbose: u8) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let level = match verbose {
        0 => return Ok(()),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}

/// Reads and processes a single line in interactive mode.
fn repl_line(rl: &mut DefaultEditor, calc: &mut Calculator, number: usize, report: bool) -> Result<(), ReadlineError> {
    let input = rl.readline("> ")?;
    if !input.trim().is_empty() {
        rl.add_history_entry(&input)?;
    }

    match calc.process_line(&input) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => (),
        Err(err) => {
            eprintln!("ERROR {} {}", number, err.reason);
            if let Some(source) = err.source.as_ref().filter(|_| report) {
                source.report_to_stderr("input", &input)?;
            }
        },
    }

    Ok(())
}

/// Runs the calculator interactively.
fn repl(report: bool) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    let mut calc = Calculator::new();

    for number in 1.. {
        if let Err(err) = repl_line(&mut rl, &mut calc, number, report) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => Ok(()),
                err => Err(err),
            };
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(args.verbose) {
        eprintln!("failed to set tracing subscriber: {}", err);
        return ExitCode::FAILURE;
    }

    let result = if let Some(path) = &args.file {
        info!(path = %path.display(), "reading input file");
        File::open(path).and_then(|file| {
            Calculator::new().run(BufReader::new(file), io::stdout().lock(), io::stderr().lock())
        })
    } else if !io::stdin().is_terminal() {
        info!("reading input from stdin");
        Calculator::new().run(io::stdin().lock(), io::stdout().lock(), io::stderr().lock())
    } else {
        repl(!args.no_report).map_err(|err| match err {
            ReadlineError::Io(err) => err,
            err => io::Error::new(io::ErrorKind::Other, err.to_string()),
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("poly-calc: {}", err);
            ExitCode::FAILURE
        },
    }
}
