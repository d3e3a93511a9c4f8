use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use gridpath_cli::failure::{exit_status, solve_context};
use gridpath_cli::input::InputSource;
use gridpath_cli::logging::{init_logging, LogFormat, LoggingConfig};
use gridpath_cli::output::{render, OutputFormat};
use gridpath_cli::terminal::ColorPalette;
use gridpath_lib::{solve, PathSummary};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cheapest path across a weighted grid")]
struct Cli {
    /// Problem description file; defaults to $GRIDPATH_INPUT, then stdin.
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Basic)]
    format: OutputFormat,

    /// Log output format; overrides $LOG_FORMAT.
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Disable ANSI colors in the map output (always off when stdout is not a terminal).
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&LoggingConfig::from_env().with_format(cli.log_format));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:?}");
            ExitCode::from(exit_status(&error))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = InputSource::resolve(cli.input.as_deref());
    tracing::debug!(?source, format = ?cli.format, "loading problem");
    let problem = source.load()?;

    let plan = solve(&problem).map_err(|error| {
        let context = solve_context(&error, &problem);
        anyhow::Error::new(error).context(context)
    })?;
    let summary = PathSummary::from_plan(&problem.grid, &plan);

    let palette = if cli.no_color || !io::stdout().is_terminal() {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };
    let rendered = render(cli.format, &problem.grid, &summary, &palette)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write path to stdout")?;
    stdout.flush()?;
    Ok(())
}
