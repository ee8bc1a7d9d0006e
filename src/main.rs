use clap::Parser;
use clap_derive::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use runstat::benchmark::Benchmarker;
use runstat::config::{Config, Layout};
use runstat::error::Result;
use runstat::stats::OutlierRule;
use runstat::writer::{PlotDataWriter, TableWriter};

/// Arguments
/// `method` - Measurement method selector, currently unused
/// `--runs, -n` - Number of times to run the measurement program
/// `--threshold, -t` - Outlier threshold in standard deviations
/// `--command, -c` - Shell command line of the measurement program
/// `--output, -o` - Where to write the plot data
/// `--temp-file` - Scratch file the program's stdout is redirected into
/// `--rule` - Outlier rule, `leave-one-out` or `z-score`
/// `--layout` - `sample-rows` (one line per sample) or `metric-rows`
/// `--with-independent` - Write the independent variable as the first column
#[derive(Parser)]
#[clap(name = "runstat", about = "Repeat a measurement program and average its output")]
struct Args {
    method: Option<i64>,
    #[arg(short = 'n', long)]
    runs: Option<usize>,
    #[arg(short, long)]
    threshold: Option<f64>,
    #[arg(short, long)]
    command: Option<String>,
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(long)]
    temp_file: Option<PathBuf>,
    #[arg(long, value_enum)]
    rule: Option<OutlierRule>,
    #[arg(long, value_enum)]
    layout: Option<Layout>,
    #[arg(long)]
    with_independent: bool,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::default();
        if let Some(runs) = self.runs {
            config.runs = runs;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(command) = self.command {
            config.command = command;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(temp_file) = self.temp_file {
            config.temp_file = temp_file;
        }
        if let Some(rule) = self.rule {
            config.rule = rule;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        config.with_independent = self.with_independent;
        config
    }
}

fn run(config: &Config) -> Result<()> {
    config.validate()?;

    info!("Running {} measurements of `{}`", config.runs, config.command);
    let mut benchmarker = Benchmarker::from_config(config);
    let measurement = benchmarker.measure()?;

    let writer = match config.with_independent {
        true => PlotDataWriter::with_independent(measurement.independent),
        false => PlotDataWriter::new(),
    };
    writer.write_table(&measurement.aggregated, &config.output_path)?;

    info!("Wrote {}", config.output_path.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("runstat=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Some(method) = args.method {
        debug!(method, "method selector given, ignoring");
    }

    let config = args.into_config();
    debug!(?config, "Effective config");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(1)
        }
    }
}
