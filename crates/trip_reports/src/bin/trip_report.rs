use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trip_reports::{clamp_k, run_report, OutputFormat, ReportParams};

/// Rank the busiest pickup zones and hourly slots in a trip CSV extract.
#[derive(Parser, Debug)]
#[command(name = "trip_report", version)]
struct Cli {
    /// Trip CSV (TripID,PickupZoneID,DropoffZoneID,PickupDateTime,DistanceKm,FareAmount)
    #[arg(env = "TRIP_REPORT_INPUT")]
    input: PathBuf,

    /// Number of zones to list; values below 1 list none
    #[arg(
        long,
        env = "TRIP_REPORT_TOP_ZONES",
        default_value_t = 10,
        allow_negative_numbers = true
    )]
    top_zones: i64,

    /// Number of (zone, hour) slots to list; values below 1 list none
    #[arg(
        long,
        env = "TRIP_REPORT_TOP_SLOTS",
        default_value_t = 10,
        allow_negative_numbers = true
    )]
    top_slots: i64,

    /// Output format
    #[arg(long, value_enum, env = "TRIP_REPORT_FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long, short, env = "TRIP_REPORT_OUTPUT")]
    output: Option<PathBuf>,

    /// Print per-phase timings to stderr
    #[arg(long, env = "TRIP_REPORT_TIMINGS")]
    timings: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "TRIP_REPORT_LOG", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn into_params(self) -> ReportParams {
        let mut params = ReportParams::new(self.input)
            .with_top_zones(clamp_k(self.top_zones))
            .with_top_slots(clamp_k(self.top_slots))
            .with_format(self.format)
            .with_timings(self.timings);
        if let Some(output) = self.output {
            params = params.with_output(output);
        }
        params
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let params = cli.into_params();
    info!(
        input = %params.input.display(),
        top_zones = params.top_zones_k,
        top_slots = params.top_slots_k,
        format = params.format.as_str(),
        "starting trip report"
    );

    match run_report(&params) {
        Ok(outcome) => {
            if params.show_timings {
                outcome.timings.print_summary();
            }
        }
        Err(err) => {
            error!(error = %err, "report failed");
            exit(1);
        }
    }
}
