// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monitoring plugin front end.
//!
//! Loads a device snapshot fetched by the poller, evaluates one check, prints
//! the report and exits with its severity code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use devcheck::check::{
    registry, CheckKind, CheckRun, Config, OutputFormat, PowerGenType, Severity, Thresholds,
};
use devcheck::device::DeviceSnapshot;

#[derive(Parser)]
#[command(name = "devcheck")]
#[command(about = "Multipurpose device check plugin for Nagios compatible schedulers")]
#[command(version)]
struct Cli {
    /// Print debug info to stderr
    #[arg(short = 'd', long)]
    debug: bool,

    /// JSON snapshot of the device readings
    #[arg(short = 's', long)]
    snapshot: Option<PathBuf>,

    /// Emit the report as a JSON document instead of plugin text
    #[arg(long)]
    json: bool,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Timezone for JSON report timestamps
    #[arg(long, value_parser = parse_timezone)]
    timezone: Option<chrono_tz::Tz>,

    /// List the available checks and exit
    #[arg(long)]
    list: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Power generator state checks
    PowerGen(PowerGenArgs),

    /// Frequency and phase synchronization state
    SyncState {
        /// Describe the check and exit
        #[arg(long)]
        info: bool,
    },
}

#[derive(Args)]
struct PowerGenArgs {
    /// Check type: common, electrical or engine
    #[arg(short = 't', long = "type")]
    check_type: Option<String>,

    /// Warning level for mains and gen. voltage (V)
    #[arg(long, default_value = "215:245")]
    wv: String,
    /// Critical level for mains and gen. voltage (V)
    #[arg(long, default_value = "210:250")]
    cv: String,
    /// Warning level for gen. current (A)
    #[arg(long, default_value = "24")]
    wc: String,
    /// Critical level for gen. current (A)
    #[arg(long, default_value = "27")]
    cc: String,
    /// Warning level for gen. power (kW)
    #[arg(long, default_value = "13")]
    wp: String,
    /// Critical level for gen. power (kW)
    #[arg(long, default_value = "15")]
    cp: String,
    /// Warning level for gen. frequency (Hz)
    #[arg(long, default_value = "48:52")]
    wf: String,
    /// Critical level for gen. frequency (Hz)
    #[arg(long, default_value = "46:54")]
    cf: String,
    /// Warning level for battery voltage (V*10)
    #[arg(long, default_value = "130:145")]
    wb: String,
    /// Critical level for battery voltage (V*10)
    #[arg(long, default_value = "120:155")]
    cb: String,
    /// Warning level for fuel level (%)
    #[arg(long, default_value = "20:100")]
    wl: String,
    /// Critical level for fuel level (%)
    #[arg(long, default_value = "10:100")]
    cl: String,
    /// Warning level for coolant temperature (C)
    #[arg(long, default_value = "98")]
    wt: String,
    /// Critical level for coolant temperature (C)
    #[arg(long, default_value = "104")]
    ct: String,

    /// Describe the check and exit
    #[arg(long)]
    info: bool,
}

impl PowerGenArgs {
    fn thresholds(&self) -> Thresholds {
        Thresholds::builder()
            .voltage(&self.wv, &self.cv)
            .current(&self.wc, &self.cc)
            .power(&self.wp, &self.cp)
            .frequency(&self.wf, &self.cf)
            .battery(&self.wb, &self.cb)
            .fuel(&self.wl, &self.cl)
            .coolant(&self.wt, &self.ct)
            .build()
    }
}

fn parse_timezone(s: &str) -> Result<chrono_tz::Tz, String> {
    s.parse::<chrono_tz::Tz>().map_err(|e| e.to_string())
}

fn init_tracing(debug: bool) {
    let default = if debug { "devcheck=debug" } else { "devcheck=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout belongs to the plugin output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

const UNKNOWN: u8 = Severity::Unknown as u8;

/// What a command line asks for, before anything is evaluated.
#[derive(Debug, PartialEq)]
enum Action {
    /// Print informational text and exit UNKNOWN.
    Print(String),
    Check(CheckKind),
}

fn plan(cli: &Cli) -> Result<Action, String> {
    if cli.list {
        return Ok(Action::Print(registry::usage()));
    }

    match &cli.command {
        Some(Commands::PowerGen(args)) if args.info => {
            Ok(Action::Print(registry::describe("power_gen")))
        }
        Some(Commands::PowerGen(args)) => {
            let Some(check_type) = args.check_type.as_deref() else {
                return Err("power_gen requires a check type (-t common|electrical|engine)".to_owned());
            };
            let kind = check_type
                .parse::<PowerGenType>()
                .map_err(|e| e.to_string())?;
            Ok(Action::Check(CheckKind::PowerGen {
                kind,
                thresholds: args.thresholds(),
            }))
        }
        Some(Commands::SyncState { info: true }) => {
            Ok(Action::Print(registry::describe("sync_state")))
        }
        Some(Commands::SyncState { info: false }) => Ok(Action::Check(CheckKind::SyncState)),
        None => Err("check name missing".to_owned()),
    }
}

async fn build_config(cli: &Cli) -> Result<Config, devcheck::check::WriterError> {
    let mut builder = Config::builder();
    if cli.json {
        builder = builder.format(OutputFormat::Json);
    }
    if let Some(tz) = cli.timezone {
        builder = builder.timezone(tz);
    }
    if let Some(path) = &cli.output {
        builder = builder.with_file_output(path).await?;
    }
    Ok(builder.build())
}

/// Evaluates one check and returns the process exit code.
async fn run_check(check: CheckKind, snapshot: Option<&PathBuf>, config: Config) -> u8 {
    let run = CheckRun::builder(check).config(config).build();

    let result = match snapshot {
        Some(path) => match DeviceSnapshot::load(path).await {
            Ok(snapshot) => {
                tracing::debug!(capabilities = ?snapshot.capabilities(), "snapshot loaded");
                run.run(&snapshot).await
            }
            Err(e) => run.fail(&e).await,
        },
        None => run.fail(&"a device snapshot is required (--snapshot)").await,
    };

    match result {
        Ok(report) => report.severity() as u8,
        Err(e) => {
            tracing::error!(error = %e, "cannot write report");
            UNKNOWN
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // usage errors must not surface as clap's exit code 2, which reads as CRITICAL
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(UNKNOWN)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(cli.debug);

    let check = match plan(&cli) {
        Ok(Action::Print(text)) => {
            println!("{text}");
            return ExitCode::from(UNKNOWN);
        }
        Ok(Action::Check(check)) => check,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(UNKNOWN);
        }
    };

    let config = match build_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "cannot open report output");
            return ExitCode::from(UNKNOWN);
        }
    };

    ExitCode::from(run_check(check, cli.snapshot.as_ref(), config).await)
}
