//! db-stats Binary
//!
//! Lists the largest relations of the configured PostgreSQL database.
//! With no subcommand the report goes to stdout; `serve` answers every
//! HTTP request with it, on BIND_ADDR (e.g. 0.0.0.0:8888).

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use dbs_core::BIND_ADDR_DEFAULT;
use dbs_core::SERVER_WORKERS;
use dbs_pg::Postgres;
use dbs_stats::Reporter;
use dbs_stats::Stats;
use dbs_stats::System;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "db-stats", version, about = "Largest relations of a PostgreSQL database")]
struct Args {
    /// Config file to read instead of ./db-stats.conf or /etc/db-stats.conf
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Answer every HTTP request with the report
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = BIND_ADDR_DEFAULT)]
        bind: String,
        #[arg(long, default_value_t = SERVER_WORKERS)]
        workers: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dbs_core::log(match args.command {
        Some(Command::Serve { .. }) => log::LevelFilter::Info,
        None => log::LevelFilter::Warn,
    });
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("db-stats: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => dbs_config::load_path(path),
        None => dbs_config::load_config(),
    }
    .context("loading config")?;
    let reporter = Reporter::new(Arc::new(config), Postgres, System);
    match args.command {
        None => {
            let report = reporter
                .get_stats()
                .await
                .context("collecting relation sizes")?;
            print!("{}", report);
            Ok(())
        }
        Some(Command::Serve { bind, workers }) => {
            log::info!("reporting on database {}", reporter.config().database);
            dbs_server::run(reporter, &bind, workers)
                .await
                .with_context(|| format!("serving on {}", bind))
        }
    }
}
