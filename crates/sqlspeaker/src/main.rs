//! sqlspeaker CLI
//!
//! Command-line tool for running GO-delimited SQL scripts.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use sqlspeaker::prelude::*;

/// Run GO-delimited SQL scripts batch by batch.
#[derive(Parser)]
#[command(name = "sqlspeaker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file with saved connection options.
    #[arg(short, long, env = "SQLSPEAKER_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Database backend.
    #[arg(short, long, value_enum, default_value_t = Backend::Sqlite)]
    backend: Backend,

    #[command(flatten)]
    connection: ConnectionArgs,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Connection flags; each one overrides the config file.
#[derive(Args)]
struct ConnectionArgs {
    /// Server and instance name (SQLite: database file or `:memory:`).
    #[arg(short, long, env = "SQLSPEAKER_SERVER")]
    server: Option<String>,

    /// Database to use on connect.
    #[arg(short, long, env = "SQLSPEAKER_DATABASE")]
    database: Option<String>,

    /// Login name.
    #[arg(short, long, env = "SQLSPEAKER_USERNAME")]
    username: Option<String>,

    /// Login password.
    #[arg(short, long, env = "SQLSPEAKER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Use integrated security instead of a login.
    #[arg(short, long)]
    integrated_security: bool,
}

impl From<ConnectionArgs> for ConnectionOptions {
    fn from(args: ConnectionArgs) -> Self {
        Self {
            server: args.server,
            database: args.database,
            username: args.username,
            password: args.password,
            integrated_security: args.integrated_security,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a script against the database.
    Run {
        /// Script file (stdin if omitted or `-`).
        script: Option<PathBuf>,

        /// Print batches without executing them.
        #[arg(long)]
        dry_run: bool,

        /// Keep going after a batch fails.
        #[arg(long)]
        continue_on_error: bool,
    },

    /// Print the batches a script splits into, without connecting.
    Split {
        /// Script file (stdin if omitted or `-`).
        script: Option<PathBuf>,
    },

    /// Show the effective connection options.
    Config {
        /// Write them to the config file.
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Config file first, then command line flags on top
    let saved = ConfigFile::load(&cli.config)?
        .map(|config| config.options())
        .unwrap_or_default();
    let options = saved.merge(cli.connection.into());

    match cli.command {
        Commands::Run {
            script,
            dry_run,
            continue_on_error,
        } => {
            let text = read_script(script.as_deref())?;

            if dry_run {
                info!("Dry run mode - batches will be printed but not executed.");
            }

            let database = Database::connect(cli.backend, &options).await?;
            let runner = ScriptRunner::new(database)
                .dry_run(dry_run)
                .continue_on_error(continue_on_error);

            let result = runner.run(&text).await;
            runner.executor().close().await;
            let report = result?;

            println!(
                "{} batch(es) executed, {} skipped, {} failed, {} row(s) affected ({} ms)",
                report.executed,
                report.skipped,
                report.failures.len(),
                report.rows_affected,
                report.elapsed().num_milliseconds()
            );
            report.check()?;
        }

        Commands::Split { script } => {
            let text = read_script(script.as_deref())?;
            let batches = split_batches(&text);
            info!(batches = batches.len(), "Split script");

            print!("{}", join_batches(&batches));
        }

        Commands::Config { save } => {
            info!(connection = ?options, "Effective connection");

            let config = ConfigFile::from_options(&options);
            if save {
                config.save(&cli.config)?;
            } else {
                println!("{}", config.to_json()?);
            }
        }
    }

    Ok(())
}

/// Reads a script from a file, or from stdin for `None` and `-`.
fn read_script(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
