//! Database connections that batches are executed against.

use std::str::FromStr;

use clap::ValueEnum;
use sqlx::pool::PoolOptions;
use sqlx::postgres::{PgConnectOptions, PgPool};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tracing::{debug, info};

use crate::error::Result;
use crate::executor::BatchExecutor;
use crate::options::ConnectionOptions;

/// Supported database backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// SQLite; the server option names the database file.
    #[default]
    Sqlite,
    /// PostgreSQL; server is `host` or `host,port`.
    Postgres,
}

impl Backend {
    /// Returns the backend name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres",
        }
    }
}

/// An open connection pool.
///
/// Pools hold a single connection that is never recycled, so session state
/// (temporary tables, `SET` options, the in-memory SQLite database) carries
/// from one batch to the next.
#[derive(Debug, Clone)]
pub enum Database {
    /// SQLite pool.
    Sqlite(SqlitePool),
    /// PostgreSQL pool.
    Postgres(PgPool),
}

impl Database {
    /// Connects using the given backend and options.
    pub async fn connect(backend: Backend, options: &ConnectionOptions) -> Result<Self> {
        let server = options.require_server()?;
        info!(
            backend = backend.name(),
            connection = %options.redacted_connection_string()?,
            "Connecting"
        );

        let database = match backend {
            Backend::Sqlite => Self::Sqlite(
                session_pool_options::<sqlx::Sqlite>()
                    .connect_with(sqlite_options(server)?)
                    .await?,
            ),
            Backend::Postgres => Self::Postgres(
                session_pool_options::<sqlx::Postgres>()
                    .connect_with(postgres_options(server, options))
                    .await?,
            ),
        };

        debug!(backend = backend.name(), "Connected");
        Ok(database)
    }

    /// Returns the backend this pool talks to.
    #[must_use]
    pub const fn backend(&self) -> Backend {
        match self {
            Self::Sqlite(_) => Backend::Sqlite,
            Self::Postgres(_) => Backend::Postgres,
        }
    }

    /// Closes the pool, waiting for the connection to shut down.
    pub async fn close(&self) {
        match self {
            Self::Sqlite(pool) => pool.close().await,
            Self::Postgres(pool) => pool.close().await,
        }
    }
}

impl BatchExecutor for Database {
    async fn execute(&self, sql: &str) -> Result<u64> {
        let rows = match self {
            Self::Sqlite(pool) => sqlx::raw_sql(sql).execute(pool).await?.rows_affected(),
            Self::Postgres(pool) => sqlx::raw_sql(sql).execute(pool).await?.rows_affected(),
        };
        Ok(rows)
    }
}

/// Pool settings for one long-lived session: a single connection with no
/// idle timeout and no maximum lifetime.
fn session_pool_options<DB: sqlx::Database>() -> PoolOptions<DB> {
    PoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
}

fn sqlite_options(server: &str) -> Result<SqliteConnectOptions> {
    if server == ":memory:" || server.starts_with("sqlite:") {
        let url = if server == ":memory:" {
            "sqlite::memory:"
        } else {
            server
        };
        return Ok(SqliteConnectOptions::from_str(url)?);
    }
    Ok(SqliteConnectOptions::new()
        .filename(server)
        .create_if_missing(true))
}

fn postgres_options(server: &str, options: &ConnectionOptions) -> PgConnectOptions {
    let mut connect = PgConnectOptions::new();

    // SQL Server style "host,port".
    connect = match server.split_once(',') {
        Some((host, port)) => match port.trim().parse::<u16>() {
            Ok(port) => connect.host(host.trim()).port(port),
            Err(_) => connect.host(server),
        },
        None => connect.host(server),
    };

    if let Some(database) = options.database_name() {
        connect = connect.database(database);
    }

    if !options.integrated_security {
        if let Some(username) = &options.username {
            connect = connect.username(username);
        }
        if let Some(password) = &options.password {
            connect = connect.password(password);
        }
    }

    connect
}
