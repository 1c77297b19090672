//! # Database Connection Module
//!
//! Opens a single MySQL session from host/user/password/database credentials.
//! There is no pooling and no retry: one call, one handshake, one connection
//! handed to the caller.
//!
//! [`get_connection`] never fails loudly. Any error from the driver is printed,
//! logged and turned into `None`. Callers that want the error itself can use
//! [`try_connect`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dbconn::get_connection;
//!
//! # async fn example() {
//! if let Some(conn) = get_connection("localhost", "root", "", Some("shop")).await {
//!     // ... use conn.as_inner_mut() with sqlx queries ...
//!     let _ = conn.close().await;
//! }
//! # }
//! ```

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection as _};
use std::fmt;
use thiserror::Error;
use tracing::{debug, error, info};

/// Default server host
pub const DEFAULT_HOST: &str = "localhost";
/// Default server port
pub const DEFAULT_PORT: u16 = 3306;
/// Default user
pub const DEFAULT_USER: &str = "root";

/// Status line printed when a connection is obtained
pub const SUCCESS_STATUS: &str = "Database connection successful";

/// Connection-related errors
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The driver could not complete the handshake
    #[error("Connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    /// The handshake completed but the session did not answer a ping
    #[error("Connection is not active: {0}")]
    Inactive(#[source] sqlx::Error),

    /// Graceful shutdown of the session failed
    #[error("Failed to close connection: {0}")]
    Close(#[source] sqlx::Error),
}

impl ConnectionError {
    /// The underlying driver error
    #[must_use]
    pub const fn driver_error(&self) -> &sqlx::Error {
        match self {
            Self::Connect(e) | Self::Inactive(e) | Self::Close(e) => e,
        }
    }

    /// Status line printed when no connection could be obtained
    #[must_use]
    pub fn failure_status(&self) -> String {
        format!("Error while connecting to MySQL: {}", self.driver_error())
    }
}

/// Turn the result of the post-handshake ping into the factory's error
fn check_active(ping: Result<(), sqlx::Error>) -> Result<(), ConnectionError> {
    ping.map_err(ConnectionError::Inactive)
}

/// Parameters for opening a connection
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    /// Server host name or address
    pub host: String,
    /// Server port
    pub port: u16,
    /// User to authenticate as
    pub user: String,
    /// Password for `user`, empty for none
    pub password: String,
    /// Database to select, `None` for a server-level session
    pub database: Option<String>,
}

impl Default for ConnectionParams {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: String::new(),
            database: None,
        }
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &password)
            .field("database", &self.database)
            .finish()
    }
}

impl ConnectionParams {
    /// Create parameters for the given credentials on the default port
    #[must_use]
    pub fn new(host: &str, user: &str, password: &str, database: Option<&str>) -> Self {
        Self {
            host: host.to_string(),
            user: user.to_string(),
            password: password.to_string(),
            database: database.map(str::to_string),
            ..Self::default()
        }
    }

    /// Set the server port
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Map these parameters onto the driver's connect options
    #[must_use]
    pub fn to_connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password);

        match &self.database {
            Some(database) => options.database(database),
            None => options,
        }
    }

    /// `host:port` for messages
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// An open MySQL session owned by the caller
///
/// Call [`Connection::close`] when done. Dropping the value releases the
/// socket without the graceful quit handshake.
#[derive(Debug)]
pub struct Connection {
    inner: MySqlConnection,
    host: String,
    port: u16,
    database: Option<String>,
}

impl Connection {
    /// Host this connection was opened against
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port this connection was opened against
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Database selected at connect time, if any
    #[must_use]
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Round trip to the server to check the session is alive
    pub async fn ping(&mut self) -> Result<(), ConnectionError> {
        self.inner.ping().await.map_err(ConnectionError::Inactive)
    }

    /// Whether the session still answers a ping
    pub async fn is_connected(&mut self) -> bool {
        self.ping().await.is_ok()
    }

    /// Borrow the driver connection for running queries
    pub fn as_inner_mut(&mut self) -> &mut MySqlConnection {
        &mut self.inner
    }

    /// Take the driver connection out of the wrapper
    #[must_use]
    pub fn into_inner(self) -> MySqlConnection {
        self.inner
    }

    /// Close the session gracefully
    pub async fn close(self) -> Result<(), ConnectionError> {
        debug!("Closing connection to {}:{}", self.host, self.port);
        self.inner.close().await.map_err(ConnectionError::Close)
    }
}

/// Open a connection and confirm the session is active
///
/// # Errors
///
/// Returns [`ConnectionError::Connect`] when the driver rejects the handshake
/// (bad credentials, unreachable host, unknown database) and
/// [`ConnectionError::Inactive`] when the new session does not answer a ping.
pub async fn try_connect(params: &ConnectionParams) -> Result<Connection, ConnectionError> {
    debug!("Opening connection: {:?}", params);

    let mut inner = params
        .to_connect_options()
        .connect()
        .await
        .map_err(ConnectionError::Connect)?;

    if let Err(e) = check_active(inner.ping().await) {
        // Close errors are dropped; the ping error is the one reported.
        let _ = inner.close().await;
        return Err(e);
    }

    Ok(Connection {
        inner,
        host: params.host.clone(),
        port: params.port,
        database: params.database.clone(),
    })
}

/// Open a connection with the given parameters, or `None` on any failure
///
/// Prints a status line to stdout either way.
#[allow(clippy::disallowed_methods)]
pub async fn get_connection_with(params: &ConnectionParams) -> Option<Connection> {
    match try_connect(params).await {
        Ok(conn) => {
            info!(
                "Connected to {} (database: {})",
                params.address(),
                params.database.as_deref().unwrap_or("<none>")
            );
            println!("{SUCCESS_STATUS}");
            Some(conn)
        }
        Err(e) => {
            error!("Failed to connect to {}: {}", params.address(), e);
            println!("{}", e.failure_status());
            None
        }
    }
}

/// Open a connection on the default port, or `None` on any failure
///
/// See [`ConnectionParams::default`] for the conventional values of each
/// argument.
pub async fn get_connection(
    host: &str,
    user: &str,
    password: &str,
    database: Option<&str>,
) -> Option<Connection> {
    get_connection_with(&ConnectionParams::new(host, user, password, database)).await
}
