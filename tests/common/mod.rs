/// Shared test utilities for dbconn integration tests
use dbconn::ConnectionParams;
use std::env;

/// Connection parameters for a live MySQL server, if one is configured
///
/// Live tests run only when `DBCONN_TEST_HOST` is set. The remaining
/// `DBCONN_TEST_*` variables fall back to the library defaults.
pub fn live_params() -> Option<ConnectionParams> {
    let host = env::var("DBCONN_TEST_HOST").ok()?;
    let defaults = ConnectionParams::default();

    Some(ConnectionParams {
        host,
        port: env::var("DBCONN_TEST_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(defaults.port),
        user: env::var("DBCONN_TEST_USER").unwrap_or(defaults.user),
        password: env::var("DBCONN_TEST_PASSWORD").unwrap_or(defaults.password),
        database: env::var("DBCONN_TEST_DATABASE").ok(),
    })
}

/// Parameters for an address where nothing is listening
#[allow(dead_code)]
pub fn unreachable_params() -> ConnectionParams {
    ConnectionParams::new("127.0.0.1", "root", "", None).with_port(1)
}
