use dbconn::cli::{Cli, Commands};
use dbconn::commands::connect::{self, ConnectOverrides};
use dbconn::commands::init;
use std::process;
use tracing_subscriber::EnvFilter;

// Allow println in main CLI binary
#[allow(clippy::disallowed_methods)]
fn main() {
    init_logging();

    let cli = Cli::parse();
    tracing::debug!("dbconn CLI initialized");

    match cli.command {
        Some(Commands::Connect {
            config,
            host,
            port,
            user,
            password_env,
            database,
        }) => {
            let overrides = ConnectOverrides {
                config,
                host,
                port,
                user,
                password_env,
                database,
            };

            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("Error: failed to start runtime: {e}");
                    process::exit(1);
                }
            };

            if let Err(e) = rt.block_on(connect::handle_connect(&overrides)) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        Some(Commands::Init { output, force }) => {
            if let Err(e) = init::handle_init(&output, force) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        None => {
            println!("dbconn - Use --help for available commands");
        }
    }
}

/// Initialize logging based on environment variables
fn init_logging() {
    // Default to INFO level, can be overridden by RUST_LOG environment variable
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dbconn=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}
