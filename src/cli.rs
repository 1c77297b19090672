use clap::{Parser, Subcommand};

/// Main CLI interface for `dbconn`
#[derive(Parser)]
#[command(name = "dbconn")]
#[command(version = crate::VERSION)]
#[command(about = "dbconn - Open and check a MySQL connection")]
#[command(
    long_about = "Connect to a MySQL server with host/user/password/database credentials and report whether it worked"
)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Open a connection, report the result and close it
    Connect {
        /// Configuration file to start from
        #[arg(long, value_name = "FILE")]
        config: Option<String>,
        /// Server host
        #[arg(long, value_name = "HOST")]
        host: Option<String>,
        /// Server port
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,
        /// User to authenticate as
        #[arg(long, value_name = "USER")]
        user: Option<String>,
        /// Environment variable holding the password
        #[arg(long, value_name = "VAR")]
        password_env: Option<String>,
        /// Database to select
        #[arg(long, value_name = "NAME")]
        database: Option<String>,
    },
    /// Write a starter configuration file
    Init {
        /// Where to write the configuration
        #[arg(long, value_name = "FILE", default_value = crate::config::CONFIG_FILE_NAME)]
        output: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
