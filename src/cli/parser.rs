use clap::{Parser, Subcommand};

/// Command-line interface definition for stockform
#[derive(Parser)]
#[command(
    name = "stockform",
    version = env!("CARGO_PKG_VERSION"),
    about = "A minimal inventory entry form: submit items over HTTP and list them, using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Run the web form server (requires APP_SECRET_KEY)
    Serve {
        /// Address to bind (overrides the configured host)
        #[arg(long = "host")]
        host: Option<String>,

        /// Port to listen on (overrides the configured port)
        #[arg(long = "port", short = 'p')]
        port: Option<u16>,
    },

    /// Print every stored item
    List {
        #[arg(long = "json", help = "Print items as a JSON array")]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}
