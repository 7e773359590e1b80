// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "github-users-api")]
#[command(about = "HTTP facade over the GitHub users API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// List users from a running server
    Users {
        /// Show users with an id greater than this
        #[arg(long, default_value_t = 0)]
        since: u64,
    },

    /// Show a user's profile from a running server
    Details {
        /// GitHub login
        username: String,
    },

    /// List a user's repositories from a running server
    Repos {
        /// GitHub login
        username: String,
    },
}
