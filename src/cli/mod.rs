use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod list;
pub mod serve;

use list::ResourceKind;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Print the rows of one spreadsheet as JSON
    List {
        #[arg(long, value_enum)]
        resource: ResourceKind,
        /// Only print rows matching this search
        #[arg(long)]
        query: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::List { resource, query }) => {
            list::run(resource, query).await?;
        }
        None => {}
    }

    Ok(())
}
