use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{query::QueryArgs, solve::SolveArgs};

mod query;
mod solve;
mod terminal;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the route server for routes and print them
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
    /// Compute routes locally with the ant colony
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Query { args } => query::run(args).await?,
        Commands::Solve { args } => solve::run(args)?,
    }

    Ok(())
}
