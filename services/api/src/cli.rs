use crate::commands::{run_batch, run_birds, run_rate, BatchArgs, BirdArgs, RateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use voyage_rating::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Voyage Rating",
    about = "Rate planned voyages from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rate a single voyage against a captain history
    Rate(RateArgs),
    /// Rate every voyage in a CSV batch against one captain history
    Batch(BatchArgs),
    /// Report plumage and air speed for a JSON list of birds
    Birds(BirdArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Rate(args) => run_rate(args),
        Command::Batch(args) => run_batch(args),
        Command::Birds(args) => run_birds(args),
    }
}
