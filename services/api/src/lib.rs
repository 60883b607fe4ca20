mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use voyage_rating::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
