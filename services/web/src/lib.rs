mod cli;
mod export;
mod infra;
mod routes;
mod server;

use lifeconnect::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
