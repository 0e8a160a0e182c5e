use crate::export::{run_export, run_render, ExportArgs, RenderArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lifeconnect::config::DataMode;
use lifeconnect::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "LifeConnect",
    about = "Serve or export the LifeConnect organ donation awareness site",
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
    /// Print one page's HTML to stdout
    Render(RenderArgs),
    /// Write every page as static HTML into a directory
    Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override where list data and submissions go (mock or live)
    #[arg(long, value_parser = crate::infra::parse_data_mode)]
    pub(crate) data_mode: Option<DataMode>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Render(args) => run_render(args).await,
        Command::Export(args) => run_export(args).await,
    }
}
