use clap::{Args, ValueEnum};
use lifeconnect::config::{AppConfig, DataMode};
use lifeconnect::error::AppError;
use lifeconnect::outreach::{outreach_from_config, OutreachApi};
use lifeconnect::site::{self, Page};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PageArg {
    Home,
    Register,
    Education,
    Support,
    Events,
}

impl From<PageArg> for Page {
    fn from(value: PageArg) -> Self {
        match value {
            PageArg::Home => Page::Home,
            PageArg::Register => Page::Register,
            PageArg::Education => Page::Education,
            PageArg::Support => Page::Support,
            PageArg::Events => Page::Events,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Page to print
    #[arg(value_enum)]
    pub(crate) page: PageArg,
    /// Override where list data comes from (mock or live)
    #[arg(long, value_parser = crate::infra::parse_data_mode)]
    pub(crate) data_mode: Option<DataMode>,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Directory that receives one HTML file per page
    #[arg(long)]
    pub(crate) out_dir: PathBuf,
    /// Override where list data comes from (mock or live)
    #[arg(long, value_parser = crate::infra::parse_data_mode)]
    pub(crate) data_mode: Option<DataMode>,
}

fn configured_api(data_mode: Option<DataMode>) -> Result<Arc<dyn OutreachApi>, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(mode) = data_mode {
        config.data.mode = mode;
    }
    Ok(outreach_from_config(&config.data)?)
}

pub(crate) async fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let api = configured_api(args.data_mode)?;
    let html = site::render_page(args.page.into(), api.as_ref()).await?;
    print!("{html}");
    Ok(())
}

pub(crate) async fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let api = configured_api(args.data_mode)?;
    let written = export_site(api.as_ref(), &args.out_dir).await?;
    println!("Exported {} pages to {}", written.len(), args.out_dir.display());
    for path in written {
        println!("- {}", path.display());
    }
    Ok(())
}

/// Render every page into `out_dir`, creating it if needed. Returns the written paths in navigation order.
pub(crate) async fn export_site(
    api: &dyn OutreachApi,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, AppError> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::with_capacity(Page::ALL.len());
    for page in Page::ALL {
        let html = site::render_page(page, api).await?;
        let path = out_dir.join(page.file_name());
        std::fs::write(&path, html)?;
        written.push(path);
    }
    Ok(written)
}
