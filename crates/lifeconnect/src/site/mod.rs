//! Server-rendered pages for the LifeConnect site.

pub mod content;
pub mod education;
pub mod events;
pub mod home;
pub mod html;
pub mod layout;
pub mod register;
pub mod router;
pub mod support;

pub use layout::Page;
pub use router::site_router;
pub use support::ContactState;

use crate::outreach::{ApiError, OutreachApi};
use crate::registration::RegistrationController;

/// Render one page with a fresh form, fetching list data from `api` where the page needs it.
pub async fn render_page(page: Page, api: &dyn OutreachApi) -> Result<String, ApiError> {
    let html = match page {
        Page::Home => home::render(),
        Page::Education => education::render(),
        Page::Register => register::render(&RegistrationController::new()),
        Page::Events => {
            let events = api.fetch_events().await?;
            events::render(Some(events.as_slice()))
        }
        Page::Support => {
            let resources = api.fetch_resources().await?;
            support::render(Some(resources.as_slice()), &ContactState::default())
        }
    };
    Ok(html)
}
