/// Services the popup borrows from the browser
use crate::error::TranscriptError;
use crate::page_data::{PageSnapshot, TabInfo};

/// Everything the fetch and copy flows need from the outside world.
///
/// The popup uses [`crate::browser::BrowserHost`]; tests substitute a fake.
#[allow(async_fn_in_trait)]
pub trait PopupHost {
    /// Active tab of the current window.
    async fn active_tab(&self) -> Result<TabInfo, TranscriptError>;

    /// Run the page probe inside `tab_id` and return what it collected.
    async fn probe_page(&self, tab_id: i32) -> Result<PageSnapshot, TranscriptError>;

    /// Single GET, body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, TranscriptError>;

    async fn write_clipboard(&self, text: &str) -> Result<(), TranscriptError>;
}
