//! Browser automation against the screener site. One fresh Chromium
//! profile per run, one login, one export click, one file check.

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::browser::{
    SetDownloadBehaviorBehavior, SetDownloadBehaviorParams,
};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::{Element, Page};
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::error::ScrapeError;
use crate::screener::ScreenerDef;
use shared::Config;

const LOGIN_URL: &str = "https://intradayscreener.com/login";

/// Source of one screener's CSV export. The production implementation
/// drives a browser; tests substitute a file-backed one.
#[async_trait::async_trait]
pub trait ExportSource: Send + Sync {
    async fn export(&self, def: &ScreenerDef) -> Result<PathBuf, ScrapeError>;
}

const LOGIN_FIELD_WAIT: Duration = Duration::from_secs(20);
const ELEMENT_WAIT: Duration = Duration::from_secs(10);
const LOGIN_SETTLE: Duration = Duration::from_secs(6);
const PAGE_SETTLE: Duration = Duration::from_secs(5);
const DOWNLOAD_WAIT: Duration = Duration::from_secs(10);

pub struct Exporter {
    email: String,
    password: String,
    download_dir: PathBuf,
    headless: bool,
}

impl Exporter {
    pub fn new(config: &Config) -> Self {
        Self {
            email: config.screener_email.clone(),
            password: config.screener_password.clone(),
            download_dir: PathBuf::from(&config.download_dir),
            headless: config.headless,
        }
    }

    /// Log in, trigger the screener's CSV export and return the downloaded
    /// file's path. The browser session and its temporary profile are torn
    /// down on every exit path.
    async fn export_via_browser(&self, def: &ScreenerDef) -> Result<PathBuf, ScrapeError> {
        let profile = TempDir::with_prefix("chrome-profile")?;
        info!("Launching browser for {}", def.screener_type);

        let mut builder = BrowserConfig::builder()
            .user_data_dir(profile.path())
            .window_size(1920, 1080);
        if !self.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(ScrapeError::LaunchFailed)?;

        let (mut browser, mut handler) = Browser::launch(browser_config).await?;
        let events = tokio::task::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let result = self.drive(&browser, def).await;

        browser.close().await.ok();
        browser.wait().await.ok();
        events.abort();
        drop(profile);
        info!("Browser closed and profile cleaned up");

        result
    }

    async fn drive(&self, browser: &Browser, def: &ScreenerDef) -> Result<PathBuf, ScrapeError> {
        let page = browser.new_page("about:blank").await?;
        page.execute(
            SetDownloadBehaviorParams::builder()
                .behavior(SetDownloadBehaviorBehavior::Allow)
                .download_path(self.download_dir.display().to_string())
                .build()
                .map_err(ScrapeError::LaunchFailed)?,
        )
        .await?;

        let result = self.login_and_export(&page, def).await;

        if let Err(err) = &result {
            error!("Export failed for {}: {}", def.screener_type, err);
            self.save_diagnostic_screenshot(&page, def).await;
        }
        result
    }

    async fn login_and_export(&self, page: &Page, def: &ScreenerDef) -> Result<PathBuf, ScrapeError> {
        page.goto(LOGIN_URL).await?;
        info!("Opened login page");

        let email = wait_for_element(page, "input[type=email]", LOGIN_FIELD_WAIT).await?;
        clear_and_type(&email, &self.email).await?;

        let password = wait_for_element(page, "input[type=password]", ELEMENT_WAIT).await?;
        clear_and_type(&password, &self.password).await?;

        let submit = wait_for_element(page, "form button", ELEMENT_WAIT).await?;
        submit.scroll_into_view().await?;
        submit.click().await?;
        info!("Login submitted");
        sleep(LOGIN_SETTLE).await;

        page.goto(def.page_url).await?;
        info!("Opened {} page", def.screener_type);
        sleep(PAGE_SETTLE).await;

        self.trigger_export(page, def).await?;

        // Single check after a fixed delay; the site either delivered the
        // file by now or the batch is abandoned.
        info!("Waiting for CSV to download");
        sleep(DOWNLOAD_WAIT).await;
        let path = self.download_dir.join(def.export_file);
        if path.exists() {
            info!("Export file found at {}", path.display());
            Ok(path)
        } else {
            Err(ScrapeError::ExportFileMissing { path })
        }
    }

    /// Direct selector first when the page is known to have one, then a
    /// scan of every clickable element for one mentioning "csv".
    async fn trigger_export(&self, page: &Page, def: &ScreenerDef) -> Result<(), ScrapeError> {
        if let Some(selector) = def.export_selector {
            if let Ok(element) = page.find_element(selector).await {
                element.click().await?;
                info!("Clicked export control '{}'", selector);
                return Ok(());
            }
            warn!("Export selector '{}' missing, scanning clickable elements", selector);
        }

        for element in page.find_elements("button, a").await? {
            let text = element.inner_text().await?.unwrap_or_default();
            if text.trim().to_lowercase().contains("csv") {
                element.click().await?;
                info!("Clicked export element '{}'", text.trim());
                return Ok(());
            }
        }

        Err(ScrapeError::ExportControlNotFound)
    }

    async fn save_diagnostic_screenshot(&self, page: &Page, def: &ScreenerDef) {
        let path = self
            .download_dir
            .join(format!("error_{}.png", def.screener_type.to_lowercase()));
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(true)
            .build();
        match page.save_screenshot(params, &path).await {
            Ok(_) => info!("Diagnostic screenshot saved to {}", path.display()),
            Err(err) => warn!("Could not capture diagnostic screenshot: {}", err),
        }
    }
}

#[async_trait::async_trait]
impl ExportSource for Exporter {
    async fn export(&self, def: &ScreenerDef) -> Result<PathBuf, ScrapeError> {
        self.export_via_browser(def).await
    }
}

/// Bounded poll for an element; chromiumoxide's `find_element` does not
/// wait on its own.
async fn wait_for_element(
    page: &Page,
    selector: &str,
    timeout: Duration,
) -> Result<Element, ScrapeError> {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if let Ok(element) = page.find_element(selector).await {
            return Ok(element);
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(ScrapeError::ElementNotFound {
                selector: selector.to_string(),
            });
        }
        sleep(Duration::from_millis(500)).await;
    }
}

async fn clear_and_type(element: &Element, value: &str) -> Result<(), ScrapeError> {
    element.click().await?;
    element
        .call_js_fn("function() { this.value = ''; }", false)
        .await?;
    element.type_str(value).await?;
    Ok(())
}
