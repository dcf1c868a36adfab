use std::time::Duration;

use crate::error::ScrapeError;

const USER_AGENT: &str = "scout/0.1";
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the full body of `url` as text. The client lives only for this
/// call; non-2xx responses count as fetch failures.
pub async fn fetch_page(url: &str) -> Result<String, ScrapeError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .read_timeout(READ_TIMEOUT)
        .build()?;

    let response = client.get(url).send().await?.error_for_status()?;
    let html = response.text().await?;

    log::info!("Fetched {} bytes from {}", html.len(), url);
    Ok(html)
}
