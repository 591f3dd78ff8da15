use crate::error::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

/// Standings page for the men's Championship Tour; one page per season.
static TOUR_URL: &str = "https://www.worldsurfleague.com/athletes/tour/mct";

const MAX_RETRIES: usize = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Build the standings URL for one season.
pub fn season_url(year: u16) -> String {
    Url::parse_with_params(TOUR_URL, [("year", year.to_string())])
        .expect("tour URL is valid")
        .to_string()
}

/// Fetch the raw standings markup for one season, retrying transient
/// failures. A non-success HTTP status is fatal for the season.
pub async fn fetch_season_page(client: &Client, year: u16) -> Result<String, ScrapeError> {
    let url = season_url(year);
    let mut attempt = 0;

    loop {
        attempt += 1;
        match client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(html) => return Ok(html),
                Err(_) if attempt < MAX_RETRIES => sleep(RETRY_DELAY).await,
                Err(e) => {
                    return Err(ScrapeError::Fetch {
                        year,
                        reason: e.to_string(),
                    })
                }
            },
            Ok(resp) => {
                return Err(ScrapeError::Fetch {
                    year,
                    reason: format!("HTTP error: {}", resp.status()),
                })
            }
            Err(_) if attempt < MAX_RETRIES => sleep(RETRY_DELAY).await,
            Err(e) => {
                return Err(ScrapeError::Fetch {
                    year,
                    reason: e.to_string(),
                })
            }
        }
    }
}
