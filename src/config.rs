use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use url::Url;

/// Number of listing pages scraped per run.
pub(crate) const PAGE_COUNT: u32 = 20;

const SEARCH_BASE: &str = "https://www.olx.ua/uk/rabota";

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) bot_token: String,
    pub(crate) group_id: String,
    /// Locality segment of the search URL, e.g. "kiev".
    pub(crate) city: String,
    /// Search term segment of the search URL, e.g. "developer".
    pub(crate) query: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `TOKEN` and `GROUP_ID` are required; a missing one fails the run
    /// here, before any network activity.
    pub(crate) fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            bot_token: env::var("TOKEN").context("TOKEN must be set")?,
            group_id: env::var("GROUP_ID").context("GROUP_ID must be set")?,
            city: env::var("CITY").unwrap_or_else(|_| "kiev".to_string()),
            query: env::var("QUERY").unwrap_or_else(|_| "developer".to_string()),
        })
    }

    /// One search URL per listing page, in page order.
    pub(crate) fn search_urls(&self) -> Result<Vec<Url>> {
        (1..=PAGE_COUNT)
            .map(|page| {
                let mut url = Url::parse(&format!(
                    "{SEARCH_BASE}/{}/q-{}/",
                    self.city, self.query
                ))
                .with_context(|| format!("Invalid search URL for query `{}`", self.query))?;
                url.query_pairs_mut()
                    .append_pair("currency", "UAH")
                    .append_pair("page", &page.to_string());
                Ok(url)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            bot_token: "123:abc".to_string(),
            group_id: "-100200300".to_string(),
            city: "kiev".to_string(),
            query: "developer".to_string(),
        }
    }

    #[test]
    fn one_url_per_page() {
        let urls = test_config().search_urls().unwrap();
        assert_eq!(urls.len(), PAGE_COUNT as usize);
    }

    #[test]
    fn urls_follow_the_search_template() {
        let urls = test_config().search_urls().unwrap();
        assert_eq!(
            urls[0].as_str(),
            "https://www.olx.ua/uk/rabota/kiev/q-developer/?currency=UAH&page=1"
        );
        assert_eq!(
            urls.last().unwrap().query(),
            Some("currency=UAH&page=20")
        );
    }
}
