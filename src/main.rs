use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use crate::config::Config;
use crate::scrape::{CandidateVacancy, SelectorSet};
use crate::telegram::TelegramNotifier;

mod config;
mod fetch;
mod format;
mod scrape;
mod telegram;
mod vacancy;


#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let urls = config.search_urls()?;
    let client = fetch::build_client()?;
    let selectors = SelectorSet::olx();

    info!(
        pages = urls.len(),
        city = %config.city,
        query = %config.query,
        "Scraping listing pages"
    );

    // One task per page, all in flight at once; awaited in issue order so
    // the digest lists vacancies in (page order, in-page order).
    let mut scrape_tasks: Vec<(Url, JoinHandle<Result<Vec<CandidateVacancy>>>)> =
        Vec::with_capacity(urls.len());
    for url in urls {
        let client = client.clone();
        let selectors = selectors.clone();
        let page_url = url.clone();
        let task = tokio::spawn(async move {
            let html = fetch::fetch_html(&client, &page_url).await?;
            Ok(scrape::extract_vacancies(&html, &selectors))
        });
        scrape_tasks.push((url, task));
    }

    let mut page_results = Vec::with_capacity(scrape_tasks.len());
    for (url, task) in scrape_tasks {
        let result = task.await.context("Scrape task panicked")?;
        page_results.push((url, result));
    }

    let (candidates, failed_pages) = collect_candidates(page_results);
    info!(
        candidates = candidates.len(),
        failed_pages, "Scrape complete"
    );

    let vacancies = vacancy::validate_batch(candidates);
    info!(vacancies = vacancies.len(), "Validation complete");

    let digest = format::format_digest(&vacancies);

    let notifier = TelegramNotifier::new(config.bot_token, config.group_id);
    notifier
        .send(&digest)
        .await
        .context("Failed to deliver the digest")?;

    Ok(())
}


/// Fold per-page scrape results into one candidate list, page order first,
/// in-page order second. A failed page contributes nothing to the list; it
/// is logged and counted, never fatal to the batch.
fn collect_candidates(
    page_results: Vec<(Url, Result<Vec<CandidateVacancy>>)>,
) -> (Vec<CandidateVacancy>, usize) {
    let mut candidates = Vec::new();
    let mut failed_pages = 0;

    for (url, result) in page_results {
        match result {
            Ok(found) => candidates.extend(found),
            Err(e) => {
                warn!(url = %url, "Page scrape failed: {e:#}");
                failed_pages += 1;
            }
        }
    }

    (candidates, failed_pages)
}
