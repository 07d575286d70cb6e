use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};

pub(crate) const NO_TITLE: &str = "No title";
pub(crate) const NO_DESCRIPTION: &str = "No description";


/// The structural signature of one job-listing markup convention.
///
/// Offer cards carry no stable identifiers, only class names, so the whole
/// signature lives in this one set of selectors. When the source markup
/// drifts, the fix is a new selector string, not new extraction code.
#[derive(Clone)]
pub(crate) struct SelectorSet {
    container: Selector,
    title: Selector,
    description: Selector,
    salary: Selector,
}


impl SelectorSet {
    pub(crate) fn new(
        container: &str,
        title: &str,
        description: &str,
        salary: &str,
    ) -> Result<Self> {
        Ok(Self {
            container: parse_selector(container)?,
            title: parse_selector(title)?,
            description: parse_selector(description)?,
            salary: parse_selector(salary)?,
        })
    }

    /// The offer-card convention currently used by OLX listing pages.
    pub(crate) fn olx() -> Self {
        Self::new("div.offer", "strong", "p.text", "strong.price")
            .expect("Built-in selectors should have been valid")
    }
}


fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector `{css}`: {e}"))
}


/// A vacancy as it appears in the page markup, before schema validation.
///
/// Extraction always fills `title` and `description` (with placeholder text
/// when the sub-node is missing), but the fields stay optional: this is the
/// loose boundary type, and validation must hold up against producers that
/// are not as well behaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CandidateVacancy {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) salary: Option<String>,
}


/// Extract every offer card from a listing page, in document order.
///
/// A page without any matching container yields an empty list, never an
/// error. Pure function of the input text.
pub(crate) fn extract_vacancies(html: &str, selectors: &SelectorSet) -> Vec<CandidateVacancy> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.container)
        .map(|card| CandidateVacancy {
            title: Some(
                field_text(card, &selectors.title).unwrap_or_else(|| NO_TITLE.to_string()),
            ),
            description: Some(
                field_text(card, &selectors.description)
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            ),
            salary: field_text(card, &selectors.salary),
        })
        .collect()
}


/// Text of the first node under `card` matching `selector`, with
/// non-breaking spaces normalized and surrounding whitespace trimmed.
/// A missing node and an empty one are both `None`.
fn field_text(card: ElementRef, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|node| {
            node.text()
                .map(|t| t.replace("\u{a0}", " "))
                .collect::<String>()
                .trim()
                .to_string()
        })
        .filter(|text| !text.is_empty())
}
