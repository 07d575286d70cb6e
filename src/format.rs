use crate::vacancy::Vacancy;

/// Posted verbatim when a run finds nothing.
pub(crate) const NO_VACANCIES: &str = "No vacancies found.";

const SEPARATOR: &str = "------------------------------";


/// Render the digest for one run.
///
/// The `*...*` spans render as bold under Telegram's Markdown parse mode.
/// Deterministic for a given batch; an empty batch yields the sentinel.
pub(crate) fn format_digest(vacancies: &[Vacancy]) -> String {
    if vacancies.is_empty() {
        return NO_VACANCIES.to_string();
    }

    let mut digest = String::new();
    for vacancy in vacancies {
        digest.push_str(&format!("*Title:* {}\n", vacancy.title));
        digest.push_str(&format!("*Description:* {}\n", vacancy.description));
        if let Some(salary) = &vacancy.salary {
            digest.push_str(&format!("*Salary:* {}\n", salary));
        }
        digest.push_str(SEPARATOR);
        digest.push('\n');
    }
    digest
}
