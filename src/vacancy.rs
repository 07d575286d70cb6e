use anyhow::{bail, Result};
use tracing::warn;
use validator::Validate;

use crate::scrape::CandidateVacancy;


/// A vacancy that passed schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub(crate) struct Vacancy {
    #[validate(length(min = 1))]
    pub(crate) title: String,
    #[validate(length(min = 1))]
    pub(crate) description: String,
    /// Not every listing advertises pay.
    #[validate(length(min = 1))]
    pub(crate) salary: Option<String>,
}


impl TryFrom<CandidateVacancy> for Vacancy {
    type Error = anyhow::Error;

    fn try_from(candidate: CandidateVacancy) -> Result<Self> {
        let Some(title) = candidate.title else {
            bail!("missing field `title`");
        };
        let Some(description) = candidate.description else {
            bail!("missing field `description`");
        };

        let vacancy = Self {
            title,
            description,
            salary: candidate.salary,
        };
        vacancy.validate()?;
        Ok(vacancy)
    }
}


/// Keep the candidates that satisfy the vacancy schema, in input order.
///
/// Rejects are logged and dropped; the batch call itself never fails, even
/// when every candidate is rejected.
pub(crate) fn validate_batch(candidates: Vec<CandidateVacancy>) -> Vec<Vacancy> {
    candidates
        .into_iter()
        .filter_map(|candidate| match Vacancy::try_from(candidate) {
            Ok(vacancy) => Some(vacancy),
            Err(e) => {
                warn!("Validation error: {e}");
                None
            }
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: Option<&str>, description: Option<&str>) -> CandidateVacancy {
        CandidateVacancy {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            salary: None,
        }
    }

    #[test]
    fn drops_candidates_missing_a_required_field() {
        let batch = validate_batch(vec![
            candidate(Some("A"), Some("B")),
            candidate(Some("A"), None),
        ]);

        assert_eq!(
            batch,
            vec![Vacancy {
                title: "A".to_string(),
                description: "B".to_string(),
                salary: None,
            }]
        );
    }

    #[test]
    fn preserves_input_order() {
        let batch = validate_batch(vec![
            candidate(Some("first"), Some("d")),
            candidate(None, Some("d")),
            candidate(Some("second"), Some("d")),
            candidate(Some("third"), Some("d")),
        ]);

        let titles: Vec<_> = batch.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn never_grows_the_batch() {
        let input = vec![
            candidate(Some("A"), Some("B")),
            candidate(None, None),
            candidate(Some("C"), Some("D")),
        ];
        let len = input.len();

        assert!(validate_batch(input).len() <= len);
    }

    #[test]
    fn rejects_empty_strings() {
        assert!(validate_batch(vec![candidate(Some(""), Some("B"))]).is_empty());
    }

    #[test]
    fn rejects_empty_salary_but_accepts_absent_salary() {
        let mut priced = candidate(Some("A"), Some("B"));
        priced.salary = Some("".to_string());
        assert!(validate_batch(vec![priced]).is_empty());

        let unpriced = candidate(Some("A"), Some("B"));
        assert_eq!(validate_batch(vec![unpriced]).len(), 1);
    }

    #[test]
    fn salary_is_carried_through() {
        let mut priced = candidate(Some("A"), Some("B"));
        priced.salary = Some("30 000 грн.".to_string());

        let batch = validate_batch(vec![priced]);
        assert_eq!(batch[0].salary.as_deref(), Some("30 000 грн."));
    }

    #[test]
    fn empty_input_yields_empty_batch() {
        assert!(validate_batch(Vec::new()).is_empty());
    }
}
