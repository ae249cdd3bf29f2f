//! Lookup helpers over the category list.

use connelaide_domain::Category;

use crate::core::errors::{CoreError, Result};

const SUGGESTION_THRESHOLD: f64 = 0.8;

pub struct CategoryService;

impl CategoryService {
    /// Finds a category by exact name, suggesting the closest one on a miss.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Result<&'a Category> {
        let wanted = name.trim();
        if let Some(found) = categories.iter().find(|category| category.name == wanted) {
            return Ok(found);
        }
        Err(CoreError::CategoryNotFound {
            name: wanted.to_string(),
            suggestion: Self::closest_name(categories, wanted),
        })
    }

    /// Categories with a positive target budget, in name order.
    pub fn budgeted(categories: &[Category]) -> Vec<&Category> {
        let mut rows: Vec<&Category> = categories
            .iter()
            .filter(|category| category.has_target_budget())
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        rows
    }

    fn closest_name(categories: &[Category], wanted: &str) -> Option<String> {
        let needle = wanted.to_lowercase();
        categories
            .iter()
            .map(|category| {
                let score = strsim::jaro_winkler(&needle, &category.name.to_lowercase());
                (score, &category.name)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, name)| name.clone())
    }
}
