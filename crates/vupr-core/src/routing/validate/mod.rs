//! Load-time consistency check over the routing rules.

mod error;

use std::collections::HashMap;

use super::table::RoutingTable;

pub use error::{DuplicateRouteError, DuplicateUrl};

/// Returns Ok(()) if no target URL string is configured more than once.
///
/// Comparison is on the URL strings exactly as written; two spellings of the
/// same host are not considered duplicates. Every duplicated URL is reported
/// together with every rule that lists it, in first-appearance order.
pub fn validate(table: &RoutingTable) -> Result<(), DuplicateRouteError> {
    let mut first_owner: HashMap<&str, &str> = HashMap::new();
    let mut dup_index: HashMap<&str, usize> = HashMap::new();
    let mut duplicates: Vec<DuplicateUrl> = Vec::new();

    for rule in table.rules() {
        for url in &rule.target_urls {
            let Some(owner) = first_owner.get(url.as_str()).copied() else {
                first_owner.insert(url.as_str(), rule.name.as_str());
                continue;
            };
            let idx = *dup_index.entry(url.as_str()).or_insert_with(|| {
                duplicates.push(DuplicateUrl {
                    url: url.clone(),
                    profiles: vec![owner.to_string()],
                });
                duplicates.len() - 1
            });
            duplicates[idx].profiles.push(rule.name.clone());
        }
    }

    if duplicates.is_empty() {
        return Ok(());
    }

    tracing::debug!(count = duplicates.len(), "duplicate target URLs in config");
    Err(DuplicateRouteError { duplicates })
}

#[cfg(test)]
mod tests;
