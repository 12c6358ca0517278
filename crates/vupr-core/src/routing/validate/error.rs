//! Error type for configuration consistency checks.

use std::fmt;

/// One URL string configured more than once, with every rule that lists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateUrl {
    pub url: String,
    /// Owning rule name for each occurrence, in configured order.
    pub profiles: Vec<String>,
}

/// The same target URL appears more than once across the routing rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRouteError {
    pub duplicates: Vec<DuplicateUrl>,
}

impl fmt::Display for DuplicateRouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "duplicate URLs found:")?;
        for dup in &self.duplicates {
            writeln!(f, "- {} appears in:", dup.url)?;
            for profile in &dup.profiles {
                writeln!(f, "    - profile: {:?}", profile)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for DuplicateRouteError {}
