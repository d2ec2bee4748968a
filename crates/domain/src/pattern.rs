use count_chars_shared_kernel::{DomainError, DomainResult};
use globset::{Glob, GlobMatcher};

/// Wrapper around a `globset` matcher applied to file names.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    original: String,
    matcher: GlobMatcher,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> DomainResult<Self> {
        let glob = Glob::new(pattern).map_err(|err| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { original: pattern.to_string(), matcher: glob.compile_matcher() })
    }

    /// Compile every pattern, failing on the first invalid one.
    pub fn compile_all(patterns: &[String]) -> DomainResult<Vec<Self>> {
        patterns.iter().map(|p| Self::new(p)).collect()
    }

    pub fn matches(&self, value: &str) -> bool {
        self.matcher.is_match(value)
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }
}
