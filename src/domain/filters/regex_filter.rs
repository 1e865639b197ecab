//! Regex-based include and exclude filters.

use regex::Regex;

use super::Filter;
use crate::domain::ConfigError;

/// Ordered list of compiled, unanchored patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile every pattern.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` for the first pattern that fails.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|source| ConfigError::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Return the first pattern that matches, stopping there.
    pub fn first_match(&self, qualified: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|re| re.is_match(qualified))
            .map(|re| re.as_str())
    }
}

/// Passes tables matched by at least one pattern.
pub struct IncludeFilter {
    patterns: PatternSet,
}

impl IncludeFilter {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }
}

impl Filter for IncludeFilter {
    fn allows(&self, qualified: &str) -> bool {
        self.patterns.first_match(qualified).is_some()
    }

    fn name(&self) -> &'static str {
        "include_table_regex"
    }
}

/// Passes tables matched by none of the patterns.
pub struct ExcludeFilter {
    patterns: PatternSet,
}

impl ExcludeFilter {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }
}

impl Filter for ExcludeFilter {
    fn allows(&self, qualified: &str) -> bool {
        self.patterns.first_match(qualified).is_none()
    }

    fn name(&self) -> &'static str {
        "exclude_table_regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_set_first_match() {
        let set = PatternSet::compile(&["^app\\.", "orders$", ".*"]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.first_match("app.orders"), Some("^app\\."));
        assert_eq!(set.first_match("shop.orders"), Some("orders$"));
        assert_eq!(set.first_match("x.y"), Some(".*"));
    }

    #[test]
    fn test_patterns_are_not_anchored() {
        let include = IncludeFilter::new(PatternSet::compile(&["canal"]).unwrap());
        assert!(include.allows("app.canal"));
        assert!(include.allows("canal.users"));
        assert!(include.allows("app.canal_history"));
    }

    #[test]
    fn test_exclude_filter() {
        let exclude = ExcludeFilter::new(PatternSet::compile(&["mysql\\..*"]).unwrap());
        assert!(!exclude.allows("mysql.user"));
        assert!(exclude.allows("app.user"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PatternSet::compile(&["ok", "(unclosed"]).unwrap_err();
        match err {
            ConfigError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
