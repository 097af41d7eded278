use std::collections::HashSet;

/// Header names compared trimmed and lower-cased.
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveSet {
    keys: HashSet<String>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = names.into_iter().map(|name| Self::key(name.as_ref())).collect();
        Self { keys }
    }

    /// Normalized form used for comparisons.
    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&Self::key(name))
    }
}
