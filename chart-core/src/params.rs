//! Raw query parameter mapping.

/// Ordered mapping from parameter name to raw string value.
///
/// Keys are case-sensitive. Encounter order is preserved because series
/// discovery depends on it. When a key is supplied more than once the last
/// value wins, while the key keeps the position of its first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartParams {
    pairs: Vec<(String, String)>,
}

impl ChartParams {
    /// Create an empty parameter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Look up the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Distinct keys in first-encounter order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs
            .iter()
            .enumerate()
            .filter(|(i, (k, _))| !self.pairs[..*i].iter().any(|(prev, _)| prev == k))
            .map(|(_, (k, _))| k.as_str())
    }

    /// Distinct keys starting with `prefix`, in first-encounter order.
    #[must_use]
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.keys().filter(|k| k.starts_with(prefix)).collect()
    }

    /// Number of raw pairs, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no parameters were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ChartParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<Vec<(String, String)>> for ChartParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}
