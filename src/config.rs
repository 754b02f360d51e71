const UNLABELED: &str = "<unlabeled>";

/// Limits and diagnostics for a root source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    pub label: String,
    pub max_len: Option<usize>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            label: UNLABELED.to_string(),
            max_len: None,
        }
    }
}

pub struct SourceConfigBuilder {
    label: String,
    max_len: Option<usize>,
}

impl SourceConfigBuilder {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            max_len: None,
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn build(self) -> SourceConfig {
        SourceConfig {
            label: self.label,
            max_len: self.max_len,
        }
    }
}
