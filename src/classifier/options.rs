use crate::mx::MxOrdering;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyOptions {
    pub ordering: MxOrdering,
    /// Reuse one lookup for every email of the same domain.
    pub cache_domains: bool,
    /// Emit an info progress line every N emails (0 disables).
    pub progress_every: usize,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            ordering: MxOrdering::Lexicographic,
            cache_domains: false,
            progress_every: 100,
        }
    }
}

impl ClassifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ordering(mut self, ordering: MxOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn cache_domains(mut self, value: bool) -> Self {
        self.cache_domains = value;
        self
    }

    pub fn progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }
}
