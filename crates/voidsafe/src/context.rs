//! Path parsing configuration

/// Configuration for [`Path::parse_with`](crate::Path::parse_with).
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Maximum nesting depth of a path expression
    pub max_depth: usize,
}

impl Default for ParseContext {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

impl ParseContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}
