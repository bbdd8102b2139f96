//! Configuration options for RSON parsing.
//!
//! ## Examples
//!
//! ```rust
//! use rson::{parse_str_with_options, ParseOptions, UnknownTags};
//!
//! let options = ParseOptions::new()
//!     .with_max_depth(64)
//!     .with_unknown_tags(UnknownTags::Error);
//!
//! assert!(parse_str_with_options("@mystery 1", options).is_err());
//! ```

/// Policy for tags whose name has no built-in meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnknownTags {
    /// Preserve the tag as [`crate::Value::Tagged`].
    #[default]
    Keep,
    /// Reject the document.
    Error,
}

/// Configuration for a parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum container nesting before the parser gives up with
    /// `DepthLimit`. Guards against stack exhaustion on adversarial input.
    pub max_depth: usize,
    /// What to do with non-reserved tag names.
    pub unknown_tags: UnknownTags,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: 1024,
            unknown_tags: UnknownTags::default(),
        }
    }
}

impl ParseOptions {
    /// Creates the default options (depth 1024, unknown tags kept).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the unknown-tag policy.
    #[must_use]
    pub fn with_unknown_tags(mut self, unknown_tags: UnknownTags) -> Self {
        self.unknown_tags = unknown_tags;
        self
    }
}
