//! Configuration options for parsing.
//!
//! ## Examples
//!
//! ```rust
//! use confit::{parse_with_options, ParseOptions};
//!
//! // Comments are stripped by default.
//! let tree = confit::parse("a: 1 // answer").unwrap();
//! assert_eq!(tree.find("a", false).and_then(|n| n.as_i64()), Some(1));
//!
//! // Opt out to treat comment markers as ordinary text.
//! let options = ParseOptions::new().with_comment_stripping(false);
//! assert!(parse_with_options("a: 1 // answer", &options).is_err());
//! ```

/// Configuration options for parsing.
///
/// # Examples
///
/// ```rust
/// use confit::ParseOptions;
///
/// let options = ParseOptions::new().with_comment_stripping(false);
/// assert!(!options.strip_comments);
/// ```
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Blank `//` and `/* … */` comments before parsing. Defaults to `true`.
    pub strip_comments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strip_comments: true,
        }
    }
}

impl ParseOptions {
    /// Creates default options (comment stripping on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether comments are blanked before parsing.
    #[must_use]
    pub fn with_comment_stripping(mut self, strip: bool) -> Self {
        self.strip_comments = strip;
        self
    }
}
