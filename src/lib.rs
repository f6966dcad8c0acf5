//! # confit
//!
//! A style-preserving parser and writer for a JSON5-superset configuration
//! format. confit parses human-edited config files into a tree and writes
//! that tree back *without reformatting what the author wrote*: quote
//! styles, assignment operators, delimiter choices, and numeric literal
//! shapes all survive the round trip.
//!
//! ## What does it accept?
//!
//! Everything JSON5 accepts, plus a few config-file conveniences:
//!
//! - **Bare documents**: a top-level key/value list needs no enclosing
//!   braces, and none are added on output
//! - **Three assignment operators**: `key: value`, `key = value`, and
//!   `key | value`
//! - **Three delimiters**: commas, bare newlines, and `|`
//! - **Three string quotes**: `"…"`, `'…'`, and back-tick multiline
//!   literals
//! - **Comments**: `//` and `/* … */`, stripped before parsing
//! - **JSON5 numbers**: hex integers, leading/trailing decimal points,
//!   exponents, `Infinity`, `-Infinity`, `NaN`, `-NaN`
//!
//! ## Why style preservation?
//!
//! Config tooling that rewrites a whole file to change one key produces
//! noisy diffs and angry reviewers. confit records every formatting
//! decision that does not affect value semantics — `0x1F` vs `31`,
//! `.5` vs `0.5`, `'single'` vs `"double"`, `a = 1` vs `a: 1` — during
//! parsing and replays it during writing, so untouched parts of the file
//! come back as they went in.
//!
//! ## Quick Start
//!
//! ```rust
//! use confit::{parse, to_string};
//!
//! let source = "retries = 3\ntimeout: 1.5e3";
//! let mut tree = parse(source).unwrap();
//!
//! // Query
//! assert_eq!(tree.find("retries", false).and_then(|n| n.as_i64()), Some(3));
//!
//! // Mutate
//! tree.add("verbose", true);
//!
//! // Write back: original members keep their `=` and exponent form
//! let out = to_string(&tree).unwrap();
//! assert!(out.contains("retries = 3"));
//! assert!(out.contains("timeout: 1.5e3"));
//! assert!(out.contains("\"verbose\": true"));
//! ```
//!
//! ## Building Trees
//!
//! ```rust
//! use confit::{confit, to_string};
//!
//! let tree = confit!({
//!     "name": "service",
//!     "port": 8080,
//!     "tags": ["a", "b"]
//! });
//!
//! let text = to_string(&tree).unwrap();
//! let back = confit::parse(&text).unwrap();
//! assert_eq!(back.find("port", false).and_then(|n| n.as_i64()), Some(8080));
//! ```
//!
//! ## Safety and Errors
//!
//! - No `unsafe` code
//! - Malformed input returns [`Error`], never panics
//! - The tree owns its strings; it does not borrow from the input buffer

pub mod error;
pub mod macros;
pub mod options;
pub mod style;
pub mod value;

mod comment;
mod number;
mod parser;
mod writer;

pub use comment::strip_comments;
pub use error::{Error, Result};
pub use options::ParseOptions;
pub use style::{
    AssignStyle, DelimStyle, IntFormat, NameStyle, QuoteStyle, RealDigits, RealFormat,
};
pub use value::{Constant, Node, Value};

use std::io;

/// Parses a document into a tree, stripping comments first.
///
/// The returned root node is an object (braced or bare), or an array for
/// `[…]` documents.
///
/// # Examples
///
/// ```rust
/// let tree = confit::parse("{a: 1} // trailing").unwrap();
/// assert_eq!(tree.find("a", false).and_then(|n| n.as_i64()), Some(1));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] or [`Error::InvalidName`] on malformed
/// input, positioned at the offending byte.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(source: &str) -> Result<Node> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parses a document with explicit options.
///
/// # Examples
///
/// ```rust
/// use confit::ParseOptions;
///
/// let options = ParseOptions::new().with_comment_stripping(false);
/// let tree = confit::parse_with_options("{a: \"// kept\"}", &options).unwrap();
/// assert_eq!(tree.find("a", false).and_then(|n| n.as_str()), Some("// kept"));
/// ```
///
/// # Errors
///
/// Returns an error if the input is not a valid document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<Node> {
    if options.strip_comments {
        let mut buf = source.as_bytes().to_vec();
        comment::strip_comments(&mut buf);
        parser::parse_document(&buf)
    } else {
        parser::parse_document(source.as_bytes())
    }
}

/// Serializes a tree to a string, replaying each node's stored formatting.
///
/// # Errors
///
/// Returns an error if the rendered text is not valid UTF-8 (not
/// reachable for trees built from `&str` input or the construction API).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(node: &Node) -> Result<String> {
    to_string_with_indent(node, 0)
}

/// Serializes a tree to a string starting at a base indentation column.
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_indent(node: &Node, indent: i32) -> Result<String> {
    let mut buf = Vec::with_capacity(256);
    writer::write_document(&mut buf, node, indent)?;
    String::from_utf8(buf).map_err(Error::message)
}

/// Serializes a tree to any [`io::Write`] sink.
///
/// # Examples
///
/// ```rust
/// let tree = confit::parse("{a: 1}").unwrap();
/// let mut buf = Vec::new();
/// confit::to_writer(&mut buf, &tree).unwrap();
/// assert!(!buf.is_empty());
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if the sink fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(writer: W, node: &Node) -> Result<()> {
    to_writer_with_indent(writer, node, 0)
}

/// Serializes a tree to a sink starting at a base indentation column.
///
/// # Errors
///
/// Returns [`Error::Io`] if the sink fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_indent<W: io::Write>(mut writer: W, node: &Node, indent: i32) -> Result<()> {
    writer::write_document(&mut writer, node, indent)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_write() {
        let tree = parse("{server: {host: \"local\", port: 8080}}").unwrap();
        assert_eq!(tree.find("port", true).and_then(|n| n.as_i64()), Some(8080));

        let out = to_string(&tree).unwrap();
        let back = parse(&out).unwrap();
        assert!(tree.value_eq(&back));
    }

    #[test]
    fn test_comment_stripping_default() {
        let tree = parse("a: 1 // the answer\n/* block */ b: 2").unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_construction_roundtrip() {
        let mut root = Node::object();
        root.add("name", "svc");
        root.add("count", 3i64);
        root.add("ratio", 0.25f64);
        root.add("on", true);
        root.add("nothing", ());

        let out = to_string(&root).unwrap();
        let back = parse(&out).unwrap();
        assert!(root.value_eq(&back));
    }

    #[test]
    fn test_to_writer_matches_to_string() {
        let tree = parse("{a: [1, 2], b: 'x'}").unwrap();
        let mut buf = Vec::new();
        to_writer(&mut buf, &tree).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_string(&tree).unwrap());
    }

    #[test]
    fn test_base_indent() {
        let tree = parse("{a: 1}").unwrap();
        let out = to_string_with_indent(&tree, 4).unwrap();
        assert!(out.starts_with("{\n        a: 1\n"));
    }
}
