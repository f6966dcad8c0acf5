//! Formatting metadata carried alongside parsed values.
//!
//! Every [`Node`](crate::Node) records how its textual pieces were written
//! in the source document: quote characters, assignment operators,
//! delimiters, and numeric literal shapes. The writer replays this metadata
//! so that re-serializing a parsed document reproduces the author's
//! formatting choices instead of a canonical reformat.
//!
//! Nodes built through the construction API carry the `Default` variant of
//! each style (double-quoted names, colon assignment, comma delimiters,
//! plain numeric rendering).
//!
//! ## Examples
//!
//! ```rust
//! use confit::{parse, AssignStyle, DelimStyle};
//!
//! let tree = parse("{a = 1\nb: 2}").unwrap();
//! assert_eq!(tree.members().unwrap()[0].assign_style, AssignStyle::Equals);
//! assert_eq!(tree.members().unwrap()[0].delim_style, DelimStyle::Newline);
//! ```

/// How a member name was quoted in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NameStyle {
    #[default]
    DoubleQuoted,
    SingleQuoted,
    Unquoted,
}

/// Which operator separated a member name from its value.
///
/// The format accepts `:` (JSON style), `=` (INI style), and `|`
/// (column style). [`Node::assign_padding`](crate::Node::assign_padding)
/// records the spaces written before the operator, so aligned configs
/// keep their columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AssignStyle {
    #[default]
    Colon,
    Equals,
    Line,
}

/// How a member was separated from the member after it.
///
/// `Comma` is the canonical style; on output the last member of a
/// comma-delimited sequence omits its comma. `Line` is the `|` delimiter,
/// with [`Node::delim_padding`](crate::Node::delim_padding) recording the
/// spaces written before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DelimStyle {
    #[default]
    Comma,
    Newline,
    Line,
}

/// The quote character of a single-line string value.
///
/// Back-tick strings are a separate kind
/// ([`Value::MultilineString`](crate::Value::MultilineString)), so only the
/// two single-line forms live here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl QuoteStyle {
    /// Returns the quote character itself.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }
}

/// How an integer literal was written.
///
/// Hex literals keep the case of their digits so `0x1F` and `0x1f`
/// both survive a round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IntFormat {
    #[default]
    Decimal,
    LowerHex,
    UpperHex,
}

impl IntFormat {
    /// Returns `true` for either hex form.
    #[inline]
    #[must_use]
    pub const fn is_hex(&self) -> bool {
        matches!(self, IntFormat::LowerHex | IntFormat::UpperHex)
    }
}

/// The digit grouping of a real literal, as written.
///
/// These fields let the writer regenerate the exact character sequence of
/// the source literal without consulting the (possibly imprecise) stored
/// `f64`. The sign is not stored here; it rides on the sign bit of the
/// value, which covers `-0.5` as well as `-0.0`.
///
/// # Examples
///
/// ```rust
/// use confit::{parse, RealFormat, Value};
///
/// let tree = parse("x: .00012").unwrap();
/// match &tree.members().unwrap()[0].value {
///     Value::Real { format: RealFormat::Digits(d), .. } => {
///         assert_eq!(d.leading_zeros, 3);
///         assert_eq!(d.fraction, 12);
///         assert!(!d.lead_digit);
///     }
///     other => panic!("expected a parsed real, got {:?}", other),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RealDigits {
    /// Digits before the decimal point, sign excluded.
    pub integer_part: i64,
    /// Fraction digits after the leading-zero run.
    pub fraction: i64,
    /// Count of `0` characters immediately after the decimal point.
    /// Never swallows the final fraction digit, so an all-zero fraction
    /// such as `0.00` keeps one digit in `fraction`.
    pub leading_zeros: u8,
    /// `false` for literals that open with the decimal point (`.5`).
    pub lead_digit: bool,
}

/// How a real literal should be rendered.
///
/// Parsed literals carry `Digits` or `Exponent` with the exact source
/// grouping; constructed nodes carry `Plain` and render through the
/// standard shortest-round-trip float display. The four named variants
/// cover the JSON5 keyword reals.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum RealFormat {
    #[default]
    Plain,
    Digits(RealDigits),
    Exponent {
        digits: RealDigits,
        exponent: i32,
        /// The exponent was written with a `-` sign. The value has the
        /// exponent applied by repeated multiplication with 0.1.
        negative: bool,
        /// The exponent was written with an explicit `+` sign.
        explicit_plus: bool,
    },
    Nan,
    NegNan,
    Infinity,
    NegInfinity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_canonical() {
        assert_eq!(NameStyle::default(), NameStyle::DoubleQuoted);
        assert_eq!(AssignStyle::default(), AssignStyle::Colon);
        assert_eq!(DelimStyle::default(), DelimStyle::Comma);
        assert_eq!(QuoteStyle::default(), QuoteStyle::Double);
        assert_eq!(IntFormat::default(), IntFormat::Decimal);
        assert_eq!(RealFormat::default(), RealFormat::Plain);
    }

    #[test]
    fn test_quote_chars() {
        assert_eq!(QuoteStyle::Double.as_char(), '"');
        assert_eq!(QuoteStyle::Single.as_char(), '\'');
    }

    #[test]
    fn test_int_format_hex() {
        assert!(!IntFormat::Decimal.is_hex());
        assert!(IntFormat::LowerHex.is_hex());
        assert!(IntFormat::UpperHex.is_hex());
    }
}
