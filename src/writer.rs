//! Style-preserving writer.
//!
//! Walks a tree depth-first and re-emits text using each node's stored
//! formatting metadata: names come back in their original quoting, values
//! behind their original operator, numbers in their original digit
//! grouping, and members separated the way the source separated them.
//! Indentation grows by four columns per nesting level; bare roots
//! suppress their braces and unindent one level.

use crate::style::{AssignStyle, DelimStyle, IntFormat, NameStyle, RealDigits, RealFormat};
use crate::value::{Constant, Node, Value};
use std::io::{self, Write};

/// Writes `width` spaces; negative widths write nothing.
fn pad<W: Write>(w: &mut W, width: i32) -> io::Result<()> {
    for _ in 0..width.max(0) {
        w.write_all(b" ")?;
    }
    Ok(())
}

/// Serializes a whole tree. Object roots open a brace block unless they
/// are bare configs; array and scalar roots render as a single line.
pub(crate) fn write_document<W: Write>(w: &mut W, node: &Node, indent: i32) -> io::Result<()> {
    match &node.value {
        Value::Object { members, bare } => write_object(w, members, *bare, indent, true),
        _ => {
            write_payload(w, node, indent)?;
            w.write_all(b"\n")
        }
    }
}

fn write_object<W: Write>(
    w: &mut W,
    members: &[Node],
    bare: bool,
    mut indent: i32,
    at_margin: bool,
) -> io::Result<()> {
    if !bare {
        // the opening brace of a member value sits right after its
        // operator; only a root block pads out to the base indent
        if at_margin {
            pad(w, indent - 4)?;
        }
        w.write_all(b"{\n")?;
    } else {
        indent -= 4;
    }

    let count = members.len();
    for (i, member) in members.iter().enumerate() {
        write_member(w, member, indent, i + 1 == count)?;
    }

    pad(w, indent)?;
    if indent > 0 {
        w.write_all(b"}")?;
    } else if !bare {
        w.write_all(b"}\n")?;
    }
    Ok(())
}

/// One object member: indentation, name, assignment operator, payload,
/// delimiter.
fn write_member<W: Write>(w: &mut W, node: &Node, indent: i32, is_last: bool) -> io::Result<()> {
    let indent = indent + 4;
    pad(w, indent)?;

    if let Some(name) = &node.name {
        match node.name_style {
            NameStyle::DoubleQuoted => write!(w, "\"{}\"", name)?,
            NameStyle::SingleQuoted => write!(w, "'{}'", name)?,
            NameStyle::Unquoted => w.write_all(name.as_bytes())?,
        }

        match node.assign_style {
            AssignStyle::Colon => w.write_all(b": ")?,
            AssignStyle::Equals => {
                pad(w, i32::from(node.assign_padding).max(1))?;
                w.write_all(b"= ")?;
            }
            AssignStyle::Line => {
                pad(w, i32::from(node.assign_padding).max(1))?;
                w.write_all(b"| ")?;
            }
        }
    }

    write_payload(w, node, indent)?;

    match node.delim_style {
        DelimStyle::Newline => w.write_all(b"\n"),
        DelimStyle::Line => {
            pad(w, i32::from(node.delim_padding))?;
            w.write_all(b"|\n")
        }
        DelimStyle::Comma => {
            if is_last {
                w.write_all(b"\n")
            } else {
                w.write_all(b",\n")
            }
        }
    }
}

/// The value payload alone, without name or delimiter.
fn write_payload<W: Write>(w: &mut W, node: &Node, indent: i32) -> io::Result<()> {
    match &node.value {
        Value::String { text, quote } => {
            let q = quote.as_char() as u8;
            w.write_all(&[q])?;
            w.write_all(text.as_bytes())?;
            w.write_all(&[q])
        }
        Value::MultilineString(text) => {
            w.write_all(b"`")?;
            w.write_all(text.as_bytes())?;
            w.write_all(b"`")
        }
        Value::Array(items) => {
            w.write_all(b"[")?;
            let count = items.len();
            for (j, item) in items.iter().enumerate() {
                match &item.value {
                    Value::Object { members, .. } => {
                        // container elements open their own block at a
                        // fresh base indent
                        write_object(w, members, false, 4, false)?;
                    }
                    _ => write_payload(w, item, indent)?,
                }
                if j + 1 < count {
                    w.write_all(b", ")?;
                }
            }
            w.write_all(b"]")
        }
        Value::Object { members, bare } => write_object(w, members, *bare, indent, false),
        Value::Integer { value, format } => match format {
            IntFormat::Decimal => write!(w, "{}", value),
            IntFormat::LowerHex => write!(w, "0x{:x}", value),
            IntFormat::UpperHex => write!(w, "0x{:X}", value),
        },
        Value::Real { value, format } => write_real(w, *value, format),
        Value::Constant(Constant::True) => w.write_all(b"true"),
        Value::Constant(Constant::False) => w.write_all(b"false"),
        Value::Constant(Constant::Null) => w.write_all(b"null"),
    }
}

fn write_real<W: Write>(w: &mut W, value: f64, format: &RealFormat) -> io::Result<()> {
    match format {
        RealFormat::Nan => w.write_all(b"NaN"),
        RealFormat::NegNan => w.write_all(b"-NaN"),
        RealFormat::Infinity => w.write_all(b"Infinity"),
        RealFormat::NegInfinity => w.write_all(b"-Infinity"),
        RealFormat::Digits(digits) => write_real_digits(w, value, digits),
        RealFormat::Exponent {
            digits,
            exponent,
            negative,
            explicit_plus,
        } => {
            write_real_digits(w, value, digits)?;
            w.write_all(b"e")?;
            if *negative {
                w.write_all(b"-")?;
            } else if *explicit_plus {
                w.write_all(b"+")?;
            }
            write!(w, "{}", exponent)
        }
        RealFormat::Plain => {
            if value.is_nan() {
                w.write_all(b"NaN")
            } else if value == f64::INFINITY {
                w.write_all(b"Infinity")
            } else if value == f64::NEG_INFINITY {
                w.write_all(b"-Infinity")
            } else if value.fract() == 0.0 {
                // keep the decimal point so the text re-parses as a real
                write!(w, "{:.1}", value)
            } else {
                write!(w, "{}", value)
            }
        }
    }
}

/// Reconstructs a real's digit grouping from the stored fields: sign,
/// integer part, decimal point, leading-zero run, fraction digits.
fn write_real_digits<W: Write>(w: &mut W, value: f64, digits: &RealDigits) -> io::Result<()> {
    if value.is_sign_negative() {
        w.write_all(b"-")?;
    }
    if digits.lead_digit {
        write!(w, "{}", digits.integer_part)?;
    }
    w.write_all(b".")?;
    for _ in 0..digits.leading_zeros {
        w.write_all(b"0")?;
    }
    write!(w, "{}", digits.fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(node: &Node) -> String {
        let mut buf = Vec::new();
        write_document(&mut buf, node, 0).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn reparse_render(source: &str) -> String {
        let tree = crate::parse(source).unwrap();
        render(&tree)
    }

    #[test]
    fn test_canonical_object_layout() {
        let mut root = Node::object();
        root.add("a", 1i64);
        root.add("b", "two");
        assert_eq!(render(&root), "{\n    \"a\": 1,\n    \"b\": \"two\"\n}\n");
    }

    #[test]
    fn test_bare_root_suppresses_braces() {
        let out = reparse_render("a: 1\nb: 2");
        assert_eq!(out, "a: 1\nb: 2\n");
    }

    #[test]
    fn test_nested_indentation() {
        let mut root = Node::object();
        let inner = root.add("inner", Node::object().value).unwrap();
        inner.add("x", 1i64);
        assert_eq!(
            render(&root),
            "{\n    \"inner\": {\n        \"x\": 1\n    }\n}\n"
        );
    }

    #[test]
    fn test_array_renders_inline() {
        let mut root = Node::object();
        let arr = root.add("xs", Node::array().value).unwrap();
        arr.push(Node::integer(1));
        arr.push(Node::integer(2));
        arr.push(Node::string("three"));
        assert_eq!(
            render(&root),
            "{\n    \"xs\": [1, 2, \"three\"]\n}\n"
        );
    }

    #[test]
    fn test_root_array_is_one_line() {
        let out = reparse_render("[1, 2, 3]");
        assert_eq!(out, "[1, 2, 3]\n");
    }

    #[test]
    fn test_quote_styles_survive() {
        let out = reparse_render("{a: \"dq\", b: 'sq', c: `tick`}");
        assert!(out.contains("\"dq\""));
        assert!(out.contains("'sq'"));
        assert!(out.contains("`tick`"));
    }

    #[test]
    fn test_name_styles_survive() {
        let out = reparse_render("{\"a\": 1, 'b': 2, c: 3}");
        assert!(out.contains("\"a\": 1"));
        assert!(out.contains("'b': 2"));
        assert!(out.contains("c: 3"));
    }

    #[test]
    fn test_assign_styles_survive() {
        let out = reparse_render("{a = 1, b: 2, c | 3}");
        assert!(out.contains("a = 1"));
        assert!(out.contains("b: 2"));
        assert!(out.contains("c | 3"));
    }

    #[test]
    fn test_hex_case_survives() {
        assert_eq!(reparse_render("v: 0x1F"), "v: 0x1F\n");
        assert_eq!(reparse_render("v: 0x1f"), "v: 0x1f\n");
    }

    #[test]
    fn test_real_digit_grouping_survives() {
        assert_eq!(reparse_render("v: -0.00012"), "v: -0.00012\n");
        assert_eq!(reparse_render("v: .5"), "v: .5\n");
        assert_eq!(reparse_render("v: 5."), "v: 5.0\n");
        assert_eq!(reparse_render("v: 0.00"), "v: 0.00\n");
        assert_eq!(reparse_render("v: 1.5e3"), "v: 1.5e3\n");
        assert_eq!(reparse_render("v: -1.5e-3"), "v: -1.5e-3\n");
        assert_eq!(reparse_render("v: 2.5e+2"), "v: 2.5e+2\n");
    }

    #[test]
    fn test_keyword_reals_survive() {
        assert_eq!(reparse_render("v: NaN"), "v: NaN\n");
        assert_eq!(reparse_render("v: -NaN"), "v: -NaN\n");
        assert_eq!(reparse_render("v: Infinity"), "v: Infinity\n");
        assert_eq!(reparse_render("v: -Infinity"), "v: -Infinity\n");
    }

    #[test]
    fn test_plain_real_keeps_decimal_point() {
        assert_eq!(render(&Node::real(1.0)), "1.0\n");
        assert_eq!(render(&Node::real(2.5)), "2.5\n");
        assert_eq!(render(&Node::real(f64::NAN)), "NaN\n");
        assert_eq!(render(&Node::real(f64::INFINITY)), "Infinity\n");
    }

    #[test]
    fn test_last_comma_member_omits_comma() {
        let out = reparse_render("{a: 1, b: 2}");
        assert!(out.contains("\n    a: 1,\n"));
        assert!(out.contains("\n    b: 2\n"));
    }

    #[test]
    fn test_line_delimiter_replayed() {
        let out = reparse_render("{a|1|b|2|}");
        assert!(out.contains("a | 1|\n"));
        assert!(out.contains("b | 2|\n"));
    }

    #[test]
    fn test_empty_containers_render() {
        assert_eq!(render(&Node::object()), "{\n}\n");
        assert_eq!(render(&Node::array()), "[]\n");
    }

    #[test]
    fn test_deep_nesting_keeps_braces_on_the_operator_line() {
        let out = reparse_render("{a: {b: {c: 1}}}");
        assert_eq!(
            out,
            "{\n    a: {\n        b: {\n            c: 1\n        }\n    }\n}\n"
        );
    }

    #[test]
    fn test_object_element_inside_array() {
        let out = reparse_render("{xs: [{a: 1}, 2]}");
        let back = crate::parse(&out).unwrap();
        let xs = back.find("xs", false).unwrap();
        assert_eq!(xs.len(), 2);
        assert_eq!(
            xs.members().unwrap()[0]
                .find("a", false)
                .and_then(|n| n.as_i64()),
            Some(1)
        );
    }
}
