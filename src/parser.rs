//! Recursive-descent parser.
//!
//! The parser walks a byte buffer with a cursor and builds an owned
//! [`Node`] tree. Document shape is decided at the top: a document whose
//! first significant byte is `{` is a braced object, `[` a top-level
//! array, and anything else a bare key/value config (an implicit object
//! that must not print braces on output).
//!
//! Formatting facts are captured as members are scanned — name quoting,
//! assignment operator and its padding, the delimiter separating each
//! member from the next — and stored on the member node before it is
//! appended to its parent.

use crate::error::{Error, Result};
use crate::style::{AssignStyle, DelimStyle, NameStyle, QuoteStyle};
use crate::value::{Constant, Node, Value};

/// What closes the object scope currently being parsed.
#[derive(Clone, Copy, PartialEq)]
enum Closer {
    Brace,
    /// Bare config scope: terminated by end of input.
    None,
}

pub(crate) struct Parser<'a> {
    buf: &'a [u8],
    pos: usize,
}

/// Parses a whole document from a (comment-stripped) buffer.
pub(crate) fn parse_document(buf: &[u8]) -> Result<Node> {
    let mut parser = Parser { buf, pos: 0 };
    parser.skip_whitespace();

    match parser.peek() {
        None => Err(parser.invalid_value("empty document")),
        Some(b'[') => {
            parser.bump();
            parser.skip_whitespace();
            let items = if parser.peek() == Some(b']') {
                parser.bump();
                Vec::new()
            } else {
                parser.parse_array()?
            };
            Ok(Node::new(Value::Array(items)))
        }
        Some(_) => Ok(Node::new(parser.parse_object()?)),
    }
}

impl<'a> Parser<'a> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.buf.get(self.pos + ahead).copied()
    }

    #[inline]
    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    /// Skips whitespace but stops at a newline, so the delimiter scanner
    /// can tell `,` from an end-of-line separator.
    fn skip_whitespace_same_line(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() && b != b'\n' {
                self.bump();
            } else {
                break;
            }
        }
    }

    /// Line and 1-based column of a byte offset.
    fn position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.buf.len());
        let mut line = 1;
        let mut col = 1;
        for &b in &self.buf[..offset] {
            if b == b'\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    fn invalid_value(&self, msg: &str) -> Error {
        self.invalid_value_at(self.pos, msg)
    }

    fn invalid_value_at(&self, offset: usize, msg: &str) -> Error {
        let (line, col) = self.position(offset);
        Error::invalid_value(line, col, msg)
    }

    fn invalid_name(&self, msg: &str) -> Error {
        self.invalid_name_at(self.pos, msg)
    }

    fn invalid_name_at(&self, offset: usize, msg: &str) -> Error {
        let (line, col) = self.position(offset);
        Error::invalid_name(line, col, msg)
    }

    fn slice_str(&self, start: usize, end: usize) -> Result<&'a str> {
        std::str::from_utf8(&self.buf[start..end])
            .map_err(|_| self.invalid_value_at(start, "invalid UTF-8"))
    }

    /// Parses an object body: `{ … }` when the cursor sits on a brace,
    /// otherwise a bare config scope terminated by end of input.
    fn parse_object(&mut self) -> Result<Value> {
        self.skip_whitespace();

        let closer = if self.peek() == Some(b'{') {
            self.bump();
            Closer::Brace
        } else {
            Closer::None
        };
        let bare = closer == Closer::None;
        let mut members: Vec<Node> = Vec::new();

        loop {
            self.skip_whitespace();

            match self.peek() {
                // End of input terminates any object scope.
                None => return Ok(Value::Object { members, bare }),
                Some(b'}') => {
                    if closer == Closer::Brace {
                        self.bump();
                        return Ok(Value::Object { members, bare });
                    }
                    return Err(self.invalid_value("unexpected '}' in braceless document"));
                }
                Some(b']') => {
                    return Err(self.invalid_value("mismatched ']' closing an object"));
                }
                _ => {}
            }

            let mut node = if self.peek() == Some(b'[') {
                // Array shorthand: a bracketed value in member position
                // becomes a single name-less member.
                let mut node = Node::default();
                node.value = self.parse_value()?;
                node
            } else {
                let mut node = self.parse_member_name()?;
                self.parse_assignment(&mut node)?;
                self.skip_whitespace();
                node.value = self.parse_value()?;
                node
            };

            // Classify the delimiter before the node is appended.
            let delim_start = self.pos;
            self.skip_whitespace_same_line();
            let mut done = false;
            match self.peek() {
                None => {
                    node.delim_style = DelimStyle::Comma;
                    done = true;
                }
                Some(b',') => {
                    node.delim_style = DelimStyle::Comma;
                    self.bump();
                }
                Some(b'\n') => {
                    node.delim_style = DelimStyle::Newline;
                    self.bump();
                }
                Some(b'|') => {
                    node.delim_style = DelimStyle::Line;
                    node.delim_padding = clamp_u8(self.pos - delim_start);
                    self.bump();
                }
                // No explicit delimiter; the next scan decides whether the
                // scope closes or another member follows.
                Some(_) => node.delim_style = DelimStyle::Comma,
            }
            members.push(node);
            if done {
                return Ok(Value::Object { members, bare });
            }

            self.skip_whitespace();
            match self.peek() {
                None => return Ok(Value::Object { members, bare }),
                Some(b'}') => {
                    if closer == Closer::Brace {
                        self.bump();
                    }
                    return Ok(Value::Object { members, bare });
                }
                Some(b']') => {
                    if closer == Closer::Brace {
                        return Err(self.invalid_value("mismatched ']' closing an object"));
                    }
                    return Ok(Value::Object { members, bare });
                }
                Some(_) => continue,
            }
        }
    }

    /// Scans a member name (quoted or bare) into a fresh node.
    fn parse_member_name(&mut self) -> Result<Node> {
        let mut node = Node::default();

        match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                node.name_style = if quote == b'"' {
                    NameStyle::DoubleQuoted
                } else {
                    NameStyle::SingleQuoted
                };
                self.bump();
                let start = self.pos;
                loop {
                    match self.peek() {
                        None => return Err(self.invalid_name("unterminated quoted name")),
                        Some(b) if b == quote => break,
                        Some(b) if b < 0x20 => {
                            return Err(self.invalid_name("control character in member name"))
                        }
                        Some(_) => self.bump(),
                    }
                }
                let name = self.slice_str(start, self.pos)?;
                self.validate_name(name, start)?;
                node.name = Some(name.to_string());
                self.bump(); // closing quote
            }
            Some(b) if b.is_ascii_alphabetic() || b == b'_' || b == b'$' => {
                let start = self.pos;
                self.bump();
                while let Some(b) = self.peek() {
                    if b.is_ascii_alphanumeric() || b == b'_' {
                        self.bump();
                    } else {
                        break;
                    }
                }
                let name = self.slice_str(start, self.pos)?;
                self.validate_name(name, start)?;
                node.name = Some(name.to_string());
                node.name_style = NameStyle::Unquoted;
            }
            Some(b) if b.is_ascii_digit() => {
                return Err(self.invalid_name("member name cannot start with a digit"));
            }
            _ => {
                return Err(self.invalid_value("expected a member name"));
            }
        }

        Ok(node)
    }

    /// Measures the padding before the assignment operator, records the
    /// operator style, and consumes it.
    fn parse_assignment(&mut self, node: &mut Node) -> Result<()> {
        let assign_start = self.pos;
        self.skip_whitespace();
        node.assign_padding = clamp_u8(self.pos - assign_start);

        match self.peek() {
            None => {
                return Err(self.invalid_value("unexpected end of input after member name"))
            }
            Some(b':') => node.assign_style = AssignStyle::Colon,
            Some(b'=') => node.assign_style = AssignStyle::Equals,
            Some(b'|') => node.assign_style = AssignStyle::Line,
            Some(_) => {
                return Err(self.invalid_name("expected ':', '=', or '|' after member name"))
            }
        }
        self.bump();
        Ok(())
    }

    /// Rejects a backslash in a member name unless it opens a permitted
    /// escape or a `\uXXXX` unicode escape.
    fn validate_name(&self, name: &str, at: usize) -> Result<()> {
        let bytes = name.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != b'\\' {
                i += 1;
                continue;
            }
            match bytes.get(i + 1) {
                Some(b'n' | b'r' | b't' | b'b' | b'f' | b'0' | b'/' | b'\\' | b'"' | b'\'') => {
                    i += 2;
                }
                Some(b'u') => {
                    let hex = bytes.get(i + 2..i + 6);
                    let ok = hex.is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit));
                    if !ok {
                        return Err(self
                            .invalid_name_at(at + i, "expected 4 hex digits in unicode escape"));
                    }
                    i += 6;
                }
                _ => {
                    return Err(self.invalid_name_at(at + i, "invalid escape in member name"));
                }
            }
        }
        Ok(())
    }

    /// Dispatches on the lookahead byte to one value form.
    fn parse_value(&mut self) -> Result<Value> {
        match self.peek() {
            None => Err(self.invalid_value("expected a value")),
            Some(quote @ (b'"' | b'\'' | b'`')) => self.parse_string(quote),
            Some(b'[') => {
                self.bump();
                self.skip_whitespace();
                if self.peek() == Some(b']') {
                    self.bump();
                    return Ok(Value::Array(Vec::new()));
                }
                Ok(Value::Array(self.parse_array()?))
            }
            Some(b'{') => self.parse_object(),
            Some(b'-') if self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) => {
                self.parse_number()
            }
            Some(b) if b.is_ascii_alphabetic() || b == b'-' => self.parse_keyword(),
            Some(b) if b.is_ascii_digit() || b == b'+' || b == b'.' => self.parse_number(),
            Some(_) => Err(self.invalid_value("expected a value")),
        }
    }

    /// Array body; the cursor sits on the first element. Consumes the
    /// closing `]`.
    fn parse_array(&mut self) -> Result<Vec<Node>> {
        let mut items: Vec<Node> = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.invalid_value("unterminated array")),
                Some(b']') => {
                    self.bump();
                    return Ok(items);
                }
                _ => {}
            }

            let mut node = Node::default();
            node.value = self.parse_value()?;
            items.push(node);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.bump(),
                Some(b']') => {
                    self.bump();
                    return Ok(items);
                }
                None => return Err(self.invalid_value("unterminated array")),
                Some(_) => return Err(self.invalid_value("expected ',' or ']' in array")),
            }
        }
    }

    /// String of any quote kind; stores the raw inner text without
    /// decoding escapes. A closing quote preceded by a backslash does not
    /// terminate the scan.
    fn parse_string(&mut self, quote: u8) -> Result<Value> {
        self.bump();
        let start = self.pos;

        loop {
            match self.peek() {
                None => return Err(self.invalid_value_at(start - 1, "unterminated string")),
                Some(b) if b == quote && self.buf[self.pos - 1] != b'\\' => break,
                Some(_) => self.bump(),
            }
        }

        let text = self.slice_str(start, self.pos)?.to_string();
        self.bump(); // closing quote

        Ok(if quote == b'`' {
            Value::MultilineString(text)
        } else {
            Value::String {
                text,
                quote: if quote == b'"' {
                    QuoteStyle::Double
                } else {
                    QuoteStyle::Single
                },
            }
        })
    }

    /// Keyword values, matched by literal prefix.
    fn parse_keyword(&mut self) -> Result<Value> {
        let keywords: [(&str, fn() -> Value); 7] = [
            ("true", || Value::Constant(Constant::True)),
            ("false", || Value::Constant(Constant::False)),
            ("null", || Value::Constant(Constant::Null)),
            ("Infinity", || Value::Real {
                value: f64::INFINITY,
                format: crate::style::RealFormat::Infinity,
            }),
            ("-Infinity", || Value::Real {
                value: f64::NEG_INFINITY,
                format: crate::style::RealFormat::NegInfinity,
            }),
            ("NaN", || Value::Real {
                value: f64::NAN,
                format: crate::style::RealFormat::Nan,
            }),
            ("-NaN", || Value::Real {
                value: -f64::NAN,
                format: crate::style::RealFormat::NegNan,
            }),
        ];

        let rest = &self.buf[self.pos..];
        for (keyword, build) in keywords {
            if rest.starts_with(keyword.as_bytes()) {
                self.pos += keyword.len();
                return Ok(build());
            }
        }

        Err(self.invalid_value("unrecognized keyword"))
    }

    fn parse_number(&mut self) -> Result<Value> {
        let (value, end) = crate::number::lex(self.buf, self.pos)
            .map_err(|e| self.invalid_value_at(e.offset, e.msg))?;
        self.pos = end;
        Ok(value)
    }
}

fn clamp_u8(n: usize) -> u8 {
    u8::try_from(n).unwrap_or(u8::MAX)
}
