//! The tagged tree model.
//!
//! A parsed document is a tree of [`Node`]s. Each node couples an optional
//! member name, the formatting metadata describing how the member was
//! written (see [`crate::style`]), and a [`Value`] payload. The writer
//! replays the metadata; every accessor and mutation API here works purely
//! on the payload.
//!
//! ## Core Types
//!
//! - [`Node`]: one entry in the tree (object, array, or scalar) plus its
//!   formatting metadata
//! - [`Value`]: the payload — object, array, string, multiline string,
//!   integer, real, or constant
//! - [`Constant`]: the three keyword values `true`, `false`, `null`
//!
//! ## Usage Patterns
//!
//! ### Querying a parsed tree
//!
//! ```rust
//! let tree = confit::parse("{server: {port: 8080}}").unwrap();
//!
//! let port = tree.find("port", true).and_then(|n| n.as_i64());
//! assert_eq!(port, Some(8080));
//! ```
//!
//! ### Building a tree programmatically
//!
//! ```rust
//! use confit::Node;
//!
//! let mut root = Node::object();
//! root.add("name", "service");
//! root.add("retries", 3i64);
//!
//! let text = confit::to_string(&root).unwrap();
//! let back = confit::parse(&text).unwrap();
//! assert_eq!(back.find("retries", false).and_then(|n| n.as_i64()), Some(3));
//! ```

use crate::error::{Error, Result};
use crate::style::{
    AssignStyle, DelimStyle, IntFormat, NameStyle, QuoteStyle, RealFormat,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The keyword constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Constant {
    True,
    False,
    #[default]
    Null,
}

/// A value payload.
///
/// `Object` and `Array` own their children exclusively; every other
/// variant is a scalar. Strings store their raw source text — escape
/// sequences are formatting, not content, and survive a round trip
/// verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Object {
        members: Vec<Node>,
        /// A bare top-level key/value list with no enclosing braces.
        /// Only meaningful on the root node produced by parsing.
        bare: bool,
    },
    Array(Vec<Node>),
    String {
        text: String,
        quote: QuoteStyle,
    },
    /// A back-tick literal.
    MultilineString(String),
    Integer {
        value: i64,
        format: IntFormat,
    },
    Real {
        value: f64,
        format: RealFormat,
    },
    Constant(Constant),
}

impl Default for Value {
    fn default() -> Self {
        Value::Constant(Constant::Null)
    }
}

/// One entry in the parsed or constructed tree.
///
/// Nodes built through the constructors carry canonical formatting
/// (double-quoted names, colon assignment, comma delimiters); nodes
/// produced by [`crate::parse`] carry whatever the source used.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Node {
    /// Member key, present when this node belongs to an object.
    pub name: Option<String>,
    pub name_style: NameStyle,
    pub assign_style: AssignStyle,
    /// Spaces written before a `=` or `|` assignment operator.
    pub assign_padding: u8,
    pub delim_style: DelimStyle,
    /// Spaces written before a `|` delimiter.
    pub delim_padding: u8,
    pub value: Value,
}

impl Node {
    /// Creates a node from a payload, with canonical formatting.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Node {
            name: None,
            value,
            ..Node::default()
        }
    }

    /// Creates an empty object node.
    #[must_use]
    pub fn object() -> Self {
        Node::new(Value::Object {
            members: Vec::new(),
            bare: false,
        })
    }

    /// Creates an empty array node.
    #[must_use]
    pub fn array() -> Self {
        Node::new(Value::Array(Vec::new()))
    }

    /// Creates a double-quoted string node.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Node::new(Value::String {
            text: text.into(),
            quote: QuoteStyle::Double,
        })
    }

    /// Creates a back-tick multiline string node.
    #[must_use]
    pub fn multiline(text: impl Into<String>) -> Self {
        Node::new(Value::MultilineString(text.into()))
    }

    /// Creates a decimal integer node.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Node::new(Value::Integer {
            value,
            format: IntFormat::Decimal,
        })
    }

    /// Creates a real node with canonical rendering.
    #[must_use]
    pub fn real(value: f64) -> Self {
        Node::new(Value::Real {
            value,
            format: RealFormat::Plain,
        })
    }

    /// Creates a boolean constant node.
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Node::new(Value::Constant(if value {
            Constant::True
        } else {
            Constant::False
        }))
    }

    /// Creates a null constant node.
    #[must_use]
    pub fn null() -> Self {
        Node::new(Value::Constant(Constant::Null))
    }

    /// Sets the member name, builder style.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns `true` if the payload is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self.value, Value::Object { .. })
    }

    /// Returns `true` if the payload is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self.value, Value::Array(_))
    }

    /// Returns `true` if the payload is a single-line or multiline string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(
            self.value,
            Value::String { .. } | Value::MultilineString(_)
        )
    }

    /// Returns `true` if the payload is an integer or real.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self.value, Value::Integer { .. } | Value::Real { .. })
    }

    /// Returns `true` if the payload is the null constant.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.value, Value::Constant(Constant::Null))
    }

    /// If the payload is a boolean constant, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Value::Constant(Constant::True) => Some(true),
            Value::Constant(Constant::False) => Some(false),
            _ => None,
        }
    }

    /// If the payload is an integer, or a real with no fractional part in
    /// `i64` range, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self.value {
            Value::Integer { value, .. } => Some(value),
            Value::Real { value, .. } => {
                if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
                    Some(value as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// If the payload is numeric, returns it as an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            Value::Integer { value, .. } => Some(value as f64),
            Value::Real { value, .. } => Some(value),
            _ => None,
        }
    }

    /// If the payload is a string of either kind, returns its text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Value::String { text, .. } => Some(text),
            Value::MultilineString(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the children of an object or array node.
    #[inline]
    #[must_use]
    pub fn members(&self) -> Option<&[Node]> {
        match &self.value {
            Value::Object { members, .. } => Some(members),
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn members_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.value {
            Value::Object { members, .. } => Some(members),
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the number of children of an object or array node, or 0.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members().map_or(0, <[Node]>::len)
    }

    /// Returns `true` if this node has no children.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds a member by name in an object node.
    ///
    /// Direct members are scanned first, in insertion order. With `deep`
    /// set and no direct match, each member is searched recursively in
    /// pre-order and the first match wins. Arrays are not descended into.
    /// Returns `None` for non-object nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let tree = confit::parse("{a: {x: 1}, b: {x: 2}}").unwrap();
    /// assert!(tree.find("x", false).is_none());
    /// assert_eq!(tree.find("x", true).and_then(|n| n.as_i64()), Some(1));
    /// ```
    #[must_use]
    pub fn find(&self, name: &str, deep: bool) -> Option<&Node> {
        let Value::Object { members, .. } = &self.value else {
            return None;
        };

        for member in members {
            if member.name.as_deref() == Some(name) {
                return Some(member);
            }
        }

        if deep {
            for member in members {
                if let Some(hit) = member.find(name, true) {
                    return Some(hit);
                }
            }
        }

        None
    }

    /// Mutable variant of [`Node::find`].
    #[must_use]
    pub fn find_mut(&mut self, name: &str, deep: bool) -> Option<&mut Node> {
        let Value::Object { members, .. } = &mut self.value else {
            return None;
        };

        if let Some(index) = members
            .iter()
            .position(|m| m.name.as_deref() == Some(name))
        {
            return members.get_mut(index);
        }

        if deep {
            for index in 0..members.len() {
                if members[index].find(name, true).is_some() {
                    return members[index].find_mut(name, true);
                }
            }
        }

        None
    }

    /// Appends a child node to an object or array.
    ///
    /// Returns a reference to the appended node, or `None` if this node
    /// is not a container.
    pub fn push(&mut self, node: Node) -> Option<&mut Node> {
        let members = self.members_mut()?;
        members.push(node);
        members.last_mut()
    }

    /// Appends a named member built from `value`, with canonical styles.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use confit::Node;
    ///
    /// let mut root = Node::object();
    /// root.add("enabled", true);
    /// root.add("port", 8080i64);
    /// assert!(Node::integer(1).add("x", 1i64).is_none());
    /// ```
    pub fn add(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<&mut Node> {
        self.push(Node::new(value.into()).with_name(name))
    }

    /// Inserts a named member at `index`.
    ///
    /// `index` may be anywhere from 0 through the current child count.
    /// Returns `None` for out-of-range indices or non-container nodes.
    pub fn insert_at(
        &mut self,
        index: usize,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<&mut Node> {
        let members = self.members_mut()?;
        if index > members.len() {
            return None;
        }
        members.insert(index, Node::new(value.into()).with_name(name));
        members.get_mut(index)
    }

    /// Re-lexes a string node's text as a numeric literal, replacing the
    /// payload with the parsed Integer or Real.
    ///
    /// Already-numeric nodes are left untouched. Non-string, non-numeric
    /// nodes and unparsable text are an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use confit::Node;
    ///
    /// let mut node = Node::string("1.5e3");
    /// node.coerce_number().unwrap();
    /// assert_eq!(node.as_f64(), Some(1500.0));
    /// ```
    pub fn coerce_number(&mut self) -> Result<()> {
        let text = match &self.value {
            Value::Integer { .. } | Value::Real { .. } => return Ok(()),
            Value::String { text, .. } => text,
            Value::MultilineString(text) => text,
            _ => {
                return Err(Error::invalid_value(
                    1,
                    1,
                    "only string nodes can be coerced to numbers",
                ))
            }
        };

        let trimmed = text.trim();
        let (value, end) = crate::number::lex(trimmed.as_bytes(), 0)
            .map_err(|e| Error::invalid_value(1, e.offset + 1, e.msg))?;
        if end != trimmed.len() {
            return Err(Error::invalid_value(
                1,
                end + 1,
                "trailing characters after numeric literal",
            ));
        }

        self.value = value;
        Ok(())
    }

    /// Compares two trees by structure and scalar values, ignoring all
    /// formatting metadata. NaN reals compare equal to each other.
    #[must_use]
    pub fn value_eq(&self, other: &Node) -> bool {
        if self.name != other.name {
            return false;
        }
        match (&self.value, &other.value) {
            (Value::Object { members: a, .. }, Value::Object { members: b, .. })
            | (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.value_eq(y))
            }
            (Value::String { text: a, .. }, Value::String { text: b, .. }) => a == b,
            (Value::MultilineString(a), Value::MultilineString(b)) => a == b,
            (Value::Integer { value: a, .. }, Value::Integer { value: b, .. }) => a == b,
            (Value::Real { value: a, .. }, Value::Real { value: b, .. }) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (Value::Constant(a), Value::Constant(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Constant(if value {
            Constant::True
        } else {
            Constant::False
        })
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer {
            value: value as i64,
            format: IntFormat::Decimal,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer {
            value,
            format: IntFormat::Decimal,
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real {
            value: value as f64,
            format: RealFormat::Plain,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real {
            value,
            format: RealFormat::Plain,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String {
            text: value.to_string(),
            quote: QuoteStyle::Double,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String {
            text: value,
            quote: QuoteStyle::Double,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Constant(Constant::Null)
    }
}

impl From<Vec<Node>> for Value {
    fn from(items: Vec<Node>) -> Self {
        Value::Array(items)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Object { members, .. } => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for member in members {
                    map.serialize_entry(member.name.as_deref().unwrap_or(""), &member.value)?;
                }
                map.end()
            }
            Value::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&item.value)?;
                }
                seq.end()
            }
            Value::String { text, .. } => serializer.serialize_str(text),
            Value::MultilineString(text) => serializer.serialize_str(text),
            Value::Integer { value, .. } => serializer.serialize_i64(*value),
            Value::Real { value, .. } => serializer.serialize_f64(*value),
            Value::Constant(Constant::True) => serializer.serialize_bool(true),
            Value::Constant(Constant::False) => serializer.serialize_bool(false),
            Value::Constant(Constant::Null) => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any configuration value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::from(value as i64))
                } else {
                    Ok(Value::from(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Constant(Constant::Null))
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Constant(Constant::Null))
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(value) = seq.next_element::<Value>()? {
                    items.push(Node::new(value));
                }
                Ok(Value::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut members = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    members.push(Node::new(value).with_name(key));
                }
                Ok(Value::Object {
                    members,
                    bare: false,
                })
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Node::new(Value::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_are_canonical() {
        let node = Node::string("hi").with_name("greeting");
        assert_eq!(node.name.as_deref(), Some("greeting"));
        assert_eq!(node.name_style, NameStyle::DoubleQuoted);
        assert_eq!(node.assign_style, AssignStyle::Colon);
        assert_eq!(node.delim_style, DelimStyle::Comma);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Node::integer(42).as_i64(), Some(42));
        assert_eq!(Node::integer(42).as_f64(), Some(42.0));
        assert_eq!(Node::real(2.5).as_f64(), Some(2.5));
        assert_eq!(Node::real(42.0).as_i64(), Some(42));
        assert_eq!(Node::real(2.5).as_i64(), None);
        assert_eq!(Node::string("x").as_str(), Some("x"));
        assert_eq!(Node::multiline("x\ny").as_str(), Some("x\ny"));
        assert_eq!(Node::boolean(true).as_bool(), Some(true));
        assert!(Node::null().is_null());
        assert_eq!(Node::string("x").as_i64(), None);
    }

    #[test]
    fn test_add_and_push() {
        let mut root = Node::object();
        root.add("a", 1i64);
        root.add("b", "two");
        assert_eq!(root.len(), 2);
        assert_eq!(root.members().unwrap()[1].name.as_deref(), Some("b"));

        let mut arr = Node::array();
        arr.push(Node::integer(1));
        arr.push(Node::integer(2));
        assert_eq!(arr.len(), 2);

        // scalars are not containers
        assert!(Node::integer(1).push(Node::null()).is_none());
        assert!(Node::string("x").add("k", 1i64).is_none());
    }

    #[test]
    fn test_insert_at_bounds() {
        let mut root = Node::object();
        root.add("a", 1i64);
        root.add("c", 3i64);

        assert!(root.insert_at(1, "b", 2i64).is_some());
        let names: Vec<_> = root
            .members()
            .unwrap()
            .iter()
            .map(|m| m.name.clone().unwrap())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        assert!(root.insert_at(3, "d", 4i64).is_some()); // append position
        assert!(root.insert_at(9, "e", 5i64).is_none()); // out of range
        assert!(Node::null().insert_at(0, "x", 1i64).is_none());
    }

    #[test]
    fn test_find_shallow_and_deep() {
        let mut root = Node::object();
        root.add("a", 1i64);
        let nested = root.add("inner", Value::Object { members: Vec::new(), bare: false }).unwrap();
        nested.add("x", 42i64);

        assert_eq!(root.find("a", false).and_then(|n| n.as_i64()), Some(1));
        assert!(root.find("x", false).is_none());
        assert_eq!(root.find("x", true).and_then(|n| n.as_i64()), Some(42));
        assert!(root.find("missing", true).is_none());

        // non-objects never match
        assert!(Node::array().find("a", true).is_none());
        assert!(Node::integer(1).find("a", false).is_none());
    }

    #[test]
    fn test_find_mut() {
        let mut root = Node::object();
        let inner = root.add("inner", Value::Object { members: Vec::new(), bare: false }).unwrap();
        inner.add("x", 1i64);

        if let Some(hit) = root.find_mut("x", true) {
            hit.value = Value::from(99i64);
        }
        assert_eq!(root.find("x", true).and_then(|n| n.as_i64()), Some(99));
    }

    #[test]
    fn test_coerce_number() {
        let mut node = Node::string("-0.5");
        node.coerce_number().unwrap();
        assert_eq!(node.as_f64(), Some(-0.5));

        let mut node = Node::string("0x1F");
        node.coerce_number().unwrap();
        assert_eq!(node.as_i64(), Some(31));

        let mut node = Node::integer(7);
        node.coerce_number().unwrap();
        assert_eq!(node.as_i64(), Some(7));

        assert!(Node::string("not a number").coerce_number().is_err());
        assert!(Node::object().coerce_number().is_err());
    }

    #[test]
    fn test_value_eq_ignores_formatting() {
        let mut parsed = crate::parse("{a = 1}").unwrap();
        let mut built = Node::object();
        built.add("a", 1i64);
        // parsed root differs in style metadata but not in value
        parsed.name = None;
        assert!(parsed.value_eq(&built));
        assert_ne!(parsed.members().unwrap()[0], built.members().unwrap()[0]);
    }

    #[test]
    fn test_value_eq_nan() {
        let a = Node::real(f64::NAN);
        let b = Node::real(f64::NAN);
        assert!(a.value_eq(&b));
        assert!(!a.value_eq(&Node::real(1.0)));
    }

    #[test]
    fn test_serde_roundtrip_through_json() {
        let tree = crate::parse("{name: \"svc\", port: 8080, ratio: 0.5, on: true, off: null}")
            .unwrap();
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["name"], "svc");
        assert_eq!(json["port"], 8080);
        assert_eq!(json["ratio"], 0.5);
        assert_eq!(json["on"], true);
        assert!(json["off"].is_null());

        // serde_json reorders map keys, so compare by lookup
        let back = Node::new(serde_json::from_value::<Value>(json).unwrap());
        assert_eq!(back.len(), tree.len());
        assert_eq!(back.find("name", false).and_then(|n| n.as_str()), Some("svc"));
        assert_eq!(back.find("port", false).and_then(|n| n.as_i64()), Some(8080));
        assert_eq!(back.find("ratio", false).and_then(|n| n.as_f64()), Some(0.5));
        assert!(back.find("off", false).is_some_and(Node::is_null));
    }

    #[test]
    fn test_display_uses_writer() {
        let mut root = Node::object();
        root.add("a", 1i64);
        let text = root.to_string();
        assert!(text.contains("\"a\": 1"));
    }
}
