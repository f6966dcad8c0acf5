//! The [`confit!`](crate::confit) literal-construction macro.

/// Builds a [`Node`](crate::Node) tree from a literal, with canonical
/// formatting styles.
///
/// # Examples
///
/// ```rust
/// use confit::confit;
///
/// let tree = confit!({
///     "name": "svc",
///     "port": 8080,
///     "tags": ["a", "b"],
///     "extra": null
/// });
/// assert_eq!(tree.find("port", false).and_then(|n| n.as_i64()), Some(8080));
/// ```
#[macro_export]
macro_rules! confit {
    // Handle null
    (null) => {
        $crate::Node::null()
    };

    // Handle true
    (true) => {
        $crate::Node::boolean(true)
    };

    // Handle false
    (false) => {
        $crate::Node::boolean(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Node::array()
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {{
        let mut array = $crate::Node::array();
        $(
            let _ = array.push($crate::confit!($elem));
        )*
        array
    }};

    // Handle empty object
    ({}) => {
        $crate::Node::object()
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Node::object();
        $(
            let _ = object.push($crate::confit!($value).with_name($key));
        )*
        object
    }};

    // Fallback: any expression convertible into a Value
    ($other:expr) => {
        $crate::Node::new($crate::Value::from($other))
    };
}

#[cfg(test)]
mod tests {
    use crate::{Constant, Node, Value};

    #[test]
    fn test_confit_macro_primitives() {
        assert_eq!(confit!(null), Node::null());
        assert_eq!(confit!(true), Node::boolean(true));
        assert_eq!(confit!(false), Node::boolean(false));
        assert_eq!(confit!(42), Node::integer(42));
        assert_eq!(confit!(3.5), Node::real(3.5));
        assert_eq!(confit!("hello"), Node::string("hello"));
    }

    #[test]
    fn test_confit_macro_arrays() {
        assert_eq!(confit!([]), Node::array());

        let arr = confit!([1, 2, 3]);
        let items = arr.members().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Node::integer(1));
        assert_eq!(items[2], Node::integer(3));
    }

    #[test]
    fn test_confit_macro_objects() {
        assert_eq!(confit!({}), Node::object());

        let obj = confit!({
            "name": "Alice",
            "age": 30
        });

        let members = obj.members().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(obj.find("name", false).and_then(|n| n.as_str()), Some("Alice"));
        assert_eq!(obj.find("age", false).and_then(|n| n.as_i64()), Some(30));
    }

    #[test]
    fn test_confit_macro_nesting() {
        let tree = confit!({
            "outer": {
                "inner": [1, null, "x"]
            }
        });

        let inner = tree.find("inner", true).unwrap();
        assert_eq!(inner.len(), 3);
        assert_eq!(
            inner.members().unwrap()[1].value,
            Value::Constant(Constant::Null)
        );
    }

    #[test]
    fn test_macro_nodes_match_construction_api() {
        let mut built = Node::object();
        built.add("a", 1i64);
        built.add("b", "x");

        let via_macro = confit!({"a": 1, "b": "x"});
        assert_eq!(built, via_macro);
    }
}
