use confit::{confit, parse, to_string, Node};

#[test]
fn test_macro_builds_writable_tree() {
    let tree = confit!({
        "name": "svc",
        "port": 8080,
        "ratio": 0.5,
        "debug": false,
        "extra": null,
        "tags": ["a", "b", "c"]
    });

    let text = to_string(&tree).unwrap();
    let back = parse(&text).unwrap();
    assert!(tree.value_eq(&back));
    assert_eq!(back.find("tags", false).map(|n| n.len()), Some(3));
}

#[test]
fn test_macro_matches_construction_api() {
    let via_macro = confit!({
        "a": 1,
        "nested": { "b": true }
    });

    let mut built = Node::object();
    built.add("a", 1i64);
    let nested = built.add("nested", Node::object().value).unwrap();
    nested.add("b", true);

    assert_eq!(via_macro, built);
}

#[test]
fn test_macro_trailing_commas() {
    let tree = confit!({
        "a": 1,
        "b": [1, 2,],
    });
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_macro_empty_collections() {
    assert!(confit!({}).is_object());
    assert!(confit!([]).is_array());
    assert!(confit!({}).is_empty());
}
