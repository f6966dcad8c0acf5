//! Build a document from scratch with the construction API and the
//! `confit!` macro.
//!
//! Run with: `cargo run --example build_tree`

use confit::{confit, to_string, Node};

fn main() -> confit::Result<()> {
    // piece by piece
    let mut root = Node::object();
    root.add("name", "worker");
    root.add("threads", 8i64);
    let hosts = root.add("hosts", Node::array().value).expect("root is an object");
    hosts.push(Node::string("a.internal"));
    hosts.push(Node::string("b.internal"));

    println!("{}", to_string(&root)?);

    // or as one literal
    let tree = confit!({
        "name": "worker",
        "threads": 8,
        "hosts": ["a.internal", "b.internal"]
    });
    println!("{}", to_string(&tree)?);
    Ok(())
}
