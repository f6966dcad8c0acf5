//! Parse a config, change one value, and write it back with the rest of
//! the file's formatting untouched.
//!
//! Run with: `cargo run --example roundtrip`

use confit::{parse, to_string, Value};

fn main() -> confit::Result<()> {
    let source = r#"{
    name: "billing",
    replicas = 3
    limits: {
        cpu: .5,
        memory: 0x200
    },
}"#;

    let mut tree = parse(source)?;

    println!("replicas before: {:?}", tree.find("replicas", false).and_then(|n| n.as_i64()));

    if let Some(replicas) = tree.find_mut("replicas", false) {
        replicas.value = Value::from(5i64);
    }

    // the `=` operator, the hex literal, and the `.5` shape all survive
    println!("{}", to_string(&tree)?);
    Ok(())
}
