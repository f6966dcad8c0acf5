use criterion::{black_box, criterion_group, criterion_main, Criterion};
use confit::{parse, to_string, Node};

const CONFIG: &str = r#"{
    // service identity
    name: "billing",
    replicas = 3
    limits: {
        cpu: 0.5,
        memory: 0x200,
        burst: 1.5e3
    },
    hosts: ["a.internal", "b.internal", "c.internal"],
    flags: {
        canary: false,
        verbose: true,
        sample_rate: .25
    },
    notes: `rolled out
in three waves`
}"#;

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_config", |b| {
        b.iter(|| parse(black_box(CONFIG)).unwrap())
    });
}

fn benchmark_write(c: &mut Criterion) {
    let tree = parse(CONFIG).unwrap();
    c.bench_function("write_config", |b| {
        b.iter(|| to_string(black_box(&tree)).unwrap())
    });
}

fn benchmark_roundtrip(c: &mut Criterion) {
    c.bench_function("roundtrip_config", |b| {
        b.iter(|| {
            let tree = parse(black_box(CONFIG)).unwrap();
            to_string(&tree).unwrap()
        })
    });
}

fn benchmark_build_and_write(c: &mut Criterion) {
    c.bench_function("build_and_write", |b| {
        b.iter(|| {
            let mut root = Node::object();
            for i in 0..32i64 {
                root.add(format!("key_{}", i), i);
            }
            to_string(&root).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_write,
    benchmark_roundtrip,
    benchmark_build_and_write
);
criterion_main!(benches);
