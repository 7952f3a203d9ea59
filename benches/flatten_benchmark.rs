use criterion::{black_box, criterion_group, criterion_main, Criterion};
use locheck::{flatten_keys, DEFAULT_SEPARATOR};
use serde_json::{json, Map, Value};

/// Build a document with `width` keys per level nested `depth` levels deep
fn synthetic_document(width: usize, depth: usize) -> Value {
    let mut level: Value = json!("leaf");
    for d in 0..depth {
        let mut map = Map::new();
        for w in 0..width {
            map.insert(format!("key_{}_{}", d, w), level.clone());
        }
        level = Value::Object(map);
    }
    level
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    // Wide: a single level with many keys, the shape of a mature locale file
    group.bench_function("wide_shallow", |b| {
        let doc = synthetic_document(500, 1);
        b.iter(|| flatten_keys(black_box(&doc), DEFAULT_SEPARATOR));
    });

    // Deep: few keys per level, nesting well past typical locale depth
    group.bench_function("narrow_deep", |b| {
        let doc = synthetic_document(2, 12);
        b.iter(|| flatten_keys(black_box(&doc), DEFAULT_SEPARATOR));
    });

    // Balanced: the shape of the original app's screens (sections of sections)
    group.bench_function("balanced", |b| {
        let doc = synthetic_document(10, 3);
        b.iter(|| flatten_keys(black_box(&doc), DEFAULT_SEPARATOR));
    });

    group.finish();
}

criterion_group!(benches, bench_flatten);
criterion_main!(benches);
