use criterion::{black_box, criterion_group, criterion_main, Criterion};
use write_bez::{BezWriter, OutputBuffer, WriteOptions};

fn serialize(c: &mut Criterion) {
    for (name, text) in [
        ("hinted_a", bez_test_data::HINTED_A),
        ("flex", bez_test_data::FLEX),
        ("unhinted_o", bez_test_data::UNHINTED_O),
    ] {
        let glyph = read_bez::read_glyph(text).unwrap();
        c.bench_function(name, |b| {
            b.iter(|| {
                let buffer = OutputBuffer::new(64).unwrap();
                let mut writer = BezWriter::new(buffer, WriteOptions::default());
                writer.write_glyph(black_box(&glyph)).unwrap();
                writer.finish()
            })
        });
    }
}

criterion_group!(benches, serialize);
criterion_main!(benches);
