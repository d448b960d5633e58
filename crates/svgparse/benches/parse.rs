use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use svgparse::parse;

const SIMPLE_SVG: &str = r#"<svg width="10" height="10"><rect x="1" y="1" width="8" height="8"/></svg>"#;
const HEADER_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<!-- Generator: hand -->
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <style><![CDATA[ path { fill: none; } ]]></style>
  <g id="icon"><path d="M12 2L2 7l10 5 10-5-10-5z"/><text x="4" y="20">label</text></g>
</svg>
"#;

fn large_svg() -> String {
    let mut svg = String::from(r#"<svg viewBox="0 0 1000 1000">"#);
    for i in 0..1000 {
        svg.push_str(&format!(
            r#"<g transform="translate({i} {i})"><circle cx="{i}" cy="5" r="2.5" fill="red"/></g>"#
        ));
    }
    svg.push_str("</svg>");
    svg
}

fn bench_simple(c: &mut Criterion) {
    c.bench_function("svgparse_simple", |b| b.iter(|| parse(black_box(SIMPLE_SVG))));
}

fn bench_header(c: &mut Criterion) {
    c.bench_function("svgparse_header", |b| b.iter(|| parse(black_box(HEADER_SVG))));
}

fn bench_large(c: &mut Criterion) {
    let svg = large_svg();
    c.bench_function("svgparse_large", |b| b.iter(|| parse(black_box(&svg))));
}

criterion_group!(benches, bench_simple, bench_header, bench_large);
criterion_main!(benches);
