#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Benchmarks: urlparts parse/set/remove, with the url crate's parser as a baseline
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use url::Url as UrlCrate;
use urlparts::{KeyValueMap, Part};

const SIMPLE: &str = "http://example.com/";
const COMPLEX: &str = "https://www.test.com/path/to/resource?query=value&key=data&flag#section=2";

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");

    group.bench_function("urlparts", |b| {
        b.iter(|| urlparts::parse(black_box(SIMPLE)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(SIMPLE)).unwrap());
    });

    group.finish();
}

fn bench_parse_complex_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_complex");

    group.bench_function("urlparts", |b| {
        b.iter(|| urlparts::parse(black_box(COMPLEX)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(COMPLEX)).unwrap());
    });

    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let parsed = urlparts::parse(COMPLEX);

    c.bench_function("rebuild_complex", |b| {
        b.iter(|| urlparts::build(black_box(&parsed)));
    });
}

fn bench_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit");
    let entries = KeyValueMap::from([("query", "other"), ("page", "2")]);

    group.bench_function("set_query", |b| {
        b.iter(|| urlparts::set(black_box(COMPLEX), Part::Query, entries.clone()));
    });

    group.bench_function("set_host", |b| {
        b.iter(|| urlparts::set(black_box(COMPLEX), Part::Host, "cdn.test.com"));
    });

    group.bench_function("remove_key", |b| {
        b.iter(|| urlparts::remove(black_box(COMPLEX), Part::Query, Some(&["key"])));
    });

    group.bench_function("remove_part", |b| {
        b.iter(|| urlparts::remove(black_box(COMPLEX), Part::Hash, None));
    });

    group.finish();
}

fn bench_key_value_map(c: &mut Criterion) {
    let fragment = "a=1&b=2&c=3&d&e=5&f=6&g=7&h&i=9&j=10";

    c.bench_function("key_value_map_parse", |b| {
        b.iter(|| KeyValueMap::parse(black_box(fragment)));
    });

    let map = KeyValueMap::parse(fragment);
    c.bench_function("key_value_map_serialize", |b| {
        b.iter(|| black_box(&map).serialize('?'));
    });
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_complex_all,
    bench_rebuild,
    bench_edit,
    bench_key_value_map
);

criterion_main!(benches);
