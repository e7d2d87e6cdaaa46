use criterion::{Criterion, black_box, criterion_group, criterion_main};
use elastic_string::DynString;

fn bench_string(c: &mut Criterion) {
    let n = 10_000u32;
    {
        let mut group = c.benchmark_group("Vec vs DynString (Append 10k)");
        group.bench_function("std::vec::Vec<u32>", |b| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.push(black_box(i));
                }
                v
            })
        });

        group.bench_function("DynString", |b| {
            b.iter(|| {
                let mut s = DynString::new();
                for i in 0..n {
                    s.append(black_box(i)).unwrap();
                }
                s
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Vec vs DynString (Prepend 10k)");
        group.bench_function("std::vec::Vec<u32> insert(0)", |b| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.insert(0, black_box(i));
                }
                v
            })
        });

        group.bench_function("DynString", |b| {
            b.iter(|| {
                let mut s = DynString::new();
                for i in 0..n {
                    s.prepend(black_box(i)).unwrap();
                }
                s
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Vec vs DynString (Insert Middle 1k)");
        group.bench_function("std::vec::Vec<u32>", |b| {
            b.iter(|| {
                let mut v: Vec<u32> = (0..1000).collect();
                for i in 0..1000u32 {
                    let mid = v.len() / 2;
                    v.insert(mid, black_box(i));
                }
                v
            })
        });

        group.bench_function("DynString", |b| {
            b.iter(|| {
                let mut s: DynString = (0..1000u32).collect();
                for i in 0..1000u32 {
                    let mid = (s.len() / 2) as isize;
                    s.insert_at(mid, black_box(i)).unwrap();
                }
                s
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("DynString (Freeze 10k)");
        let source: DynString = (0..n).collect();
        group.bench_function("freeze", |b| {
            b.iter(|| black_box(source.clone()).freeze().unwrap())
        });
        group.finish();
    }
}

criterion_group!(benches, bench_string);
criterion_main!(benches);
