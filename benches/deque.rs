use criterion::{Criterion, black_box, criterion_group, criterion_main};
use elastic_string::{DynString, StringDeque};
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 4096u32;
    {
        let mut group = c.benchmark_group("VecDeque vs DynString (Push Both Ends 4096)");
        group.bench_function("std::collections::VecDeque<u32>", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i));
                    d.push_back(black_box(i));
                }
                d
            })
        });

        group.bench_function("DynString", |b| {
            b.iter(|| {
                let mut d = DynString::new();
                for i in 0..n {
                    d.push_front(black_box(i)).unwrap();
                    d.push_back(black_box(i)).unwrap();
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs DynString (Pop Front 4096)");
        let d_std: VecDeque<u32> = (0..n).collect();
        let d_dyn: DynString = (0..n).collect();

        group.bench_function("std::collections::VecDeque<u32>", |b| {
            b.iter(|| {
                let mut d = d_std.clone();
                while let Some(code) = d.pop_front() {
                    black_box(code);
                }
            })
        });

        group.bench_function("DynString", |b| {
            b.iter(|| {
                let mut d = d_dyn.clone();
                while let Some(code) = d.pop_front() {
                    black_box(code);
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs DynString (Get 4096)");
        let d_std: VecDeque<u32> = (0..n).collect();
        let d_dyn: DynString = (0..n).collect();

        group.bench_function("std::collections::VecDeque<u32>", |b| {
            b.iter(|| {
                for i in 0..n as usize {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("DynString", |b| {
            b.iter(|| {
                let codes = d_dyn.as_codes();
                for i in 0..n as usize {
                    black_box(codes.get(black_box(i)));
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);
