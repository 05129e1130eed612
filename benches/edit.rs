use std::hint::black_box;

use coverset::{CoverSet, Identity, Segment, Stepwise};
use criterion::{criterion_group, criterion_main, Criterion};

/// linear multiplier for work done by benchmarks
const REPEAT: i64 = 120;

fn seg(start: i64, end: i64) -> Segment<i64> {
	Segment::new(start, end).unwrap()
}

fn bench_insert_disjoint(c: &mut Criterion) {
	c.bench_function("insert_disjoint", |b| {
		b.iter(|| {
			let mut set = CoverSet::new();
			for i in 0..REPEAT {
				set.insert(black_box(seg(10 * i, 10 * i + 4)));
			}
			set
		})
	});
}

fn bench_insert_coalescing(c: &mut Criterion) {
	c.bench_function("insert_coalescing", |b| {
		b.iter(|| {
			let mut set = CoverSet::new();
			for i in 0..REPEAT / 2 {
				set.insert(black_box(seg(10 * i, 10 * i + 4)));
				set.insert(black_box(seg(10 * i + 4, 10 * i + 10)));
			}
			set
		})
	});
}

fn bench_insert_bridging(c: &mut Criterion) {
	c.bench_function("insert_bridging", |b| {
		b.iter(|| {
			let mut set = CoverSet::new();
			for i in 0..REPEAT {
				set.insert(seg(10 * i, 10 * i + 4));
			}
			set.insert(black_box(seg(0, 10 * REPEAT)));
			set
		})
	});
}

fn bench_remove_splitting(c: &mut Criterion) {
	c.bench_function("remove_splitting", |b| {
		b.iter(|| {
			let mut set = CoverSet::from_slice([seg(0, 10 * REPEAT)]);
			for i in 0..REPEAT {
				set.remove(black_box(seg(10 * i + 2, 10 * i + 4)), &Identity);
			}
			set
		})
	});
}

fn bench_remove_stepwise(c: &mut Criterion) {
	c.bench_function("remove_stepwise", |b| {
		b.iter(|| {
			let mut set = CoverSet::from_slice([seg(0, 10 * REPEAT)]);
			for i in 0..REPEAT {
				set.remove(black_box(seg(10 * i + 2, 10 * i + 4)), &Stepwise);
			}
			set
		})
	});
}

fn bench_remove_audited(c: &mut Criterion) {
	c.bench_function("remove_audited", |b| {
		b.iter(|| {
			let mut set = CoverSet::from_slice([seg(0, 10 * REPEAT)]);
			set.set_auditing(true);
			for i in 0..REPEAT {
				set.remove(black_box(seg(10 * i + 2, 10 * i + 4)), &Identity);
			}
			set
		})
	});
}

fn bench_contains_point(c: &mut Criterion) {
	let mut set = CoverSet::new();
	for i in 0..REPEAT {
		set.insert(seg(10 * i, 10 * i + 4));
	}

	c.bench_function("contains_point", |b| {
		b.iter(|| {
			let mut covered = 0;
			for point in 0..10 * REPEAT {
				if set.contains_point(black_box(point)) {
					covered += 1;
				}
			}
			covered
		})
	});
}

criterion_group!(
	benches,
	bench_insert_disjoint,
	bench_insert_coalescing,
	bench_insert_bridging,
	bench_remove_splitting,
	bench_remove_stepwise,
	bench_remove_audited,
	bench_contains_point,
);
criterion_main!(benches);
