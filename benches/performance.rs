// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for enharmonic
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Spelling resolution throughput
//! - Chord and scale construction
//! - The inversion cycle

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use enharmonic::{
    Accidental, Chord, ChordProgression, ChordType, Letter, NashvilleNumber, NoteType, Scale,
    ScaleType,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark resolving a single chord spelling
fn bench_spelling_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("spelling");

    let cases = [
        ("c_major", NoteType::new(Letter::C, Accidental::Plain), ChordType::Major),
        ("a_sharp_nine", NoteType::new(Letter::A, Accidental::Sharp), ChordType::Nine),
        ("f_flat_thirteen", NoteType::new(Letter::F, Accidental::Flat), ChordType::Thirteen),
    ];

    for (label, root, chord_type) in cases {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &(root, chord_type),
            |b, &(root, chord_type)| {
                b.iter(|| Chord::with_octave(black_box(root), black_box(chord_type), 3))
            },
        );
    }

    group.finish();
}

/// Benchmark constructing every chord type from every single-accidental
/// root (the full catalogue sweep)
fn bench_catalogue_sweep(c: &mut Criterion) {
    c.bench_function("catalogue_sweep", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for letter in Letter::ALL {
                for accidental in [Accidental::Flat, Accidental::Plain, Accidental::Sharp] {
                    let root = NoteType::new(letter, accidental);
                    for chord_type in ChordType::ALL {
                        if Chord::with_octave(root, chord_type, 3).is_ok() {
                            count += 1;
                        }
                    }
                }
            }
            black_box(count)
        })
    });
}

/// Benchmark scale construction with key-signature lookup
fn bench_scale_construction(c: &mut Criterion) {
    let root = NoteType::new(Letter::E, Accidental::Flat);
    c.bench_function("scale_harmonic_minor", |b| {
        b.iter(|| Scale::with_octave(black_box(root), ScaleType::HarmonicMinor, 3))
    });
}

/// Benchmark a full inversion cycle on a seven-note chord
fn bench_inversion_cycle(c: &mut Criterion) {
    let root = NoteType::new(Letter::D, Accidental::Plain);
    c.bench_function("inversion_cycle_13th", |b| {
        b.iter_batched(
            || Chord::with_octave(root, ChordType::Thirteen, 3).unwrap(),
            |mut chord| {
                for _ in 0..7 {
                    chord.invert();
                }
                black_box(chord.inversion_number())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

/// Benchmark seeded walks over the major progression chart
fn bench_progression_walk(c: &mut Criterion) {
    let graph = ChordProgression::major();
    c.bench_function("progression_walk_64", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(42),
            |mut rng| black_box(graph.random_walk(NashvilleNumber::ONE, 64, &mut rng)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_spelling_resolution,
    bench_catalogue_sweep,
    bench_scale_construction,
    bench_inversion_cycle,
    bench_progression_walk
);
criterion_main!(benches);
