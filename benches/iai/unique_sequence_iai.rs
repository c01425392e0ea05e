//! IAI-Callgrind benchmark for UniqueSequence.
//!
//! Measures instruction counts for construction, the tolerant and strict
//! moves, and slot reuse through remove/add cycles.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;
use unique_sequence::UniqueSequence;

fn setup_vec_1000() -> Vec<u32> {
    (0..1000).collect()
}

fn setup_sequence_1000() -> UniqueSequence<u32> {
    (0..1000).collect()
}

#[library_benchmark]
#[bench::with_setup(setup_vec_1000())]
fn add_1000(elements: Vec<u32>) -> UniqueSequence<u32> {
    let mut sequence = UniqueSequence::new();
    for element in black_box(elements) {
        sequence.add(element);
    }
    black_box(sequence)
}

#[library_benchmark]
#[bench::with_setup(setup_vec_1000())]
fn collect_with_duplicates_1000(elements: Vec<u32>) -> UniqueSequence<u32> {
    black_box(
        black_box(elements)
            .into_iter()
            .chain(0..1000)
            .collect::<UniqueSequence<u32>>(),
    )
}

#[library_benchmark]
#[bench::with_setup(setup_sequence_1000())]
fn move_first_1000(mut sequence: UniqueSequence<u32>) -> UniqueSequence<u32> {
    for value in (0..1000).rev() {
        sequence.move_first(black_box(value));
    }
    black_box(sequence)
}

#[library_benchmark]
#[bench::with_setup(setup_sequence_1000())]
fn move_before_1000(mut sequence: UniqueSequence<u32>) -> UniqueSequence<u32> {
    for value in 1..1000 {
        let _ = sequence.move_before(black_box(&value), black_box(&0));
    }
    black_box(sequence)
}

#[library_benchmark]
#[bench::with_setup(setup_sequence_1000())]
fn remove_add_cycle_1000(mut sequence: UniqueSequence<u32>) -> UniqueSequence<u32> {
    for value in 0..1000 {
        sequence.remove(black_box(&value));
        sequence.add(black_box(value + 1000));
    }
    black_box(sequence)
}

library_benchmark_group!(
    name = unique_sequence_group;
    benchmarks =
        add_1000, collect_with_duplicates_1000,
        move_first_1000, move_before_1000,
        remove_add_cycle_1000
);

main!(library_benchmark_groups = unique_sequence_group);
