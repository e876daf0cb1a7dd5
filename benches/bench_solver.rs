use criterion::{criterion_group, criterion_main, Criterion};

use rubik_solver::cubie::CubieCube;
use rubik_solver::facelet::FaceCube;
use rubik_solver::moves::Move::*;
use rubik_solver::solver::solve;

fn cc_apply_moves() {
    let cc = CubieCube::default();
    let _ = cc.apply_moves(&[R, R, R, U, U, U]);
}

fn cc_multi_moves() {
    let mut cc = CubieCube::default();
    cc.multiply_moves(&[R, R, R, U, U, U]);
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("CubieCube Moves");
    group.bench_function("multiply_moves", |b| b.iter(cc_multi_moves));
    group.bench_function("apply_moves", |b| b.iter(cc_apply_moves));
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    // A fixed, arbitrary 20-quarter-turn scramble, chosen for benchmark
    // stability rather than any particular difficulty.
    let scramble = [
        R, U, U, F, D, D, L, B, B, R, R, U, F, F, D, L, L, B, U, R, U, F, D, L, B, U, R, F, D, L,
    ];
    let cube = CubieCube::default().apply_moves(&scramble);
    let cubestring = FaceCube::from(&cube).to_flat_string();

    c.bench_function("Solver", |b| {
        b.iter(|| solve(&cubestring, 20, 3.0).unwrap())
    });
}

criterion_group!(benches, bench_solver, bench_moves);
criterion_main!(benches);
