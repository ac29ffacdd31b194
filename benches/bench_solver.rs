use criterion::{criterion_group, criterion_main, Criterion};

use optcube::cubie::CubieCube;
use optcube::facelet::FaceCube;
use optcube::moves::Move::*;

fn cc_apply_moves() {
    let cc = CubieCube::default();
    let _ = cc.apply_moves(&[R, U, R3, U3]);
}

fn cc_coordinates() {
    let mut cc = CubieCube::default();
    cc.set_twist(1000);
    cc.set_flip(1024);
    cc.set_slice_sorted(1701);
    cc.set_corners(3935);
    let _ = cc.get_twist();
    let _ = cc.get_flip();
    let _ = cc.get_slice_sorted();
    let _ = cc.get_corners();
    let _ = cc.get_udcorners();
}

fn fc_parse() {
    let _ = FaceCube::try_from("RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF").unwrap();
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("CubieCube");
    group.bench_function("apply_moves", |b| b.iter(cc_apply_moves));
    group.bench_function("coordinates", |b| b.iter(cc_coordinates));
    group.finish();
}

fn bench_facelet(c: &mut Criterion) {
    c.bench_function("FaceCube parse", |b| b.iter(fc_parse));
}

criterion_group!(benches, bench_moves, bench_facelet);
criterion_main!(benches);
