//! Benchmarks for legality queries and move application.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::{Color, GameState, Piece, PieceKind, Position};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let start = GameState::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| start.perft(black_box(depth)))
        });
    }

    let kiwipete = GameState::from_fen(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = GameState::new();
    group.bench_function("startpos_all", |b| {
        b.iter(|| black_box(startpos.all_legal_moves()))
    });

    let middlegame = GameState::from_fen(MIDDLEGAME);
    group.bench_function("middlegame_all", |b| {
        b.iter(|| black_box(middlegame.all_legal_moves()))
    });

    let kiwipete = GameState::from_fen(KIWIPETE);
    group.bench_function("kiwipete_all", |b| {
        b.iter(|| black_box(kiwipete.all_legal_moves()))
    });

    let queen: Position = "f3".parse().unwrap();
    group.bench_function("kiwipete_queen", |b| {
        b.iter(|| black_box(kiwipete.legal_moves(black_box(queen))))
    });

    group.bench_function("kiwipete_has_any_move", |b| {
        b.iter(|| black_box(kiwipete.has_any_legal_move(Color::Black)))
    });

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_move");

    let start = GameState::new();
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    let e2: Position = "e2".parse().unwrap();
    let e4: Position = "e4".parse().unwrap();
    group.bench_function("startpos_e4", |b| {
        b.iter(|| {
            let mut state = start.clone();
            state.apply_move(pawn, e2, e4, None).unwrap();
            black_box(state)
        })
    });

    group.bench_function("from_fen_kiwipete", |b| {
        b.iter(|| GameState::try_from_fen(black_box(KIWIPETE)))
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_apply);
criterion_main!(benches);
