use connect4::board::{Board, Mark};
use connect4::rules::apply_move;
use connect4::search::{alpha_beta, minimax, INF};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let empty = Board::new();
    let midgame = midgame_board();

    c.bench_function("alpha beta depth 4 empty board", |b| {
        b.iter(|| alpha_beta(black_box(&empty), 4, -INF, INF, true, Mark::Red))
    });
    c.bench_function("minimax depth 4 empty board", |b| {
        b.iter(|| minimax(black_box(&empty), 4, true, Mark::Red))
    });
    c.bench_function("alpha beta depth 6 midgame", |b| {
        b.iter(|| alpha_beta(black_box(&midgame), 6, -INF, INF, true, Mark::Red))
    });
    c.bench_function("minimax depth 5 midgame", |b| {
        b.iter(|| minimax(black_box(&midgame), 5, true, Mark::Red))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn midgame_board() -> Board {
    let mut board = Board::new();
    let mut mark = Mark::Red;
    for column in [3, 3, 2, 4, 4, 2, 5, 1] {
        board = apply_move(&board, column, mark).unwrap();
        mark = mark.opponent();
    }
    board
}
