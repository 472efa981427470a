use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terminal_chess::{
    engine::{game::GameSession, Layout},
    render, Board, RuleSet, Square,
};

fn sweep_moves(board: &Board) -> usize {
    let mut accepted = 0;
    for (from, _) in board.iter_pieces() {
        for to in Square::all() {
            let mut board = board.clone();
            if board.move_piece(from, to).is_ok() {
                accepted += 1;
            }
        }
    }
    accepted
}

fn scripted_game(lines: &[&str]) -> GameSession {
    let mut session = GameSession::new(Board::default());
    for line in lines {
        let _ = session.handle_line(line);
    }
    session
}

fn criterion_benchmark(c: &mut Criterion) {
    let standard = Board::setup(Layout { with_knights: true }, RuleSet::Standard);
    c.bench_function("render start", |b| b.iter(|| render(black_box(&Board::default()))));
    c.bench_function("permissive sweep", |b| b.iter(|| sweep_moves(black_box(&Board::default()))));
    c.bench_function("standard sweep", |b| b.iter(|| sweep_moves(black_box(&standard))));
    c.bench_function("scripted game", |b| b.iter(|| {
        scripted_game(black_box(&["move e2 e4", "move e7 e5", "move x1 a1", "move d1 h5", "move h5 e8"]))
    }));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
