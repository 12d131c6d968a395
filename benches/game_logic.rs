use criterion::{black_box, criterion_group, criterion_main, Criterion};
use brick_game::core::{Board, Clock, MemoryStore, Simulation};
use brick_game::engine::fsm::tick;
use brick_game::engine::GameContext;
use brick_game::snake::SnakeGame;
use brick_game::tetris::{Piece, Shape, TetrisGame};
use brick_game::types::{ActionRequest, GameStatus, UserAction};

fn tetris() -> TetrisGame {
    TetrisGame::with_seed(Box::new(MemoryStore::new()), 12345)
}

fn bench_tick(c: &mut Criterion) {
    let clock = Clock::new();
    let mut ctx = GameContext::new(tetris());
    ctx.post(ActionRequest::new(UserAction::Start));
    tick(&mut ctx, &clock);
    tick(&mut ctx, &clock);

    c.bench_function("tetris_tick_moving", |b| {
        b.iter(|| {
            ctx.post(ActionRequest::new(black_box(UserAction::Left)));
            tick(&mut ctx, &clock);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, 1);
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_force_down(c: &mut Criterion) {
    let mut game = tetris();

    c.bench_function("force_down", |b| {
        b.iter(|| {
            game.set_piece(Piece::spawn(black_box(Shape::T), 0));
            game.force_down();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = tetris();
    game.set_piece(Piece::spawn(Shape::L, 8));

    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.rotate();
        })
    });
}

fn bench_snake_step(c: &mut Criterion) {
    let mut game = SnakeGame::with_seed(Box::new(MemoryStore::new()), 12345);

    c.bench_function("snake_step", |b| {
        b.iter(|| {
            game.spawn();
            game.set_food((0, 0));
            for _ in 0..5 {
                black_box(game.shift());
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = tetris();
    game.spawn();
    let mut out = Default::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(GameStatus::Moving), false, &mut out);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_force_down,
    bench_rotate,
    bench_snake_step,
    bench_snapshot
);
criterion_main!(benches);
