use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simon_says::core::{compare, GameSnapshot};
use simon_says::engine::{Engine, SilentPlayer};
use simon_says::term::{FrameBuffer, GameView, Viewport};
use simon_says::types::{Color, PRESS_FLASH_MS, ROUND_ADVANCE_MS, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::new(12345, SilentPlayer);
    engine.start();

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            engine.tick(black_box(TICK_MS));
        })
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("play_and_echo_round_5", |b| {
        b.iter(|| {
            let mut engine = Engine::new(black_box(7), SilentPlayer);
            engine.start();
            while engine.sequence().len() < 5 {
                while !engine.session().accepts_input() {
                    engine.tick(TICK_MS);
                }
                for color in engine.sequence().to_vec() {
                    engine.press_color(color);
                    engine.tick(PRESS_FLASH_MS);
                }
                engine.tick(ROUND_ADVANCE_MS);
            }
            engine.sequence().len()
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let expected: Vec<Color> = (0..20).map(|i| Color::ALL[i % 4]).collect();
    let input = expected.clone();

    c.bench_function("compare_20", |b| {
        b.iter(|| compare(black_box(&expected), black_box(&input)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut engine = Engine::new(3, SilentPlayer);
    engine.start();
    engine.tick(400);
    let mut snap = GameSnapshot::default();
    engine.snapshot_into(&mut snap);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_board_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_full_round, bench_compare, bench_render);
criterion_main!(benches);
