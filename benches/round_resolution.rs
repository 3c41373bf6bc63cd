use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_tbg::core::PlayerId;
use rust_tbg::games::rps::{RandomMover, RockPaperScissorsBuilder};
use rust_tbg::rules::Game;

fn play_match(variant: &str, seed: u64) -> usize {
    let mut game = RockPaperScissorsBuilder::new()
        .variant(variant)
        .points_to_win(5)
        .build()
        .unwrap();
    game.add_player("P0").unwrap();
    game.add_player("P1").unwrap();
    game.on_start();

    let mut bots = [
        RandomMover::new(PlayerId::new(0), seed),
        RandomMover::new(PlayerId::new(1), seed),
    ];
    while !game.done() {
        for bot in &mut bots {
            let mv = bot.pick(game.relation());
            game.submit_move(bot.player(), mv.name()).unwrap();
        }
    }
    game.history().len()
}

fn bench_matches(c: &mut Criterion) {
    c.bench_function("rps_match_first_to_5", |b| {
        b.iter(|| play_match(black_box("rps"), 42))
    });
    c.bench_function("rpsls_match_first_to_5", |b| {
        b.iter(|| play_match(black_box("rpsls"), 42))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = RockPaperScissorsBuilder::new().points_to_win(50).build().unwrap();
    game.add_player("P0").unwrap();
    game.add_player("P1").unwrap();
    game.on_start();
    for _ in 0..40 {
        game.submit_move(PlayerId::new(0), "rock").unwrap();
        game.submit_move(PlayerId::new(1), "rock").unwrap();
    }

    c.bench_function("game_state_json_40_rounds", |b| {
        b.iter(|| black_box(game.game_state_json()))
    });
}

criterion_group!(benches, bench_matches, bench_snapshot);
criterion_main!(benches);
