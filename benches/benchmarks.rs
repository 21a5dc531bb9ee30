use headsup::cards::*;
use headsup::gameplay::*;
use headsup::tree::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_seven_cards,
        playing_random_hand,
        building_default_tree,
}

fn evaluating_seven_cards(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let ref mut deck = Deck::new();
    let hole = [deck.draw(rng), deck.draw(rng)];
    let board = [
        deck.draw(rng),
        deck.draw(rng),
        deck.draw(rng),
        deck.draw(rng),
        deck.draw(rng),
    ];
    c.bench_function("evaluate a 7-card Hand", |b| {
        b.iter(|| evaluate_7card(hole, board))
    });
}

fn playing_random_hand(c: &mut criterion::Criterion) {
    let mut engine = Engine::new(0);
    c.bench_function("play a random Hand to the end", |b| {
        b.iter(|| {
            let ref mut play = engine.new_hand(1000, 5, 10);
            engine.play_out(play)
        })
    });
}

fn building_default_tree(c: &mut criterion::Criterion) {
    c.bench_function("build the default abstract Tree", |b| {
        b.iter(|| Builder::new(Abstraction::default()).build(headsup::MAX_NODES))
    });
}
