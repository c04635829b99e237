use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_hangman::core::{ComponentSet, Composite, Round};

fn bench_flatten_full_stack(c: &mut Criterion) {
    let components = ComponentSet::load().unwrap();
    let mut composite = Composite::from_grid(components.gallows().clone());
    composite
        .add_layers(components.iter().skip(1).map(|(_, layer)| layer.clone()))
        .unwrap();

    c.bench_function("flatten_8_layers", |b| {
        b.iter(|| black_box(&composite).flatten())
    });

    c.bench_function("render_8_layers", |b| {
        b.iter(|| black_box(&composite).render())
    });
}

fn bench_lost_round(c: &mut Criterion) {
    let components = ComponentSet::load().unwrap();

    c.bench_function("play_lost_round", |b| {
        b.iter(|| {
            let mut round = Round::new(&components, black_box("rhythm"), 3).unwrap();
            for letter in ['a', 'b', 'c', 'd', 'e', 'f'] {
                round.guess(letter).unwrap();
                black_box(round.render_canvas());
            }
            round
        })
    });
}

fn bench_load_components(c: &mut Criterion) {
    c.bench_function("load_components", |b| {
        b.iter(|| ComponentSet::load().unwrap())
    });
}

criterion_group!(
    benches,
    bench_flatten_full_stack,
    bench_lost_round,
    bench_load_components
);
criterion_main!(benches);
