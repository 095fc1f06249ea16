use criterion::{criterion_group, criterion_main, Criterion, black_box};
use discbot::board::{Board, Color};
use discbot::search::{SearchParams, Searcher};

fn bench_search(c: &mut Criterion) {
    let b = Board::new();
    for depth in [1u32, 3, 5] {
        c.bench_function(&format!("search_depth_{depth}_startpos"), |ben| {
            ben.iter(|| {
                let mut s = Searcher::default();
                let p = SearchParams { depth, ..SearchParams::default() };
                let r = s.search_with_params(black_box(&b), Color::Black, p);
                black_box(r.nodes)
            })
        });
    }
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
