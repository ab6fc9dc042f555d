//! Criterion benchmarks measure time of the three solvers on fixed inputs.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use searchlab::caro::board::Board;
use searchlab::caro::core::Player;
use searchlab::caro::search::AiPlayer;
use searchlab::coloring::graph::Graph;
use searchlab::coloring::greedy::color_graph;
use searchlab::pathfind::astar::find_path;
use searchlab::pathfind::map::GridMap;
use searchlab::pathfind::Pos;

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Minimax");
    let mut board = Board::from_layout("X....\n.OX..\n..O..\n..X..\n.....", 5).unwrap();
    let mut engine = AiPlayer::new(Player::O, board.size());
    group.bench_function(BenchmarkId::new("find_best_move", "5x5 midgame"), |b| {
        b.iter(|| std::hint::black_box(engine.find_best_move(&mut board)));
    });
    group.finish();
}

fn astar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pathfinding");
    let mut map = GridMap::preset_school();
    // Connect the sealed goal room so the search crosses the whole map.
    map.toggle_wall(Pos::new(2, 11)).unwrap();
    group.bench_with_input(
        BenchmarkId::new(
            "find_path",
            format!("{}x{} school map", map.rows(), map.cols()),
        ),
        &map,
        |b, map| {
            b.iter(|| std::hint::black_box(find_path(map)));
        },
    );
    group.finish();
}

fn coloring_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Coloring");
    let mut rng = StdRng::seed_from_u64(3);
    let graph = Graph::random(12, &mut rng).unwrap();
    group.bench_with_input(
        BenchmarkId::new("color_graph", "12 regions"),
        &graph,
        |b, graph| {
            b.iter(|| {
                let mut graph = graph.clone();
                std::hint::black_box(color_graph(&mut graph))
            });
        },
    );
    group.finish();
}

criterion_group! {
    name = minimax;
    config = Criterion::default().sample_size(10);
    targets = minimax_bench
}
criterion_group!(pathfinding, astar_bench);
criterion_group!(coloring, coloring_bench);

criterion_main!(minimax, pathfinding, coloring);
