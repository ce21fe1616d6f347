use mincost_core::{shortest_path, EdgeList, EngineConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 { eprintln!("usage: run_one <nodes> <edges> <seed> [max_weight]"); std::process::exit(1); }
    let n: usize = args[1].parse().expect("nodes");
    let m: usize = args[2].parse().expect("edges");
    let seed: u64 = args[3].parse().expect("seed");
    let max_weight: i32 = args.get(4).and_then(|v| v.parse().ok()).unwrap_or(10);
    if n == 0 { eprintln!("nodes must be at least 1"); std::process::exit(1); }

    let edges = EdgeList::random(n, m, max_weight, seed);
    let graph = edges.build(n);
    let config = EngineConfig::from_env();
    let sp = shortest_path(&graph, n - 1, &config);

    print!("frontier={:?} scope={:?} n={n} m={} cost={}", config.frontier, config.scope, graph.edge_count(), sp.cost());
    print!(" relax={} synthetic={} suppressed={} settled={}", sp.stats.relaxations, sp.stats.synthetic_relaxations, sp.stats.suppressed_pairs, sp.stats.settled);
    match sp.path() {
        Some(path) => println!(" path={:?}", path.iter().map(|v| v + 1).collect::<Vec<_>>()),
        None => println!(" path=none"),
    }
}
