use std::fs::File;
use std::io::Write;
use std::time::Instant;

use mincost_core::{shortest_path, EdgeList, EngineConfig, FrontierKind};

fn run_one(n: usize, density: f32, seed: u64) -> serde_json::Value {
    let m = ((n * (n - 1)) as f32 * density) as usize;
    let graph = EdgeList::random(n, m, 100, seed).build(n);
    let mut timings = serde_json::Map::new();
    let mut distances = Vec::new();
    for kind in [FrontierKind::Heap, FrontierKind::Ordered] {
        let cfg = EngineConfig::default().with_frontier(kind);
        let t0 = Instant::now();
        let sp = shortest_path(&graph, n - 1, &cfg);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;
        distances.push(sp.distance);
        timings.insert(serde_json::to_value(kind).unwrap().as_str().unwrap_or("?").to_string(), serde_json::json!({
            "ms": ms,
            "stats": sp.stats,
        }));
    }
    assert!(distances.windows(2).all(|w| w[0] == w[1]), "frontier parity fail n={n} seed={seed}");
    serde_json::json!({ "n": n, "m": graph.edge_count(), "density": density, "distance": distances[0], "frontiers": timings })
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help") { eprintln!("Usage: bench_min_cost --sizes 200,500 --densities 0.1,0.4 --seed 42 --out benchmarks/min_cost.json"); return; }
    let arg = |name: &str| args.iter().position(|a| a == name).and_then(|i| args.get(i + 1)).cloned();
    let sizes: Vec<usize> = arg("--sizes").unwrap_or("200,500".into()).split(',').filter_map(|s| s.parse().ok()).collect();
    let densities: Vec<f32> = arg("--densities").unwrap_or("0.1,0.4".into()).split(',').filter_map(|s| s.parse().ok()).collect();
    let seed: u64 = arg("--seed").and_then(|v| v.parse().ok()).unwrap_or(42);
    let out_path = arg("--out").unwrap_or("benchmarks/min_cost.json".into());

    let mut results = Vec::new();
    for &n in sizes.iter().filter(|&&n| n >= 2) { for &d in &densities { results.push(run_one(n, d, seed)); } }
    let json = serde_json::Value::Array(results);
    if let Some(dir) = std::path::Path::new(&out_path).parent() { std::fs::create_dir_all(dir).ok(); }
    let mut f = File::create(&out_path).expect("create out");
    f.write_all(serde_json::to_string_pretty(&json).unwrap().as_bytes()).unwrap();
    eprintln!("wrote {}", out_path);
}
