use std::time::Instant;

use synset_core::{distances_from, Digraph, ShortestCommonAncestor, VertexId};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: synset-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all       Run all generators and benchmark each (default)");
        println!("  tree      Single-parent taxonomy (every synset has one hypernym)");
        println!("  lattice   Layered DAG with two to three hypernyms per synset");
        println!("  dla       Organic growth with occasional second hypernyms");
        println!();
        println!("Default vertex_count: 100000");
        return;
    }

    if vertex_count < 2 {
        eprintln!("vertex_count must be at least 2");
        return;
    }

    println!("synset-bench");
    println!("============");
    println!();

    let generators: Vec<(&str, fn(usize) -> Digraph)> = match mode {
        "tree" => vec![("Tree (single hypernym)", gen_tree)],
        "lattice" => vec![("Layered lattice (multi-hypernym)", gen_lattice)],
        "dla" => vec![("DLA (organic branching)", gen_dla)],
        "all" => vec![
            ("Tree (single hypernym)", gen_tree as fn(usize) -> Digraph),
            ("Layered lattice (multi-hypernym)", gen_lattice),
            ("DLA (organic branching)", gen_dla),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> Digraph, vertex_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let graph = generator(vertex_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} vertices, {} edges, ~{:.1}MB",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let mut rng = FastRng::new(2024);
    let n = graph.vertex_count() as u64;

    // Distance maps from the deepest vertices (generated last)
    println!();
    println!("{:>10} {:>12} {:>10}", "source", "reachable", "time");
    println!("{:->10} {:->12} {:->10}", "", "", "");
    for source in [n - 1, n - 2, n / 2] {
        let t = Instant::now();
        let result = distances_from(&graph, source as VertexId);
        let elapsed = t.elapsed();
        match result {
            Ok(map) => println!(
                "{:>10} {:>12} {:>8.3}ms",
                source,
                map.len(),
                elapsed.as_secs_f64() * 1000.0
            ),
            Err(e) => println!("{:>10} error: {}", source, e),
        }
    }

    let sca = ShortestCommonAncestor::new(&graph);

    // Random single-pair queries
    let pairs = 1_000;
    let t = Instant::now();
    let mut total_length = 0u64;
    let mut unrelated = 0usize;
    for _ in 0..pairs {
        let v = rng.next(n) as VertexId;
        let w = rng.next(n) as VertexId;
        match sca.length(v, w) {
            Ok(Some(len)) => total_length += len as u64,
            Ok(None) => unrelated += 1,
            Err(e) => {
                println!("pair ({}, {}) failed: {}", v, w, e);
                return;
            }
        }
    }
    let elapsed = t.elapsed();
    println!();
    println!(
        "{} pair queries in {:.1}ms ({:.1}µs/query), mean length {:.2}, {} without ancestor",
        pairs,
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1e6 / pairs as f64,
        total_length as f64 / (pairs - unrelated).max(1) as f64,
        unrelated
    );

    // Subset queries, sized like polysemous nouns
    for size in [2usize, 5, 10] {
        let queries = 50;
        let t = Instant::now();
        let mut found = 0usize;
        for _ in 0..queries {
            let a: Vec<VertexId> = (0..size).map(|_| rng.next(n) as VertexId).collect();
            let b: Vec<VertexId> = (0..size).map(|_| rng.next(n) as VertexId).collect();
            if let Ok(Some(_)) = sca.triad(a, b) {
                found += 1;
            }
        }
        let elapsed = t.elapsed();
        println!(
            "{} subset queries |A|=|B|={} in {:.1}ms ({:.2}ms/query), {} with ancestor",
            queries,
            size,
            elapsed.as_secs_f64() * 1000.0,
            elapsed.as_secs_f64() * 1000.0 / queries as f64,
            found
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: rooted at vertex 0, edges point from child to hypernym,
// deterministic, single-threaded
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

/// Complete branching tree: vertex `i` has hypernym `(i - 1) / branching`.
///
/// Log-depth, one path to the root from every vertex.
fn gen_tree(vertex_count: usize) -> Digraph {
    let branching = 4usize;
    let mut graph = Digraph::with_capacity(vertex_count, vertex_count);
    for child in 1..vertex_count {
        add(&mut graph, child, (child - 1) / branching);
    }
    graph
}

/// Layered lattice: each layer's synsets take two or three hypernyms from
/// the previous layer, producing many equal-length paths to the root.
fn gen_lattice(vertex_count: usize) -> Digraph {
    let width = 1_000usize;
    let mut graph = Digraph::with_capacity(vertex_count, vertex_count * 3);
    let mut rng = FastRng::new(4242);

    // First layer hangs directly off the root
    for child in 1..vertex_count.min(width + 1) {
        add(&mut graph, child, 0);
    }

    for child in (width + 1)..vertex_count {
        let layer_start = ((child - 1) / width) * width + 1;
        let prev_start = layer_start - width;
        let parents = 2 + rng.next(2) as usize;
        for _ in 0..parents {
            let parent = prev_start + rng.next(width as u64) as usize;
            add(&mut graph, child, parent);
        }
    }
    graph
}

/// DLA-style growth: each new synset attaches to a recent one, with a 10%
/// chance of a second hypernym anywhere earlier in the graph.
fn gen_dla(vertex_count: usize) -> Digraph {
    let surface_max = 10_000usize;
    let mut graph = Digraph::with_capacity(vertex_count, vertex_count + vertex_count / 10);
    let mut rng = FastRng::new(77777);

    for child in 1..vertex_count {
        let lo = child.saturating_sub(surface_max);
        let primary = lo + rng.next((child - lo) as u64) as usize;
        add(&mut graph, child, primary);

        if rng.next(10) == 0 && child > 1 {
            let other = rng.next(child as u64) as usize;
            if other != primary {
                add(&mut graph, child, other);
            }
        }
    }
    graph
}

/// Generators only emit edges between existing vertices.
fn add(graph: &mut Digraph, child: VertexId, parent: VertexId) {
    if let Err(e) = graph.add_edge(child, parent) {
        eprintln!("generator produced invalid edge {} -> {}: {}", child, parent, e);
    }
}
