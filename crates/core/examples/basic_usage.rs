//! Basic usage of the seamdiff engine

use seamdiff_core::{compute_diff, DiffConfig, DiffEngine, EditKind};

const LINE: &str = "----------------------------------------";

fn main() {
    env_logger::init();

    println!("=== seamdiff Examples ===\n");

    // Example 1: Simple diff with default configuration
    example_simple_diff();

    // Example 2: Applying the script back
    example_apply_script();

    // Example 3: Custom configuration with debug tracing
    example_custom_config();
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn example_simple_diff() {
    println!("Example 1: Simple Diff");
    println!("{}", LINE);

    let old = lines(&["fn greet() {", "    println!(\"Hello World\");", "}"]);
    let new = lines(&["fn greet() {", "    println!(\"Hello Rust\");", "}"]);

    let script = compute_diff(&old, &new, None).unwrap();

    println!("Operations:");
    for (i, op) in script.ops.iter().enumerate() {
        println!("  {}. {}", i + 1, op);
    }
    println!(
        "\n{} equal, {} added, {} removed\n",
        script.count(EditKind::Equal),
        script.count(EditKind::Add),
        script.count(EditKind::Remove)
    );
}

fn example_apply_script() {
    println!("Example 2: Round Trip");
    println!("{}", LINE);

    let old = lines(&["alpha", "beta", "gamma", "delta"]);
    let new = lines(&["alpha", "gamma", "delta", "epsilon"]);

    let script = compute_diff(&old, &new, None).unwrap();
    let reconstructed = script.apply_to(&old).unwrap();

    println!("Old:           {:?}", old);
    println!("New:           {:?}", new);
    println!("Reconstructed: {:?}", reconstructed);
    println!("Round trip ok: {}\n", reconstructed == new);
}

fn example_custom_config() {
    println!("Example 3: Custom Configuration");
    println!("{}", LINE);

    let old: Vec<String> = (0..200).map(|i| format!("line {}", i)).collect();
    let mut new = old.clone();
    new.drain(50..80);
    new.insert(100, "a brand new line".to_string());

    // Tighter anchors, trimming left on; run with RUST_LOG=debug to see
    // the engine's tracing
    let config = DiffConfig::default()
        .with_min_match_length(20)
        .with_quick_diff_threshold(32);

    let mut engine = DiffEngine::new();
    let script = engine.diff(&old, &new, true, Some(config)).unwrap();

    println!(
        "{} operations: {} equal, {} added, {} removed",
        script.len(),
        script.count(EditKind::Equal),
        script.count(EditKind::Add),
        script.count(EditKind::Remove)
    );
    println!("Applies cleanly: {}", script.apply_to(&old).is_some());
}
