//! Comparing the built-in strategies on the same input

use seamdiff_core::{strategy, DiffConfig, DiffEngine, EditKind};

const LINE: &str = "----------------------------------------";

fn main() {
    let old: Vec<String> = [
        "use std::fmt;",
        "",
        "struct Point {",
        "    x: f64,",
        "    y: f64,",
        "}",
        "",
        "fn distance(a: &Point, b: &Point) -> f64 {",
        "    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()",
        "}",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    // The struct moves below the function and gains a field
    let new: Vec<String> = [
        "use std::fmt;",
        "",
        "fn distance(a: &Point, b: &Point) -> f64 {",
        "    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()",
        "}",
        "",
        "struct Point {",
        "    x: f64,",
        "    y: f64,",
        "    label: String,",
        "}",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let mut engine = DiffEngine::new();
    for name in [
        strategy::COMMON_SES,
        strategy::PATIENCE_DIFF,
        strategy::PRESERVE_STRUCTURE,
    ] {
        println!("Strategy: {}", name);
        println!("{}", LINE);

        let config = DiffConfig::default().with_strategy(name);
        let script = engine.diff(&old, &new, false, Some(config)).unwrap();

        for op in &script.ops {
            println!("{}", op);
        }
        println!(
            "({} equal, {} added, {} removed)\n",
            script.count(EditKind::Equal),
            script.count(EditKind::Add),
            script.count(EditKind::Remove)
        );

        assert_eq!(script.apply_to(&old), Some(new.clone()));
    }
}
