//! Quickstart example demonstrating basic usage of anofox-graph.
//!
//! Run with: cargo run --example quickstart

use std::collections::BTreeSet;

use anofox_graph::detection::{
    detect_dense_block, detect_multiple, ColumnWeighting, PeelingConfig,
};
use anofox_graph::models::{BipartiteDetector, Fraudar};
use anofox_graph::synthetic::{inject_clique_camouflage, random_bipartite, CliqueCamoConfig};
use anofox_graph::utils::{f_measure, jaccard, precision, recall};

fn main() {
    println!("=== anofox-graph Quickstart ===\n");

    // 1. Build a random bipartite background graph
    let background = random_bipartite(200, 200, 0.02, Some(42));
    println!(
        "Background graph: {} rows x {} cols, {} edges",
        background.rows(),
        background.cols(),
        background.edge_count()
    );

    // 2. Plant a dense 15x15 fraud block with camouflage edges
    let config = CliqueCamoConfig::new(15, 15, 0.9).seed(7);
    let graph = inject_clique_camouflage(&background, &config).unwrap();
    println!(
        "After injection:  {} edges ({} added)",
        graph.edge_count(),
        graph.edge_count() - background.edge_count()
    );

    // 3. Detect the densest block with the default (inverse-log) weighting
    println!("\n--- Dense Block Detection ---");
    let block = detect_dense_block(&graph, &PeelingConfig::default()).unwrap();
    println!("Block score:  {:.4}", block.score);
    println!(
        "Block size:   {} rows x {} cols",
        block.rows.len(),
        block.cols.len()
    );
    println!("Edge density: {:.4}", block.edge_density(&graph));
    println!("Peel steps:   {}", block.num_peeled);

    // 4. Evaluate against the planted ground truth
    println!("\n--- Accuracy vs. Planted Block ---");
    let truth_rows: BTreeSet<usize> = (0..15).collect();
    let truth_cols: BTreeSet<usize> = (0..15).collect();
    let pred = (&block.rows, &block.cols);
    let actual = (&truth_rows, &truth_cols);
    println!("Jaccard:   {:.4}", jaccard(pred, actual));
    println!("Precision: {:.4}", precision(pred, actual));
    println!("Recall:    {:.4}", recall(pred, actual));
    println!("F-measure: {:.4}", f_measure(pred, actual));

    // 5. Compare column weighting schemes
    println!("\n--- Weighting Scheme Comparison ---");
    println!("{:>14} {:>10} {:>8} {:>8}", "Scheme", "Score", "Rows", "Cols");
    println!("{:-<44}", "");
    for weighting in [
        ColumnWeighting::Uniform,
        ColumnWeighting::InverseSqrt,
        ColumnWeighting::InverseLog,
    ] {
        let config = PeelingConfig::default().weighting(weighting);
        let block = detect_dense_block(&graph, &config).unwrap();
        println!(
            "{:>14} {:>10.4} {:>8} {:>8}",
            format!("{:?}", weighting),
            block.score,
            block.rows.len(),
            block.cols.len()
        );
    }

    // 6. Peel off the top three blocks
    println!("\n--- Top 3 Blocks ---");
    let config = PeelingConfig::default();
    let blocks = detect_multiple(&graph, |m| detect_dense_block(m, &config), 3).unwrap();
    for (i, block) in blocks.iter().enumerate() {
        println!(
            "  #{}: score {:.4}, {} rows x {} cols",
            i + 1,
            block.score,
            block.rows.len(),
            block.cols.len()
        );
    }

    // 7. The same detection through the model interface
    println!("\n--- Fraudar Model ---");
    let edges: Vec<(usize, usize)> = graph.entries().collect();
    let mut model = Fraudar::new();
    model.fit(&edges).unwrap();
    let (rows, cols) = model.predict().unwrap();
    println!(
        "{} flagged {} row and {} column vertices",
        model.name(),
        rows.len(),
        cols.len()
    );

    println!("\n=== Quickstart Complete ===");
}
