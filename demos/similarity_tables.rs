//! Similarity Tables Demo
//!
//! Walks through the comparison toolkit on small hand-written vectors,
//! no network required:
//! - pairwise cosine similarity and Euclidean distance
//! - comparison tables over labeled embeddings
//! - analogy ranking on synthetic vectors
//!
//! Usage:
//!   cargo run --example similarity_tables

use embedscope::vector::{cosine_similarity, euclidean_distance, norm, normalize};
use embedscope::{analogy, report, Candidate, Embedding, EmbeddingUsage};

fn main() -> embedscope::Result<()> {
    println!("=== embedscope Similarity Tables Demo ===\n");

    demo_basic_metrics()?;
    demo_comparison_table()?;
    demo_analogy_ranking()?;

    Ok(())
}

fn demo_basic_metrics() -> embedscope::Result<()> {
    println!("--- Example 1: Basic Metrics ---\n");

    let vec_a: Vec<f32> = vec![0.1, 0.2, 0.3, 0.4, 0.5];
    let vec_b: Vec<f32> = vec![0.15, 0.25, 0.35, 0.45, 0.55];
    let vec_c: Vec<f32> = vec![-0.1, -0.2, -0.3, -0.4, -0.5];

    println!("Vector A: {:?}", vec_a);
    println!("Vector B: {:?}", vec_b);
    println!("Vector C: {:?}\n", vec_c);

    println!(
        "Cosine Similarity (A, B): {:.6} (nearly parallel)",
        cosine_similarity(&vec_a, &vec_b)?
    );
    println!(
        "Cosine Similarity (A, C): {:.6} (opposite)",
        cosine_similarity(&vec_a, &vec_c)?
    );
    println!(
        "Euclidean Distance (A, B): {:.6} (close)",
        euclidean_distance(&vec_a, &vec_b)?
    );
    println!(
        "Euclidean Distance (A, C): {:.6} (far)",
        euclidean_distance(&vec_a, &vec_c)?
    );

    println!("Norm of A: {:.6}", norm(&vec_a));
    let unit = normalize(&vec_a)?;
    println!("Norm of A, normalized: {:.6}\n", norm(&unit));
    Ok(())
}

fn demo_comparison_table() -> embedscope::Result<()> {
    println!("--- Example 2: Comparison Table ---\n");

    // Hand-written 4-d "topic" vectors standing in for model output.
    let source = canned("machine learning tutorial", vec![0.9, 0.05, 0.02, 0.03]);
    let targets = vec![
        canned("intro to machine learning", vec![0.8, 0.1, 0.05, 0.05]),
        canned("deep learning guide", vec![0.75, 0.15, 0.05, 0.05]),
        canned("cooking for beginners", vec![0.1, 0.1, 0.7, 0.1]),
        canned("advanced calculus", vec![0.1, 0.7, 0.1, 0.1]),
    ];

    let records = report::compare_against(&source, &targets)?;
    print!("{}", report::comparison_table(&records));
    println!();
    Ok(())
}

fn demo_analogy_ranking() -> embedscope::Result<()> {
    println!("--- Example 3: Analogy Ranking ---\n");

    // Toy embedding space: axis 0 = male, axis 1 = female, axis 2 = royal.
    // king - man + woman lands exactly on queen.
    let king = vec![1.0, 0.0, 1.0];
    let man = vec![1.0, 0.0, 0.0];
    let woman = vec![0.0, 1.0, 0.0];
    let candidates = vec![
        Candidate::new("queen", vec![0.0, 1.0, 1.0]),
        Candidate::new("princess", vec![0.0, 1.0, 0.7]),
        Candidate::new("duchess", vec![0.0, 0.9, 0.5]),
        Candidate::new("prince", vec![1.0, 0.0, 0.7]),
    ];

    println!("Analogy: king - man + woman\n");
    let outcome = analogy::solve(&king, &man, &woman, &candidates)?;
    print!(
        "{}",
        report::ranking_table("By cosine similarity (best first):", &outcome.by_cosine)
    );
    println!();
    print!(
        "{}",
        report::ranking_table("By euclidean distance (best first):", &outcome.by_distance)
    );
    println!();

    if let (Some(by_cos), Some(by_dist)) = (outcome.best_by_cosine(), outcome.best_by_distance()) {
        println!("Winner by cosine similarity:  {}", by_cos.label);
        println!("Winner by euclidean distance: {}", by_dist.label);
    }
    Ok(())
}

fn canned(text: &str, vector: Vec<f32>) -> Embedding {
    Embedding::new(text, vector, "canned-demo", EmbeddingUsage::default())
}
