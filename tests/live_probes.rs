//! Live analogy probes against the hosted embedding provider.
//!
//! Requires a real API key. Set MISTRAL_API_KEY and run with:
//! cargo test --test live_probes -- --ignored --nocapture

use embedscope::{analogy, AnalogyOutcome, Candidate, EmbeddingClient};

async fn solve_terms(
    client: &EmbeddingClient,
    terms: [&str; 3],
    labels: &[&str],
) -> AnalogyOutcome {
    let a = client.embed(terms[0]).await.expect("embed failed");
    let b = client.embed(terms[1]).await.expect("embed failed");
    let c = client.embed(terms[2]).await.expect("embed failed");
    let candidates: Vec<Candidate> = client
        .embed_each(labels)
        .await
        .expect("embed_each failed")
        .into_iter()
        .map(|e| Candidate::new(e.text, e.vector))
        .collect();
    analogy::solve(&a.vector, &b.vector, &c.vector, &candidates).expect("analogy failed")
}

#[tokio::test]
#[ignore = "requires MISTRAL_API_KEY; run with: cargo test --test live_probes -- --ignored --nocapture"]
async fn king_minus_man_plus_female_lands_on_queen() {
    if std::env::var("MISTRAL_API_KEY").is_err() {
        eprintln!("MISTRAL_API_KEY not set, skipping live probe");
        return;
    }

    let client = EmbeddingClient::builder()
        .build()
        .expect("Failed to build client");
    let outcome = solve_terms(
        &client,
        ["king", "man", "female"],
        &["queen", "princess", "duchess", "prince"],
    )
    .await;

    for row in &outcome.by_cosine {
        eprintln!("cosine  {:<10} {:.4}", row.label, row.score);
    }
    assert_eq!(outcome.best_by_cosine().expect("empty ranking").label, "queen");
    assert_eq!(
        outcome.best_by_distance().expect("empty ranking").label,
        "queen"
    );
}

#[tokio::test]
#[ignore = "requires MISTRAL_API_KEY; run with: cargo test --test live_probes -- --ignored --nocapture"]
async fn dublin_minus_ireland_plus_madrid_lands_on_spain() {
    if std::env::var("MISTRAL_API_KEY").is_err() {
        eprintln!("MISTRAL_API_KEY not set, skipping live probe");
        return;
    }

    let client = EmbeddingClient::builder()
        .build()
        .expect("Failed to build client");
    let outcome = solve_terms(
        &client,
        ["Dublin", "Ireland", "Madrid"],
        &[
            "Italy",
            "Spain",
            "Germany",
            "Norway",
            "Portugal",
            "United Kingdom",
        ],
    )
    .await;

    for row in &outcome.by_distance {
        eprintln!("distance {:<10} {:.4}", row.label, row.score);
    }
    assert_eq!(outcome.best_by_cosine().expect("empty ranking").label, "Spain");
    assert_eq!(
        outcome.best_by_distance().expect("empty ranking").label,
        "Spain"
    );
}
