//! Word Analogies Demo (live)
//!
//! Reproduces the two classic analogy probes against a hosted embedding
//! model:
//!
//!   king - man + female        vs {queen, princess, duchess, prince}
//!   Dublin - Ireland + Madrid  vs {Italy, Spain, Germany, Norway,
//!                                  Portugal, United Kingdom}
//!
//! Each embedding is one request/response round trip; the probes issue
//! their lookups sequentially.
//!
//! Usage:
//!   MISTRAL_API_KEY=your_key cargo run --example word_analogies

use embedscope::{analogy, report, Candidate, EmbeddingClient, EmbeddingModel};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    if std::env::var("MISTRAL_API_KEY").is_err() {
        eprintln!("MISTRAL_API_KEY not set; this demo calls the hosted provider.");
        std::process::exit(1);
    }

    let profile = EmbeddingModel::mistral_embed();
    let client = EmbeddingClient::builder().model(&profile.id).build()?;
    println!("Model: {} ({} dims)\n", client.model(), profile.dimensions);

    probe(
        &client,
        ["king", "man", "female"],
        &["queen", "princess", "duchess", "prince"],
    )
    .await?;
    println!();
    probe(
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
    .await?;

    Ok(())
}

async fn probe(
    client: &EmbeddingClient,
    terms: [&str; 3],
    labels: &[&str],
) -> embedscope::Result<()> {
    println!(
        "Analogy: \"{}\" - \"{}\" + \"{}\"\n",
        terms[0], terms[1], terms[2]
    );

    let a = client.embed(terms[0]).await?;
    let b = client.embed(terms[1]).await?;
    let c = client.embed(terms[2]).await?;
    let candidates: Vec<Candidate> = client
        .embed_each(labels)
        .await?
        .into_iter()
        .map(|e| Candidate::new(e.text, e.vector))
        .collect();

    let outcome = analogy::solve(&a.vector, &b.vector, &c.vector, &candidates)?;
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
        if !outcome.metrics_agree() {
            println!("Note: the two metrics disagree on the winner.");
        }
    }
    Ok(())
}
