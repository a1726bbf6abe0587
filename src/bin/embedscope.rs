//! embedscope CLI — similarity and analogy probes over a hosted embedding model
//!
//! Usage:
//!   embedscope compare <source> <target>...            Compare a source text against targets
//!   embedscope analogy <A> <B> <C> --candidates <...>  Rank candidates against A - B + C
//!   embedscope models                                  List known embedding model profiles
//!   embedscope version                                 Show version information

use embedscope::{analogy, report, Candidate, EmbeddingClient, EmbeddingModel, Error};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "compare" => cmd_compare(&args[2..]).await,
        "analogy" => cmd_analogy(&args[2..]).await,
        "models" => {
            cmd_models();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"embedscope — probe a hosted embedding model with similarity and analogy queries

USAGE:
    embedscope <COMMAND> [ARGS] [OPTIONS]

COMMANDS:
    compare <source> <target>...              Embed every text and print a table of
                                              (cosine similarity, euclidean distance)
                                              between the source and each target
    analogy <A> <B> <C> --candidates <l1,l2,...>
                                              Embed the three query terms and the
                                              candidates, then rank candidates against
                                              A - B + C by both metrics
    models                                    List known embedding model profiles
    version                                   Show version information
    help                                      Show this help message

OPTIONS (after the positional arguments):
    --model <id>         Embedding model id (default: mistral-embed)
    --base-url <url>     Provider base URL (default: https://api.mistral.ai)
    --api-key <key>      API key (default: read from MISTRAL_API_KEY)
    --dimensions <n>     Requested output dimensionality, where supported
    --timeout <secs>     Request timeout in seconds (default: 60)

ENVIRONMENT:
    MISTRAL_API_KEY      API key used when --api-key is not given
    RUST_LOG             Log filter (e.g. embedscope=debug)"#
    );
}

fn cmd_version() {
    println!("embedscope {}", env!("CARGO_PKG_VERSION"));
}

fn cmd_models() {
    let models = [
        EmbeddingModel::mistral_embed(),
        EmbeddingModel::text_embedding_3_small(),
    ];

    println!(
        "{:<24} {:<10} {:>6} {:>12}",
        "Model", "Provider", "Dims", "Max tokens"
    );
    println!("{}", "-".repeat(55));
    for model in &models {
        println!(
            "{:<24} {:<10} {:>6} {:>12}",
            model.id, model.provider, model.dimensions, model.max_input_tokens
        );
    }
    println!("\nAny OpenAI-compatible model id is accepted via --model.");
}

/// Positional arguments: everything before the first `--` flag.
fn positionals(args: &[String]) -> Vec<String> {
    args.iter()
        .take_while(|a| !a.starts_with("--"))
        .cloned()
        .collect()
}

fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1).cloned())
}

fn build_client(args: &[String]) -> embedscope::Result<EmbeddingClient> {
    let mut builder = EmbeddingClient::builder();
    if let Some(model) = flag_value(args, "--model") {
        builder = builder.model(model);
    }
    if let Some(url) = flag_value(args, "--base-url") {
        builder = builder.base_url(url);
    }
    if let Some(key) = flag_value(args, "--api-key") {
        builder = builder.api_key(key);
    }
    if let Some(dims) = flag_value(args, "--dimensions") {
        let dims: usize = dims
            .parse()
            .map_err(|_| Error::configuration(format!("--dimensions must be a number, got '{dims}'")))?;
        builder = builder.output_dimensions(dims);
    }
    if let Some(secs) = flag_value(args, "--timeout") {
        let secs: u64 = secs
            .parse()
            .map_err(|_| Error::configuration(format!("--timeout must be a number, got '{secs}'")))?;
        builder = builder.timeout_secs(secs);
    }
    builder.build()
}

async fn cmd_compare(args: &[String]) -> embedscope::Result<()> {
    let texts = positionals(args);
    if texts.len() < 2 {
        eprintln!("Usage: embedscope compare <source> <target>... [OPTIONS]");
        std::process::exit(1);
    }

    let client = build_client(args)?;
    let source = client.embed(&texts[0]).await?;
    let targets = client.embed_each(&texts[1..]).await?;

    println!(
        "Source: \"{}\"  (model {}, {} dims)\n",
        source.text,
        client.model(),
        source.dimensions()
    );
    let records = report::compare_against(&source, &targets)?;
    print!("{}", report::comparison_table(&records));
    Ok(())
}

async fn cmd_analogy(args: &[String]) -> embedscope::Result<()> {
    let terms = positionals(args);
    if terms.len() != 3 {
        eprintln!("Usage: embedscope analogy <A> <B> <C> --candidates <l1,l2,...> [OPTIONS]");
        std::process::exit(1);
    }
    let labels: Vec<String> = flag_value(args, "--candidates")
        .map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();
    if labels.is_empty() {
        eprintln!("analogy requires a non-empty --candidates list");
        std::process::exit(1);
    }

    let client = build_client(args)?;
    println!(
        "Analogy: \"{}\" - \"{}\" + \"{}\"  (model {})\n",
        terms[0],
        terms[1],
        terms[2],
        client.model()
    );

    let a = client.embed(&terms[0]).await?;
    let b = client.embed(&terms[1]).await?;
    let c = client.embed(&terms[2]).await?;
    let candidates: Vec<Candidate> = client
        .embed_each(&labels)
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
