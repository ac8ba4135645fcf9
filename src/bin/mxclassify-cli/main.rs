use anyhow::{Context, Result};
use mxclassify_lib::{CategoryStore, Dictionary, classify_file, reclassify_other};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod output;

use args::Cli;
use output::RunSummary;

fn init_tracing() {
    // stdout reste réservé au résumé (human/JSON)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = cli.classify_options()?;

    tracing::info!("Starting email MX record classification");

    let dictionary = cli.mx_dict.as_ref().map(|path| Dictionary::load_or_empty(path));
    let store = CategoryStore::new(&cli.output);

    let existing = if cli.reuse_existing {
        tracing::info!(dir = %cli.output.display(), "Checking for existing classification results");
        Some(
            store
                .load_builtin()
                .context("load existing classification")?,
        )
    } else {
        None
    };

    let run = classify_file(&cli.input, dictionary.as_ref(), existing, &options)
        .with_context(|| format!("classify {}", cli.input.display()))?;
    let saved = store
        .save(&run.classification, &run.mx_audit)
        .context("save classification results")?;

    // passe secondaire uniquement avec --mx-dict
    let reclassified = match &dictionary {
        Some(dict) => {
            tracing::info!("Starting secondary classification using MX dictionary");
            reclassify_other(&store, dict).context("reclassify Other category")?
        }
        None => None,
    };

    let summary = RunSummary::new(&cli, &run, saved, reclassified);
    output::write_reports(&summary, &run, &cli)?;

    tracing::info!("Classification completed");
    Ok(())
}
