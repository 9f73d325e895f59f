use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use inkprint::config::Config;
use inkprint::features::FeatureModel;
use inkprint::output::terminal;
use inkprint::store::{self, ModelStore};

/// Inkprint: stylometric fingerprints for guessing the author of a text.
///
/// Builds word, word-length, stem, sentence-length and conjunction
/// frequency tables from documents and compares them to decide which of two
/// known sources an unknown text most resembles.
#[derive(Parser)]
#[command(name = "inkprint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a model from one or more documents and save it
    Train {
        /// Name to save the model under (e.g. churchill)
        name: String,

        /// Documents to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show the size of each feature table of a saved model
    Describe {
        /// Name of a saved model
        name: String,
    },

    /// Decide which of two saved models more likely wrote the given documents
    Classify {
        /// First candidate source (a saved model name)
        #[arg(long)]
        first: String,

        /// Second candidate source (a saved model name)
        #[arg(long)]
        second: String,

        /// Label for the unknown text in the output
        #[arg(long, default_value = "mystery")]
        name: String,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Documents making up the unknown text
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Classify a short built-in example without touching disk
    Demo,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("inkprint=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train { name, files } => {
            let config = Config::load()?;
            let store = store::open_store(&config)?;

            let model = build_model(&name, &files)?;
            model.persist(store.as_ref())?;

            terminal::display_summary(&model.describe());
            println!(
                "\n{} {} saved to the {} store.",
                "✓".green(),
                name.bold(),
                store.backend_name()
            );
        }

        Commands::Describe { name } => {
            let config = Config::load()?;
            let store = store::open_store(&config)?;
            let model = load_model(&name, store.as_ref())?;
            terminal::display_summary(&model.describe());
        }

        Commands::Classify {
            first,
            second,
            name,
            json,
            files,
        } => {
            let config = Config::load()?;
            let store = store::open_store(&config)?;

            let first = load_model(&first, store.as_ref())?;
            let second = load_model(&second, store.as_ref())?;
            let unknown = build_model(&name, &files)?;

            let result = unknown.classify(&first, &second);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_classification(&result);
            }
        }

        Commands::Demo => {
            info!("Running built-in classification example");

            let mut source1 = FeatureModel::new("source1");
            source1.add_text("It is interesting that she is interested.");

            let mut source2 = FeatureModel::new("source2");
            source2.add_text("I am very, very excited about this!");

            let mut mystery = FeatureModel::new("mystery");
            mystery.add_text("Is he interested? No, but I am.");

            for model in [&source1, &source2, &mystery] {
                print!("{model}");
            }
            terminal::display_classification(&mystery.classify(&source1, &source2));
        }
    }

    Ok(())
}

/// Read every file into a fresh model, showing progress for multi-file input.
fn build_model(name: &str, files: &[PathBuf]) -> Result<FeatureModel> {
    let mut model = FeatureModel::new(name);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Reading [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for path in files {
        pb.set_message(path.display().to_string());
        model.add_document(path)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(model)
}

fn load_model(name: &str, store: &dyn ModelStore) -> Result<FeatureModel> {
    FeatureModel::load(name, store).with_context(|| {
        format!("Could not load model '{name}'. Run `inkprint train {name} <files>` first.")
    })
}
