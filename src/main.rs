//! # rag-scaffold CLI (`raggen`)
//!
//! Thin, non-interactive front end over the composition engine. The
//! interactive prompt flow and the template rendering layer live outside
//! this binary; `raggen` only reads an already-collected configuration
//! file and prints what the engine produces.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `raggen compose` | Compose a configuration into a generation context (JSON on stdout) |
//! | `raggen check` | Validate a configuration and report the pairing outcome |
//! | `raggen variants` | List registered variant ids per role |
//!
//! ## Examples
//!
//! ```bash
//! raggen compose --config ./rag-app.toml --pretty > context.json
//! raggen check --config ./rag-app.toml
//! raggen variants
//! ```

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rag_scaffold::compat::resolve_pairing;
use rag_scaffold::component::Role;
use rag_scaffold::config::{normalize_retrieval_id, GeneratorConfig};
use rag_scaffold::registry::VariantRegistry;

/// RAG application scaffolding generator — composes component choices into
/// a generation context for the template renderer.
#[derive(Parser)]
#[command(
    name = "raggen",
    about = "Compose RAG application scaffolding from component choices",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a configuration file into a generation context.
    ///
    /// Reads the configuration record produced by the prompt layer (TOML,
    /// or JSON when the file ends in `.json`) and prints the composed
    /// context as a JSON object on stdout. Composition is all-or-nothing:
    /// on any error nothing is printed and the process exits non-zero.
    Compose {
        /// Path to the configuration file.
        #[arg(long)]
        config: PathBuf,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Validate a configuration and report the compatibility outcome.
    ///
    /// Resolves the selected variants and prints the retrieval × store
    /// support level and search method without composing any artifacts.
    Check {
        /// Path to the configuration file.
        #[arg(long)]
        config: PathBuf,
    },

    /// List registered variant ids for each role.
    Variants,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = VariantRegistry::builtin();

    match cli.command {
        Commands::Compose { config, pretty } => {
            let config = GeneratorConfig::load(&config)?;
            let ctx = rag_scaffold::compose::compose(&config, &registry)?;
            let json = if pretty {
                serde_json::to_string_pretty(&ctx)
            } else {
                serde_json::to_string(&ctx)
            }
            .context("failed to serialize generation context")?;
            println!("{json}");
        }
        Commands::Check { config } => {
            let config = GeneratorConfig::load(&config)?;
            let (embedding, vector_db, retrieval_label) = config.selections()?;

            let retrieval_id = normalize_retrieval_id(retrieval_label);
            let retrieval = registry.retrieval(&retrieval_id)?;
            let outcome = resolve_pairing(retrieval.as_ref(), &vector_db.id);

            println!("embedding:     {} ({})", embedding.id, embedding.deployment);
            println!("vector store:  {} ({})", vector_db.id, vector_db.deployment);
            println!("retrieval:     {retrieval_id}");
            println!("pairing:       {}", outcome.level);
            println!("search method: {}", outcome.search_method);
            if outcome.sparse_vectors_needed {
                println!("collection:    dense + sparse vector slots");
            } else {
                println!("collection:    dense vectors only");
            }
        }
        Commands::Variants => {
            for role in [Role::Embedding, Role::VectorStore, Role::Retrieval] {
                println!("{role}:");
                for id in registry.ids(role) {
                    println!("  {id}");
                }
            }
        }
    }

    Ok(())
}
