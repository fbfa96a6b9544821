//! toponym CLI: resolve city names and title location prefixes ad hoc.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use miette::Result;

use toponym::{Gazetteer, Resolver, TitleParser};

#[derive(Parser)]
#[command(name = "toponym", version, about = "Bilingual city-name resolution")]
struct Cli {
    /// Path to a locations JSON file; the embedded data set is used when
    /// omitted.
    #[arg(long, global = true)]
    locations: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a raw location fragment to its canonical name.
    Resolve {
        /// Location fragment, e.g. "Дніпро" or "харьсков".
        fragment: String,
    },

    /// Parse a full topic title, e.g. "[Украина, Киев] Продам видеокарту".
    Title {
        /// The topic title, including the bracketed location prefix.
        title: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let gazetteer = match cli.locations {
        Some(path) => Gazetteer::from_path(path),
        None => Gazetteer::embedded(),
    };
    let resolver = Resolver::new(Arc::new(gazetteer));

    match cli.command {
        Commands::Resolve { fragment } => {
            match resolver.resolve(&fragment)? {
                Some(canonical) => println!("{canonical}"),
                None => println!("(unresolved)"),
            }
        }
        Commands::Title { title } => {
            let parsed = TitleParser::new(resolver).parse(&title)?;
            println!("title:        {}", parsed.title);
            println!("location_raw: {}", parsed.location_raw);
            match parsed.location {
                Some(canonical) => println!("location:     {canonical}"),
                None => println!("location:     (unresolved)"),
            }
        }
    }

    Ok(())
}
