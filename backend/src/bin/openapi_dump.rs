//! Print the OpenAPI document as JSON.

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use users_api::ApiDoc;
use utoipa::OpenApi;

/// Write the users API OpenAPI document to stdout.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", version)]
struct Cli {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let json = if cli.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
    .wrap_err("failed to serialise OpenAPI document")?;
    println!("{json}");
    Ok(())
}
