use std::env;

use leadgen::{audit::SlugAudit, config::Settings, db, store::CompanyStore};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Reports companies whose names derive the same slug, and the suffixed slug
/// each one would get. Read-only; pass `--json` to print the full report.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the JSON report.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let _ = dotenvy::dotenv();
    let print_json = env::args().any(|a| a == "--json");

    let settings = Settings::from_env()?;
    let conn = db::connect(&settings.database).await?;
    let store = CompanyStore::new(conn, settings.pagination);

    let rows = store.company_names().await?;
    let audit = SlugAudit::from_rows(rows);

    info!(
        companies = audit.assignments.len(),
        collisions = audit.collision_count(),
        "slug audit finished"
    );
    for collision in audit.collisions() {
        warn!(
            co_rowid = collision.co_rowid,
            company_name = %collision.company_name,
            derived_slug = %collision.derived_slug,
            unique_slug = %collision.unique_slug,
            "slug collision"
        );
    }

    if print_json {
        println!("{}", serde_json::to_string_pretty(&audit)?);
    }
    Ok(())
}
