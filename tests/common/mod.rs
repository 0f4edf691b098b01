#![allow(dead_code)]

use std::sync::Once;

use leadgen::config::Settings;
use leadgen::entities::{company, job_post};
use leadgen::{create_app, AppState};
use sea_orm::{
    ActiveValue::Set, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    Schema,
};

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Fresh in-memory database with both tables created from the entities.
pub async fn setup_db() -> DatabaseConnection {
    setup_tracing();

    // A single long-lived connection keeps the in-memory database alive.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(company::Entity)))
        .await
        .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(job_post::Entity)))
        .await
        .unwrap();
    db
}

pub fn company(co_rowid: i64, name: &str) -> company::Model {
    company::Model {
        co_rowid,
        company_name: name.to_string(),
        company_website: Some(format!("https://{}.example.com", co_rowid)),
        linkedin_company_url: None,
        is_profiled: Some(false),
        market_size: None,
        company_size: None,
        revenue_threshold: None,
        pain_points: None,
        buying_triggers: None,
        last_profiled_on: None,
    }
}

pub fn job(job_rowid: i64, co_rowid: i64, title: &str) -> job_post::Model {
    job_post::Model {
        job_rowid,
        co_rowid,
        job_title: Some(title.to_string()),
        job_type: Some("Full-time".to_string()),
        job_location: Some("Remote".to_string()),
        job_url: Some(format!("https://jobs.example.com/{}", job_rowid)),
        job_posted_at: Some("2 days ago".to_string()),
        job_source: Some("linkedin".to_string()),
        job_pay: None,
    }
}

pub async fn insert_company(db: &DatabaseConnection, model: company::Model) {
    let active = company::ActiveModel {
        co_rowid: Set(model.co_rowid),
        company_name: Set(model.company_name),
        company_website: Set(model.company_website),
        linkedin_company_url: Set(model.linkedin_company_url),
        is_profiled: Set(model.is_profiled),
        market_size: Set(model.market_size),
        company_size: Set(model.company_size),
        revenue_threshold: Set(model.revenue_threshold),
        pain_points: Set(model.pain_points),
        buying_triggers: Set(model.buying_triggers),
        last_profiled_on: Set(model.last_profiled_on),
    };
    company::Entity::insert(active)
        .exec_without_returning(db)
        .await
        .unwrap();
}

pub async fn insert_job(db: &DatabaseConnection, model: job_post::Model) {
    let active = job_post::ActiveModel {
        job_rowid: Set(model.job_rowid),
        co_rowid: Set(model.co_rowid),
        job_title: Set(model.job_title),
        job_type: Set(model.job_type),
        job_location: Set(model.job_location),
        job_url: Set(model.job_url),
        job_posted_at: Set(model.job_posted_at),
        job_source: Set(model.job_source),
        job_pay: Set(model.job_pay),
    };
    job_post::Entity::insert(active)
        .exec_without_returning(db)
        .await
        .unwrap();
}

/// Companies inserted under ids 1..=names.len(), in the given order.
pub async fn seed_companies(db: &DatabaseConnection, names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        insert_company(db, company(i as i64 + 1, name)).await;
    }
}

pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.app_name = "Lead Generation API".to_string();
    settings.version = "1.0.0".to_string();
    settings
}

pub fn test_app(db: DatabaseConnection) -> axum::Router {
    create_app(AppState::new(db, test_settings()))
}
