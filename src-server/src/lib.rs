//! Inspection Template Server
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and SQLite implementations
//! - commands: Operations exposed to clients
//! - http: JSON routes over the commands

use std::sync::Arc;

use anyhow::{Context, Result};

pub mod config;
pub mod domain;
pub mod repository;
mod commands;
mod http;

pub use commands::{Checklists, ItemKind, Sections, Subsections};
pub use http::{app_router, ErrorPayload};

use config::AppConfig;
use repository::{init_db, ChecklistRepository, DbState, SectionRepository, SubsectionRepository, TemplateRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_state: DbState,
    pub sections: Arc<SectionRepository>,
    pub subsections: Arc<SubsectionRepository>,
    pub checklists: Arc<ChecklistRepository>,
    pub templates: Arc<TemplateRepository>,
}

impl AppState {
    pub fn new(db_state: DbState) -> Self {
        Self {
            sections: Arc::new(SectionRepository::new(db_state.conn.clone())),
            subsections: Arc::new(SubsectionRepository::new(db_state.conn.clone())),
            checklists: Arc::new(ChecklistRepository::new(db_state.conn.clone())),
            templates: Arc::new(TemplateRepository::new(db_state.conn.clone())),
            db_state,
        }
    }
}

/// Load config, install logging, open the database and serve until Ctrl-C
pub fn run() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    rolling_logger::init_logger(config.log_dir.clone(), &config.app_name).context("failed to init rolling logger")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build server runtime")?;

    let result = runtime.block_on(serve(config));
    if let Err(e) = &result {
        let _ = rolling_logger::error(&format!("server stopped: {e:#}"));
    }
    result
}

async fn serve(config: AppConfig) -> Result<()> {
    let db_state = init_db(&config.database_path)
        .await
        .with_context(|| format!("failed to open database at {}", config.database_path.display()))?;
    let _ = rolling_logger::info("DB init success");

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind server at {}", config.bind_addr))?;
    log::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app_router(AppState::new(db_state)))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            log::info!("shutdown requested");
        })
        .await
        .context("server failed")
}
