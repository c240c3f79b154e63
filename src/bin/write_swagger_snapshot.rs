// src/bin/write_swagger_snapshot.rs
use anyhow::Result;
use routedoc::config::AppConfig;
use routedoc::domain::book::BookStore;
use routedoc::infrastructure::InMemoryBookStore;
use routedoc::presentation::http::{docs::write_snapshot, routes::build_registrar};
use std::{path::Path, sync::Arc};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let store: Arc<dyn BookStore> = Arc::new(InMemoryBookStore::new());
    let registrar = build_registrar(store)?;
    let document = registrar.generate_document(config.swagger());

    write_snapshot(&document, Path::new(config.snapshot_path()))?;
    println!("Swagger snapshot written to {}", config.snapshot_path());
    Ok(())
}
