use anyhow::Result;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use crate::catalog::Catalog;
use crate::lsp::backend::Backend;
use crate::Config;

/// Start the LSP server on stdio
pub async fn serve() -> Result<()> {
    let config = Config::from_args_and_env()?;
    init_logging(&config);

    // Built once; requests only ever read it
    let catalog = Catalog::load(&config.catalog_paths);
    log::info!(
        "Serving with {} known components and {} attributes",
        catalog.components().len(),
        catalog.attributes().len()
    );

    let (service, socket) = LspService::build(move |client| Backend::new(client, catalog)).finish();

    Server::new(stdin(), stdout(), socket).serve(service).await;

    Ok(())
}

/// Log to stderr; stdout carries the protocol
fn init_logging(config: &Config) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    if let Err(e) = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .try_init()
    {
        eprintln!("Logger already initialized: {}", e);
    }
}
