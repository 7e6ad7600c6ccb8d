//! Shared application state.

use std::sync::Arc;

use folio_core::visits::VisitCounter;
use folio_mdx::MdxCompiler;
use tokio::sync::broadcast;

use crate::{config::Config, visits};

/// Shared application state.
///
/// Cloned for each request handler. Holds no per-request data: content is
/// read and compiled fresh for every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub compiler: MdxCompiler,
    /// Visit counter collaborator.
    pub visits: Arc<dyn VisitCounter>,
    /// Shutdown signal sender for SSE connections.
    pub shutdown_tx: broadcast::Sender<()>,
    /// Dev mode reload signal sender (for browser auto-refresh).
    /// Only used in development mode.
    pub dev_reload_tx: broadcast::Sender<()>,
}

impl AppState {
    pub fn new(config: Config, visits: Arc<dyn VisitCounter>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        let (dev_reload_tx, _) = broadcast::channel(1);

        Self {
            config: Arc::new(config),
            compiler: MdxCompiler::new(),
            visits,
            shutdown_tx,
            dev_reload_tx,
        }
    }

    /// Creates the state with the visit counter backend named by `config`.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let visits = visits::from_config(&config)?;
        Ok(Self::new(config, visits))
    }

    /// Signal all SSE connections to close.
    pub fn signal_shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }

    pub fn subscribe_shutdown(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Tell connected browsers to reload.
    pub fn signal_dev_reload(&self) {
        let _ = self.dev_reload_tx.send(());
    }

    pub fn subscribe_dev_reload(&self) -> broadcast::Receiver<()> {
        self.dev_reload_tx.subscribe()
    }
}
