use std::path::Path;

use tracing::debug;

use crate::{
    config::LocationConfig, document, error::RefreshError, provider::ForecastProvider,
    render::render,
};

/// Whether a refresh may touch the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Write,
    /// Render and compare only.
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// The document was (or, in a dry run, would be) rewritten.
    pub changed: bool,
    /// The rendered card, without sentinels.
    pub block: String,
}

/// Fetch, render and splice the card into the document at `path`.
pub async fn refresh(
    provider: &dyn ForecastProvider,
    location: &LocationConfig,
    path: &Path,
    mode: Mode,
) -> Result<RefreshOutcome, RefreshError> {
    let forecast = provider.fetch(location).await?;
    let block = render(&forecast, location);
    debug!(lines = block.lines().count(), "Rendered weather card");

    let changed = match mode {
        Mode::Write => document::update(path, &block)?,
        Mode::DryRun => document::preview(path, &block)?,
    };

    Ok(RefreshOutcome { changed, block })
}
