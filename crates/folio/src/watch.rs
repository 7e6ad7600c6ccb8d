//! Content watcher for development live reload.

use std::{path::Path, time::Duration};

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, DebouncedEventKind, Debouncer};

use crate::state::AppState;

const DEBOUNCE: Duration = Duration::from_millis(300);

/// Signals a dev reload whenever something under `content_dir` changes.
///
/// Watching stops when the returned debouncer is dropped.
pub fn watch_content(
    content_dir: &Path,
    state: AppState,
) -> notify::Result<Debouncer<RecommendedWatcher>> {
    let mut debouncer = new_debouncer(DEBOUNCE, move |result: DebounceEventResult| match result {
        Ok(events) => {
            let changed = events
                .iter()
                .filter(|e| matches!(e.kind, DebouncedEventKind::Any))
                .count();
            if changed > 0 {
                tracing::debug!(changed, "Content changed, reloading");
                state.signal_dev_reload();
            }
        }
        Err(e) => tracing::warn!(error = %e, "Content watcher error"),
    })?;

    debouncer
        .watcher()
        .watch(content_dir, RecursiveMode::Recursive)?;

    tracing::info!(dir = %content_dir.display(), "Watching content for changes");
    Ok(debouncer)
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::Arc};

    use super::*;
    use crate::{config::Config, visits::InMemoryVisitCounter};

    fn state(dir: &Path) -> AppState {
        AppState::new(Config::for_tests(dir), Arc::new(InMemoryVisitCounter::new()))
    }

    #[tokio::test]
    async fn test_file_change_sends_reload() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path());
        let mut rx = state.subscribe_dev_reload();
        let _debouncer = watch_content(dir.path(), state).unwrap();

        fs::write(dir.path().join("en.mdx"), "# Hello\n").unwrap();

        let received = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(matches!(received, Ok(Ok(()))));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let missing = Path::new("/does/not/exist/folio");
        assert!(watch_content(missing, state(missing)).is_err());
    }
}
