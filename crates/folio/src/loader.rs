//! Post loader: reads, compiles and gates one content file per request.

use folio_core::{
    content::{content_file_path, RouteParams},
    loader::{check_publication, LoaderData, LoaderError, NotFoundCause},
    site::canonical_url,
};

use crate::state::AppState;

/// Loads the post addressed by `params`.
///
/// A missing content file fails before the visit counter is asked. The read
/// file is then compiled while the visit count for `visit_path` is fetched;
/// a compile or publication failure returns right away and wins over a visit
/// counter failure.
pub async fn load_post(
    state: &AppState,
    params: &RouteParams,
    visit_path: &str,
) -> Result<LoaderData, LoaderError> {
    let config = &state.config;

    let (lang, slug) = params.resolve(&config.default_lang).map_err(|e| {
        tracing::warn!(error = %e, "Rejected route parameters");
        LoaderError::not_found(&config.default_lang, NotFoundCause::InvalidRoute)
    })?;

    let path = content_file_path(&config.content_dir, &lang, &slug);
    let source = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Content file not readable");
        LoaderError::not_found(&lang, NotFoundCause::MissingContent)
    })?;

    let compiler = state.compiler;
    let compile = async {
        let compiled = tokio::task::spawn_blocking(move || compiler.compile(&source))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Compile task failed");
                LoaderError::not_found(&lang, NotFoundCause::CompileFailed)
            })?
            .map_err(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Content failed to compile");
                LoaderError::not_found(&lang, NotFoundCause::CompileFailed)
            })?;

        let frontmatter = compiled
            .frontmatter
            .clone()
            .with_route_defaults(&lang, &slug);
        check_publication(config.mode, &frontmatter, &lang).inspect_err(|_| {
            tracing::warn!(path = %path.display(), status = ?frontmatter.status, "Unpublished content hidden");
        })?;

        Ok::<_, LoaderError>((compiled, frontmatter))
    };
    let visits = state.visits.total_path_visits(visit_path);
    tokio::pin!(compile, visits);

    let ((compiled, frontmatter), total_path_visits) = tokio::select! {
        content = &mut compile => (content?, visits.await),
        total = &mut visits => (compile.await?, total),
    };

    let total_path_visits = total_path_visits.inspect_err(|e| {
        tracing::error!(path = visit_path, error = %e, "Visit count lookup failed");
    })?;

    let canonical = canonical_url(&config.site, &frontmatter);
    let jsonld = compiled.export("jsonld").cloned();

    Ok(LoaderData {
        frontmatter,
        code: compiled.code,
        canonical,
        total_path_visits,
        jsonld,
    })
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::Path,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };

    use async_trait::async_trait;
    use folio_core::{
        content::Lang,
        site::RuntimeMode,
        visits::{VisitCounter, VisitError},
    };
    use serde_json::json;

    use super::*;
    use crate::{config::Config, visits::InMemoryVisitCounter};

    struct FailingCounter;

    #[async_trait]
    impl VisitCounter for FailingCounter {
        async fn total_path_visits(&self, _path: &str) -> Result<u64, VisitError> {
            Err(VisitError::Unavailable("down".to_string()))
        }
    }

    #[derive(Default)]
    struct CountingCounter {
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl VisitCounter for CountingCounter {
        async fn total_path_visits(&self, _path: &str) -> Result<u64, VisitError> {
            Ok(self.lookups.fetch_add(1, Ordering::SeqCst) as u64 + 1)
        }
    }

    struct HangingCounter;

    #[async_trait]
    impl VisitCounter for HangingCounter {
        async fn total_path_visits(&self, _path: &str) -> Result<u64, VisitError> {
            std::future::pending().await
        }
    }

    fn write(root: &Path, slug: &str, lang: &str, source: &str) {
        let dir = root.join(slug);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{lang}.mdx")), source).unwrap();
    }

    fn state(root: &Path, mode: RuntimeMode) -> AppState {
        let mut config = Config::for_tests(root);
        config.mode = mode;
        AppState::new(config, Arc::new(InMemoryVisitCounter::new()))
    }

    const HELLO: &str = "---\ntitle: Hello\nstatus: published\n---\n\nexport const jsonld = {\"@type\": \"BlogPosting\"}\n\n# Hello\n";
    const DRAFT: &str = "---\ntitle: Draft\nstatus: draft\n---\n\n# Draft\n";

    #[tokio::test]
    async fn test_loads_published_post() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "hello", "en", HELLO);
        let state = state(dir.path(), RuntimeMode::Production);

        let data = load_post(&state, &RouteParams::new(Some("en"), Some("hello")), "/en/hello")
            .await
            .unwrap();

        assert_eq!(data.frontmatter.title.as_deref(), Some("Hello"));
        assert_eq!(data.frontmatter.lang, "en");
        assert_eq!(data.frontmatter.slug, "/hello");
        assert_eq!(data.canonical, "https://example.com/en/hello");
        assert_eq!(data.total_path_visits, 1);
        assert_eq!(data.jsonld, Some(json!({"@type": "BlogPosting"})));
        assert!(data.code.contains("# Hello"));
    }

    #[tokio::test]
    async fn test_defaults_to_default_lang_and_index() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "index", "en", "---\nstatus: published\n---\n# Home\n");
        let state = state(dir.path(), RuntimeMode::Production);

        let data = load_post(&state, &RouteParams::default(), "/").await.unwrap();

        assert_eq!(data.frontmatter.slug, "/index");
        assert_eq!(data.canonical, "https://example.com/en/index");
    }

    #[tokio::test]
    async fn test_missing_content_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path(), RuntimeMode::Production);

        let result = load_post(&state, &RouteParams::new(Some("es"), Some("nope")), "/es/nope").await;

        assert_eq!(
            result,
            Err(LoaderError::not_found(
                &Lang::parse("es").unwrap(),
                NotFoundCause::MissingContent
            ))
        );
    }

    #[tokio::test]
    async fn test_invalid_frontmatter_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "broken", "en", "---\ntitle: [oops\n---\n# Broken\n");
        let state = state(dir.path(), RuntimeMode::Development);

        let result = load_post(&state, &RouteParams::new(Some("en"), Some("broken")), "/en/broken").await;

        assert!(matches!(
            result,
            Err(LoaderError::NotFound { cause: NotFoundCause::CompileFailed, .. })
        ));
    }

    #[tokio::test]
    async fn test_traversal_is_rejected_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path(), RuntimeMode::Development);

        let result = load_post(&state, &RouteParams::new(Some("en"), Some("..")), "/en/..").await;

        assert!(matches!(
            result,
            Err(LoaderError::NotFound { cause: NotFoundCause::InvalidRoute, .. })
        ));
    }

    #[tokio::test]
    async fn test_drafts_are_hidden_in_production_only() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "draft", "en", DRAFT);
        let params = RouteParams::new(Some("en"), Some("draft"));

        let production = state(dir.path(), RuntimeMode::Production);
        assert!(matches!(
            load_post(&production, &params, "/en/draft").await,
            Err(LoaderError::NotFound { cause: NotFoundCause::Unpublished, .. })
        ));

        let development = state(dir.path(), RuntimeMode::Development);
        let data = load_post(&development, &params, "/en/draft").await.unwrap();
        assert_eq!(data.frontmatter.title.as_deref(), Some("Draft"));
    }

    #[tokio::test]
    async fn test_visit_failure_is_reported_after_content_checks() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "hello", "en", HELLO);
        let state = AppState::new(Config::for_tests(dir.path()), Arc::new(FailingCounter));

        let found = load_post(&state, &RouteParams::new(Some("en"), Some("hello")), "/en/hello").await;
        assert!(matches!(found, Err(LoaderError::VisitCount(_))));

        let missing = load_post(&state, &RouteParams::new(Some("en"), Some("gone")), "/en/gone").await;
        assert!(matches!(missing, Err(LoaderError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_missing_content_skips_visit_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let counter = Arc::new(CountingCounter::default());
        let state = AppState::new(Config::for_tests(dir.path()), counter.clone());

        for slug in ["nope0", "nope1", "nope2"] {
            let result = load_post(&state, &RouteParams::new(Some("en"), Some(slug)), "/en/nope").await;
            assert!(matches!(
                result,
                Err(LoaderError::NotFound { cause: NotFoundCause::MissingContent, .. })
            ));
        }
        assert_eq!(counter.lookups.load(Ordering::SeqCst), 0);

        write(dir.path(), "hello", "en", HELLO);
        load_post(&state, &RouteParams::new(Some("en"), Some("hello")), "/en/hello")
            .await
            .unwrap();
        assert_eq!(counter.lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_compile_failure_does_not_wait_for_visits() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "broken", "en", "---\ntitle: [oops\n---\n# Broken\n");
        write(dir.path(), "draft", "en", DRAFT);
        let state = AppState::new(Config::for_tests(dir.path()), Arc::new(HangingCounter));

        for slug in ["broken", "draft"] {
            let result = tokio::time::timeout(
                Duration::from_secs(5),
                load_post(&state, &RouteParams::new(Some("en"), Some(slug)), "/en/x"),
            )
            .await
            .expect("loader waited for the visit counter");
            assert!(matches!(result, Err(LoaderError::NotFound { .. })), "{slug}");
        }
    }
}
