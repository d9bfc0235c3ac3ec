//! After-change hooks for global documents.
//!
//! Run once a global save has been persisted. Hooks only talk to the
//! [`Revalidator`]; their failures are logged and never undo or fail the
//! save.

use sava_core::globals::{GlobalSlug, SEO_REVALIDATE_PATHS};

use crate::revalidation::Revalidator;

/// Per-save context supplied by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct HookContext {
    /// Skip cache invalidation for this save (bulk imports, seeding).
    pub disable_revalidate: bool,
}

/// Outcome of a hook run, mostly useful for logging and tests.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RevalidationReport {
    pub revalidated: Vec<String>,
    pub failed: Vec<String>,
    pub skipped: bool,
}

/// Dispatch to the hook registered for `slug`.
pub async fn after_change(
    slug: GlobalSlug,
    ctx: HookContext,
    revalidator: &dyn Revalidator,
) -> RevalidationReport {
    match slug {
        GlobalSlug::Landing => revalidate_landing(ctx, revalidator).await,
        GlobalSlug::Seo => revalidate_seo(revalidator).await,
    }
}

/// Invalidate the `global_landing` cache tag unless the save opted out.
pub async fn revalidate_landing(
    ctx: HookContext,
    revalidator: &dyn Revalidator,
) -> RevalidationReport {
    let mut report = RevalidationReport::default();
    if ctx.disable_revalidate {
        tracing::debug!("Landing revalidation disabled for this save");
        report.skipped = true;
        return report;
    }

    let tag = GlobalSlug::Landing.cache_tag();
    tracing::info!(tag = %tag, "Revalidating landing");
    match revalidator.revalidate_tag(&tag).await {
        Ok(()) => report.revalidated.push(tag),
        Err(e) => {
            tracing::error!(tag = %tag, error = %e, "Landing revalidation failed");
            report.failed.push(tag);
        }
    }
    report
}

/// Invalidate every page that renders SEO metadata. Each path is attempted
/// even if an earlier one failed.
pub async fn revalidate_seo(revalidator: &dyn Revalidator) -> RevalidationReport {
    let mut report = RevalidationReport::default();
    for path in SEO_REVALIDATE_PATHS {
        match revalidator.revalidate_path(path).await {
            Ok(()) => report.revalidated.push((*path).to_string()),
            Err(e) => {
                tracing::error!(path, error = %e, "SEO revalidation failed");
                report.failed.push((*path).to_string());
            }
        }
    }
    tracing::info!(
        revalidated = report.revalidated.len(),
        failed = report.failed.len(),
        "SEO revalidation finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::revalidation::RevalidateError;

    /// Records every call; fails paths listed in `fail_paths`.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
        fail_paths: Vec<&'static str>,
    }

    #[async_trait]
    impl Revalidator for Recorder {
        async fn revalidate_tag(&self, tag: &str) -> Result<(), RevalidateError> {
            self.calls.lock().unwrap().push(format!("tag:{tag}"));
            Ok(())
        }

        async fn revalidate_path(&self, path: &str) -> Result<(), RevalidateError> {
            self.calls.lock().unwrap().push(format!("path:{path}"));
            if self.fail_paths.contains(&path) {
                return Err(RevalidateError::HttpStatus(500));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn landing_invalidates_its_tag() {
        let recorder = Recorder::default();
        let report = after_change(GlobalSlug::Landing, HookContext::default(), &recorder).await;

        assert_eq!(*recorder.calls.lock().unwrap(), vec!["tag:global_landing"]);
        assert_eq!(report.revalidated, vec!["global_landing"]);
        assert!(!report.skipped);
    }

    #[tokio::test]
    async fn landing_respects_disable_flag() {
        let recorder = Recorder::default();
        let ctx = HookContext {
            disable_revalidate: true,
        };
        let report = after_change(GlobalSlug::Landing, ctx, &recorder).await;

        assert!(recorder.calls.lock().unwrap().is_empty());
        assert!(report.skipped);
    }

    #[tokio::test]
    async fn seo_revalidates_all_paths() {
        let recorder = Recorder::default();
        let report = after_change(GlobalSlug::Seo, HookContext::default(), &recorder).await;

        assert_eq!(
            *recorder.calls.lock().unwrap(),
            vec!["path:/", "path:/posts", "path:/search"]
        );
        assert!(report.failed.is_empty());
    }

    #[tokio::test]
    async fn seo_continues_after_a_failure() {
        let recorder = Recorder {
            fail_paths: vec!["/"],
            ..Default::default()
        };
        let report = revalidate_seo(&recorder).await;

        assert_eq!(recorder.calls.lock().unwrap().len(), 3);
        assert_eq!(report.failed, vec!["/"]);
        assert_eq!(report.revalidated, vec!["/posts", "/search"]);
    }

    #[tokio::test]
    async fn seo_ignores_disable_flag() {
        let recorder = Recorder::default();
        let ctx = HookContext {
            disable_revalidate: true,
        };
        after_change(GlobalSlug::Seo, ctx, &recorder).await;
        assert_eq!(recorder.calls.lock().unwrap().len(), 3);
    }
}
