//! Lesson dispatch and failure isolation.
//!
//! Lesson units are registered in a static table keyed by lesson id. The
//! runner resolves an id through the [`Catalog`], invokes the unit with the
//! shared session, and turns every failure into a [`RunOutcome`] so that a
//! broken lesson can never take the menu down.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;

use crate::catalog::{unit_name, Catalog};
use crate::session::Session;

/// An executable lesson.
///
/// Units receive the shared session by reference and must not close it.
#[async_trait]
pub trait Lesson: Send + Sync {
    /// Runs the lesson to completion.
    async fn run(&self, session: &mut dyn Session, title: &str) -> anyhow::Result<()>;
}

/// Static registration table mapping lesson ids to units.
#[derive(Clone, Default)]
pub struct LessonRegistry {
    units: BTreeMap<u32, Arc<dyn Lesson>>,
}

impl LessonRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `lesson` under `id`, replacing any earlier unit.
    pub fn register(&mut self, id: u32, lesson: impl Lesson + 'static) -> &mut Self {
        if self.units.insert(id, Arc::new(lesson)).is_some() {
            tracing::warn!(id, unit = %unit_name(id), "Replacing registered lesson unit");
        }
        self
    }

    /// Builder form of [`LessonRegistry::register`].
    #[must_use]
    pub fn with(mut self, id: u32, lesson: impl Lesson + 'static) -> Self {
        self.register(id, lesson);
        self
    }

    /// Returns the unit registered for `id`.
    #[must_use]
    pub fn resolve(&self, id: u32) -> Option<Arc<dyn Lesson>> {
        self.units.get(&id).cloned()
    }

    /// Registered ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<u32> {
        self.units.keys().copied().collect()
    }

    /// Number of registered units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl fmt::Debug for LessonRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessonRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

/// What happened when the runner was asked to run a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The id is not in the catalog. Nothing was invoked.
    InvalidSelection,
    /// The id is in the catalog but no unit is registered for it.
    MissingUnit {
        /// Conventional unit name, e.g. `lesson07`.
        unit: String,
    },
    /// The lesson ran to completion.
    Completed,
    /// The lesson returned an error.
    Failed {
        /// The error message, including its causes.
        message: String,
    },
    /// The lesson panicked.
    Panicked {
        /// The panic message, when it was a string.
        detail: Option<String>,
    },
}

impl RunOutcome {
    /// Returns `true` if the lesson ran to completion.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Message shown for an id that is not in the catalog.
pub const INVALID_SELECTION: &str = "Invalid lesson number.";

/// Resolves lesson ids and invokes their units.
#[derive(Debug, Clone)]
pub struct LessonRunner {
    catalog: Catalog,
    registry: LessonRegistry,
}

impl LessonRunner {
    /// Creates a runner over `catalog` and `registry`.
    #[must_use]
    pub fn new(catalog: Catalog, registry: LessonRegistry) -> Self {
        for entry in catalog.all() {
            if registry.resolve(entry.id).is_none() {
                tracing::debug!(id = entry.id, unit = %entry.unit_name(), "Catalog entry has no unit");
            }
        }
        Self { catalog, registry }
    }

    /// The catalog this runner resolves against.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs lesson `id` on `session`.
    ///
    /// Always returns normally; failures are reported on the session and
    /// described by the returned [`RunOutcome`].
    pub async fn run(&self, id: u32, session: &mut dyn Session) -> RunOutcome {
        let Some(meta) = self.catalog.find_by_id(id) else {
            tracing::debug!(id, "Selection not in catalog");
            session.write_line(&format!("⚠️ {INVALID_SELECTION}"));
            return RunOutcome::InvalidSelection;
        };

        let unit = meta.unit_name();
        let Some(lesson) = self.registry.resolve(id) else {
            tracing::warn!(id, unit = %unit, "No lesson unit registered");
            session.write_line(&format!("⚠️ No lesson unit named '{unit}' is registered."));
            return RunOutcome::MissingUnit { unit };
        };

        session.blank();
        session.write_line(&format!("[Run] {id}. {}", meta.title));
        session.blank();

        tracing::debug!(id, unit = %unit, "Running lesson");
        let result = AssertUnwindSafe(lesson.run(session, meta.title))
            .catch_unwind()
            .await;

        match result {
            Ok(Ok(())) => {
                tracing::debug!(id, unit = %unit, "Lesson completed");
                RunOutcome::Completed
            }
            Ok(Err(e)) => {
                let message = format!("{e:#}");
                tracing::warn!(id, unit = %unit, error = %message, "Lesson failed");
                session.write_line(&format!("❌ Error while running {unit}: {message}"));
                RunOutcome::Failed { message }
            }
            Err(payload) => {
                let detail = panic_detail(payload.as_ref());
                tracing::warn!(id, unit = %unit, detail = ?detail, "Lesson panicked");
                match &detail {
                    Some(text) => session.write_line(&format!("❌ Unknown error in {unit}: {text}")),
                    None => session.write_line(&format!("❌ Unknown error in {unit}")),
                }
                RunOutcome::Panicked { detail }
            }
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::catalog::LessonDescriptor;
    use crate::session::ScriptedSession;

    struct Counting(Arc<AtomicUsize>);

    #[async_trait]
    impl Lesson for Counting {
        async fn run(&self, session: &mut dyn Session, title: &str) -> anyhow::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            session.write_line(&format!("running {title}"));
            Ok(())
        }
    }

    struct Failing;

    #[async_trait]
    impl Lesson for Failing {
        async fn run(&self, _session: &mut dyn Session, _title: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("boom").context("lesson setup"))
        }
    }

    struct Panicking;

    #[async_trait]
    impl Lesson for Panicking {
        async fn run(&self, _session: &mut dyn Session, _title: &str) -> anyhow::Result<()> {
            tokio::task::yield_now().await;
            panic!("lesson exploded");
        }
    }

    fn small_catalog() -> Catalog {
        Catalog::from_entries(vec![
            LessonDescriptor::new(1, "One"),
            LessonDescriptor::new(2, "Two"),
            LessonDescriptor::new(3, "Three"),
            LessonDescriptor::new(4, "Four"),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_runs_registered_lesson_with_title() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = LessonRegistry::new().with(1, Counting(Arc::clone(&calls)));
        let runner = LessonRunner::new(small_catalog(), registry);
        let mut session = ScriptedSession::new(Vec::<String>::new());

        let outcome = runner.run(1, &mut session).await;

        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let transcript = session.transcript();
        assert!(transcript.contains("[Run] 1. One"));
        assert!(transcript.contains("running One"));
    }

    #[tokio::test]
    async fn test_unknown_id_invokes_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = LessonRegistry::new().with(1, Counting(Arc::clone(&calls)));
        let runner = LessonRunner::new(small_catalog(), registry);
        let mut session = ScriptedSession::new(Vec::<String>::new());

        let outcome = runner.run(31, &mut session).await;

        assert_eq!(outcome, RunOutcome::InvalidSelection);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(session.transcript().contains(INVALID_SELECTION));
    }

    #[tokio::test]
    async fn test_missing_unit_is_reported() {
        let runner = LessonRunner::new(small_catalog(), LessonRegistry::new());
        let mut session = ScriptedSession::new(Vec::<String>::new());

        let outcome = runner.run(2, &mut session).await;

        assert_eq!(
            outcome,
            RunOutcome::MissingUnit {
                unit: "lesson02".to_string()
            }
        );
        assert!(session.transcript().contains("lesson02"));
    }

    #[tokio::test]
    async fn test_error_is_isolated_with_message() {
        let registry = LessonRegistry::new().with(3, Failing);
        let runner = LessonRunner::new(small_catalog(), registry);
        let mut session = ScriptedSession::new(Vec::<String>::new());

        let outcome = runner.run(3, &mut session).await;

        assert_eq!(
            outcome,
            RunOutcome::Failed {
                message: "lesson setup: boom".to_string()
            }
        );
        assert!(session.transcript().contains("❌ Error while running lesson03"));
    }

    #[tokio::test]
    async fn test_panic_is_isolated() {
        let registry = LessonRegistry::new().with(4, Panicking);
        let runner = LessonRunner::new(small_catalog(), registry);
        let mut session = ScriptedSession::new(Vec::<String>::new());

        let outcome = runner.run(4, &mut session).await;

        assert_eq!(
            outcome,
            RunOutcome::Panicked {
                detail: Some("lesson exploded".to_string())
            }
        );
        assert!(session.transcript().contains("Unknown error in lesson04"));

        // The runner is still usable afterwards.
        assert_eq!(runner.run(99, &mut session).await, RunOutcome::InvalidSelection);
    }

    #[test]
    fn test_registry_replaces_and_lists_ids() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = LessonRegistry::new();
        registry
            .register(2, Counting(Arc::clone(&calls)))
            .register(1, Failing)
            .register(2, Failing);

        assert_eq!(registry.ids(), vec![1, 2]);
        assert_eq!(registry.len(), 2);
        assert!(registry.resolve(3).is_none());
    }

    #[test]
    fn test_panic_detail_variants() {
        let static_payload: Box<dyn Any + Send> = Box::new("static");
        let owned_payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let other_payload: Box<dyn Any + Send> = Box::new(42_u8);

        assert_eq!(panic_detail(static_payload.as_ref()).as_deref(), Some("static"));
        assert_eq!(panic_detail(owned_payload.as_ref()).as_deref(), Some("owned"));
        assert_eq!(panic_detail(other_payload.as_ref()), None);
    }
}
