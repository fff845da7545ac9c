//! TypeScriptEx Lessons
//!
//! The thirty lesson units behind the menu. Most of them narrate a
//! TypeScript topic section by section; lessons 26 and 27 talk to a live
//! posts API through `tsex-fetch`.

pub mod api_client;
pub mod form_model;
pub mod narration;
mod scripts;

use tsex_core::{Config, LessonRegistry};
use tsex_fetch::PostsClient;

pub use api_client::ApiClientLesson;
pub use form_model::{validate, Field, FieldError, FormModelLesson, PostForm};
pub use narration::{NarratedLesson, Script, Section};

/// Builds the registry holding every lesson unit.
///
/// The live lessons use `config.api_base_url` as the API root.
#[must_use]
pub fn registry(config: &Config) -> LessonRegistry {
    let posts = PostsClient::new(config.api_base_url.clone());

    let mut registry = LessonRegistry::new();
    for &(id, script) in scripts::NARRATED {
        registry.register(id, NarratedLesson::new(id, script));
    }
    registry
        .register(26, ApiClientLesson::new(posts.clone()))
        .register(27, FormModelLesson::new(posts));

    tracing::debug!(count = registry.len(), "Registered lessons");
    registry
}

/// Narrated lesson for `id`, if there is one.
#[must_use]
pub fn narrated(id: u32) -> Option<NarratedLesson> {
    scripts::NARRATED
        .iter()
        .find(|(lesson_id, _)| *lesson_id == id)
        .map(|&(id, script)| NarratedLesson::new(id, script))
}
