//! Lesson 27: a type-safe form model that validates before submitting.

use std::fmt;

use async_trait::async_trait;
use tsex_core::{pause, Lesson, Session};
use tsex_fetch::{NewPost, PostsClient};

use crate::api_client::print_post;
use crate::narration::{code_block, goals, lesson_complete, lesson_header};

/// Minimum body length accepted by [`validate`].
pub const MIN_BODY_LEN: usize = 10;

const FORM_CODE: &str = r"type PostForm = { userId: number; title: string; body: string };
type FieldErrors<T> = Partial<Record<keyof T, string>>;

type Validation<T> =
  | { valid: true; value: T }
  | { valid: false; errors: FieldErrors<T> };";

const VALIDATE_CODE: &str = r#"function validate(form: PostForm): Validation<PostForm> {
  const errors: FieldErrors<PostForm> = {};
  if (form.userId <= 0) errors.userId = "userId must be a positive number";
  if (!form.title.trim()) errors.title = "title is required";
  if (form.body.trim().length < 10) errors.body = "body must be at least 10 characters";
  return Object.keys(errors).length ? { valid: false, errors } : { valid: true, value: form };
}"#;

/// Raw form input, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    /// Author id as typed; must be positive.
    pub user_id: i64,
    /// Title; must not be blank.
    pub title: String,
    /// Body; at least [`MIN_BODY_LEN`] characters after trimming.
    pub body: String,
}

/// Form field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `userId`
    UserId,
    /// `title`
    Title,
    /// `body`
    Body,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::UserId => "userId",
            Self::Title => "title",
            Self::Body => "body",
        })
    }
}

/// A validation failure on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field.
    pub field: Field,
    /// What is wrong with it.
    pub message: &'static str,
}

/// Checks `form` and turns it into a [`NewPost`], or lists every problem.
///
/// Title and body are trimmed in the result.
///
/// # Errors
///
/// Returns one [`FieldError`] per invalid field, in form order.
pub fn validate(form: &PostForm) -> Result<NewPost, Vec<FieldError>> {
    let mut errors = Vec::new();

    let user_id = u32::try_from(form.user_id).ok().filter(|id| *id > 0);
    if user_id.is_none() {
        errors.push(FieldError {
            field: Field::UserId,
            message: "userId must be a positive number",
        });
    }

    let title = form.title.trim();
    if title.is_empty() {
        errors.push(FieldError {
            field: Field::Title,
            message: "title is required",
        });
    }

    let body = form.body.trim();
    if body.chars().count() < MIN_BODY_LEN {
        errors.push(FieldError {
            field: Field::Body,
            message: "body must be at least 10 characters",
        });
    }

    match user_id {
        Some(user_id) if errors.is_empty() => Ok(NewPost {
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        }),
        _ => Err(errors),
    }
}

/// Walks through validating a bad form, then submitting a good one.
#[derive(Debug, Clone)]
pub struct FormModelLesson {
    posts: PostsClient,
}

impl FormModelLesson {
    /// Creates the lesson; valid forms are submitted through `posts`.
    #[must_use]
    pub const fn new(posts: PostsClient) -> Self {
        Self { posts }
    }

    fn invalid_form() -> PostForm {
        PostForm {
            user_id: 0,
            title: "   ".to_string(),
            body: "short".to_string(),
        }
    }

    fn valid_form() -> PostForm {
        PostForm {
            user_id: 1,
            title: "  Type-safe forms  ".to_string(),
            body: "Validated on the client before it is sent.".to_string(),
        }
    }

    async fn submit(&self, session: &mut dyn Session, form: &PostForm) -> anyhow::Result<()> {
        session.write_line(&format!(
            "📝 Form: userId={}, title={:?}, body={:?}",
            form.user_id, form.title, form.body
        ));
        match validate(form) {
            Err(errors) => {
                session.write_line("❌ Validation failed:");
                for error in &errors {
                    session.write_line(&format!("   {:<7}: {}", error.field, error.message));
                }
                session.blank();
            }
            Ok(post) => {
                session.write_line("✅ Validation passed, submitting...");
                let outcome = self.posts.create_post(&post).await;
                print_post(session, "Submitted post", outcome)?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Lesson for FormModelLesson {
    async fn run(&self, session: &mut dyn Session, title: &str) -> anyhow::Result<()> {
        lesson_header(session, 27, title);
        goals(
            session,
            &[
                "Model form state and per-field errors with types",
                "Validate before anything reaches the network",
            ],
        );

        code_block(session, "Form model", FORM_CODE);
        code_block(session, "validate()", VALIDATE_CODE);
        pause(session).await;

        self.submit(session, &Self::invalid_form()).await?;
        pause(session).await;

        self.submit(session, &Self::valid_form()).await?;

        lesson_complete(session);
        pause(session).await;
        Ok(())
    }
}
