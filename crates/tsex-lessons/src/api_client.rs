//! Lesson 26: a type-safe API client, run live against the posts API.

use async_trait::async_trait;
use tsex_core::{pause, Lesson, Session};
use tsex_fetch::{describe_posts, FetchOutcome, NewPost, Post, PostsClient};

use crate::narration::{code_block, goals, lesson_complete, lesson_header};

const MODEL_CODE: &str = r"interface Post {
  userId: number;
  id: number;
  title: string;
  body: string;
}

type ApiResult<T> =
  | { ok: true; status: number; data: T }
  | { ok: false; status: number; error: string };";

const REQUEST_CODE: &str = r#"async function requestJson<T>(url: string, init?: RequestInit): Promise<ApiResult<T>> {
  try {
    const res = await fetch(url, {
      ...init,
      headers: { "Content-Type": "application/json; charset=utf-8", ...init?.headers },
    });
    const body = await res.json().catch(() => null);
    if (!res.ok) {
      return { ok: false, status: res.status, error: body?.error ?? `HTTP Error: ${res.status}` };
    }
    return { ok: true, status: res.status, data: body as T };
  } catch (e) {
    return { ok: false, status: 0, error: e instanceof Error ? e.message : "Unknown fetch error (network?)" };
  }
}"#;

/// Post id fetched in the single-post step.
const SAMPLE_POST_ID: u32 = 1;

/// Demonstrates listing, fetching and creating posts.
///
/// Every request failure is printed as part of the lesson; none of them
/// end the lesson early.
#[derive(Debug, Clone)]
pub struct ApiClientLesson {
    posts: PostsClient,
}

impl ApiClientLesson {
    /// Creates the lesson against `posts`.
    #[must_use]
    pub const fn new(posts: PostsClient) -> Self {
        Self { posts }
    }

    /// The post created in the last step.
    #[must_use]
    pub fn sample_post() -> NewPost {
        NewPost {
            user_id: 999,
            title: "Hello from TypeScriptEx".to_string(),
            body: "Created by the type-safe API client lesson.".to_string(),
        }
    }
}

#[async_trait]
impl Lesson for ApiClientLesson {
    async fn run(&self, session: &mut dyn Session, title: &str) -> anyhow::Result<()> {
        lesson_header(session, 26, title);
        goals(
            session,
            &[
                "Describe API payloads with interfaces",
                "Wrap fetch so every outcome is a typed value",
                "Call GET /posts, GET /posts/:id and POST /posts",
            ],
        );

        code_block(session, "Response model", MODEL_CODE);
        code_block(session, "requestJson<T>", REQUEST_CODE);
        session.write_line(&format!("🌐 Using {}", self.posts.posts_url()));
        pause(session).await;

        session.write_line("1) GET /posts");
        let listing = self.posts.get_posts().await;
        for line in describe_posts(&listing) {
            session.write_line(&line);
        }
        pause(session).await;

        session.write_line(&format!("2) GET /posts/{SAMPLE_POST_ID}"));
        let single = self.posts.get_post_by_id(SAMPLE_POST_ID).await;
        print_post(session, "Fetched post", single)?;
        pause(session).await;

        session.write_line("3) POST /posts");
        let created = self.posts.create_post(&Self::sample_post()).await;
        print_post(session, "Created post", created)?;

        lesson_complete(session);
        pause(session).await;
        Ok(())
    }
}

/// Prints one post outcome as pretty JSON, or its failure.
pub(crate) fn print_post(
    session: &mut dyn Session,
    label: &str,
    outcome: FetchOutcome<Post>,
) -> anyhow::Result<()> {
    let status = outcome.status();
    match outcome.into_result() {
        Ok(post) => {
            session.write_line(&format!("✅ {label} (status {status}):"));
            let json = serde_json::to_string_pretty(&post)?;
            for line in json.lines() {
                session.write_line(&format!("   {line}"));
            }
        }
        Err((status, message)) => {
            tracing::debug!(status, %message, "Request failed during lesson");
            session.write_line(&format!("❌ {label} failed:"));
            session.write_line(&format!("   status : {status}"));
            session.write_line(&format!("   error  : {message}"));
        }
    }
    session.blank();
    Ok(())
}
