//! Client for the JSONPlaceholder `/posts` resource.

use serde::{Deserialize, Serialize};

use crate::{FetchClient, FetchOutcome, RequestSpec};

/// Public base URL of JSONPlaceholder.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// How many posts [`describe_posts`] lists.
const PREVIEW_COUNT: usize = 3;

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Author id.
    pub user_id: u32,
    /// Post id.
    pub id: u32,
    /// Title.
    pub title: String,
    /// Body text.
    pub body: String,
}

/// A post to create; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    /// Author id.
    pub user_id: u32,
    /// Title.
    pub title: String,
    /// Body text.
    pub body: String,
}

/// Typed wrappers over `GET /posts`, `GET /posts/{id}` and `POST /posts`.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
    fetch: FetchClient,
}

impl Default for PostsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PostsClient {
    /// Creates a client for the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            fetch: FetchClient::new(),
        }
    }

    /// URL of the posts collection.
    #[must_use]
    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url.trim_end_matches('/'))
    }

    /// Fetches all posts.
    pub async fn get_posts(&self) -> FetchOutcome<Vec<Post>> {
        self.fetch.request(&RequestSpec::get(self.posts_url())).await
    }

    /// Fetches one post.
    pub async fn get_post_by_id(&self, id: u32) -> FetchOutcome<Post> {
        let url = format!("{}/{id}", self.posts_url());
        self.fetch.request(&RequestSpec::get(url)).await
    }

    /// Creates a post.
    pub async fn create_post(&self, post: &NewPost) -> FetchOutcome<Post> {
        let spec = RequestSpec::post(self.posts_url()).with_json(post);
        self.fetch.request(&spec).await
    }
}

/// Renders a posts listing as console lines: status, total, and the first
/// few posts; or the failure status and message.
#[must_use]
pub fn describe_posts(outcome: &FetchOutcome<Vec<Post>>) -> Vec<String> {
    match outcome {
        FetchOutcome::Failure { status, message } => vec![
            "❌ Failed to fetch posts:".to_string(),
            format!("   status : {status}"),
            format!("   error  : {message}"),
        ],
        FetchOutcome::Success { status, payload } => {
            let mut lines = vec![
                "✅ Fetched posts!".to_string(),
                format!("   status: {status}"),
                format!("   total : {}", payload.len()),
                String::new(),
            ];
            for post in payload.iter().take(PREVIEW_COUNT) {
                lines.push(format!("- [{}] userId={}", post.id, post.user_id));
                lines.push(format!("  title: {}", post.title));
                lines.push(String::new());
            }
            lines
        }
    }
}
