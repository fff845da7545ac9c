//! Pause gate: blocks until the user acknowledges with Enter.

use std::ops::{Deref, DerefMut};

use crate::decor::Decor;
use crate::session::{Session, StdioSession};

/// Text shown while waiting for the user.
pub const CONTINUE_PROMPT: &str = "Press [Enter] to continue...";

/// Waits for one line on the shared session.
pub async fn pause(session: &mut dyn Session) {
    let decor = session.decor();
    wait_for_continue(Some(session), decor).await;
}

/// Waits for the user to press Enter.
///
/// With a session, the prompt goes through that channel and no second
/// reader is opened; its own decor marks the prompt. Without one, a
/// transient stdin session using `decor` is opened for the duration of the
/// call and closed before returning.
///
/// End of input and read errors both count as "continue".
pub async fn wait_for_continue(session: Option<&mut dyn Session>, decor: Decor) {
    wait_for_continue_with(session, transient_opener(decor)).await;
}

fn transient_opener(decor: Decor) -> impl FnOnce() -> StdioSession {
    move || StdioSession::transient(decor)
}

/// Like [`wait_for_continue`], but `open` builds the transient session.
pub async fn wait_for_continue_with<S, F>(session: Option<&mut dyn Session>, open: F)
where
    S: Session,
    F: FnOnce() -> S,
{
    match session {
        Some(shared) => prompt_once(shared).await,
        None => {
            let mut transient = Scoped(open());
            prompt_once(&mut *transient).await;
        }
    }
}

async fn prompt_once(session: &mut dyn Session) {
    session.blank();
    let prompt = session.decor().decorate(CONTINUE_PROMPT);
    match session.read_line(&prompt).await {
        Ok(Some(_)) => {}
        Ok(None) => tracing::debug!("End of input at pause prompt, continuing"),
        Err(e) => tracing::debug!(error = %e, "Pause read interrupted, continuing"),
    }
    session.blank();
}

/// Owns a session and closes it when dropped.
struct Scoped<S: Session>(S);

impl<S: Session> Deref for Scoped<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.0
    }
}

impl<S: Session> DerefMut for Scoped<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.0
    }
}

impl<S: Session> Drop for Scoped<S> {
    fn drop(&mut self) {
        self.0.close();
    }
}
