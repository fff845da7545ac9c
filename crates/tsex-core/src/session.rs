//! The interactive input/output channel shared by the menu and every lesson.
//!
//! Exactly one [`Session`] is created per process run. The menu loop owns
//! it and lends it to lessons and to the pause gate as `&mut dyn Session`,
//! so no two reads can ever be in flight at once.

use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::decor::Decor;

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// A line-oriented interactive channel.
#[async_trait]
pub trait Session: Send {
    /// Writes one line of output.
    fn write_line(&mut self, line: &str);

    /// Prints `prompt` without a newline and waits for one line of input.
    ///
    /// Returns `Ok(None)` at end of input or once the session is closed.
    async fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>>;

    /// Returns the marker picker used for decorated lines.
    fn decor(&self) -> Decor;

    /// Releases the underlying input channel. Later reads return `Ok(None)`.
    fn close(&mut self);

    /// Clears the screen when the channel supports it.
    fn clear(&mut self) {}

    /// Writes an empty line.
    fn blank(&mut self) {
        self.write_line("");
    }

    /// Writes `text` prefixed with a marker from [`Session::decor`].
    fn announce(&mut self, text: &str) {
        let line = self.decor().decorate(text);
        self.write_line(&line);
    }
}

// ============================================================================
// StdioSession
// ============================================================================

/// Session over the process's stdin and stdout.
pub struct StdioSession {
    lines: Option<Lines<BufReader<Stdin>>>,
    decor: Decor,
    clear_screen: bool,
}

impl StdioSession {
    /// Opens a session over stdin/stdout.
    #[must_use]
    pub fn new(decor: Decor, clear_screen: bool) -> Self {
        tracing::debug!("Opening stdin session");
        Self {
            lines: Some(BufReader::new(tokio::io::stdin()).lines()),
            decor,
            clear_screen,
        }
    }

    /// Opens a short-lived session for a single prompt.
    ///
    /// Never clears the screen.
    #[must_use]
    pub fn transient(decor: Decor) -> Self {
        Self::new(decor, false)
    }
}

#[async_trait]
impl Session for StdioSession {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }

    async fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };

        let mut stdout = std::io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        lines.next_line().await
    }

    fn decor(&self) -> Decor {
        self.decor
    }

    fn close(&mut self) {
        if self.lines.take().is_some() {
            tracing::debug!("Closed stdin session");
        }
    }

    fn clear(&mut self) {
        if self.clear_screen {
            print!("{CLEAR_SCREEN}");
        }
    }
}

impl Drop for StdioSession {
    fn drop(&mut self) {
        self.close();
    }
}

// ============================================================================
// ScriptedSession
// ============================================================================

/// In-memory session fed from a fixed list of input lines.
///
/// Everything written to it is recorded in a shared [`Transcript`], which
/// stays readable after the session itself has been moved or dropped.
pub struct ScriptedSession {
    inputs: VecDeque<String>,
    decor: Decor,
    fail_when_exhausted: bool,
    closed: bool,
    transcript: Transcript,
}

impl ScriptedSession {
    /// Creates a session that answers reads with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            decor: Decor::Plain,
            fail_when_exhausted: false,
            closed: false,
            transcript: Transcript::default(),
        }
    }

    /// Uses `decor` instead of plain output.
    #[must_use]
    pub const fn with_decor(mut self, decor: Decor) -> Self {
        self.decor = decor;
        self
    }

    /// Makes reads fail with an I/O error once the inputs run out,
    /// instead of reporting end of input.
    #[must_use]
    pub const fn failing_when_exhausted(mut self) -> Self {
        self.fail_when_exhausted = true;
        self
    }

    /// Returns a handle to this session's transcript.
    #[must_use]
    pub fn transcript(&self) -> Transcript {
        self.transcript.clone()
    }

    /// Number of inputs not yet consumed.
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

#[async_trait]
impl Session for ScriptedSession {
    fn write_line(&mut self, line: &str) {
        self.transcript.lock().lines.push(line.to_string());
    }

    async fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }

        self.transcript.lock().prompts.push(prompt.to_string());
        match self.inputs.pop_front() {
            Some(line) => Ok(Some(line)),
            None if self.fail_when_exhausted => Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "scripted input exhausted",
            )),
            None => Ok(None),
        }
    }

    fn decor(&self) -> Decor {
        self.decor
    }

    fn close(&mut self) {
        self.closed = true;
        self.transcript.lock().closes += 1;
    }

    fn clear(&mut self) {
        self.transcript.lock().clears += 1;
    }
}

/// Shared record of what a [`ScriptedSession`] saw.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    inner: Arc<Mutex<TranscriptInner>>,
}

#[derive(Debug, Default)]
struct TranscriptInner {
    lines: Vec<String>,
    prompts: Vec<String>,
    clears: usize,
    closes: usize,
}

impl Transcript {
    fn lock(&self) -> MutexGuard<'_, TranscriptInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All lines written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().lines.clone()
    }

    /// All prompts issued so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    /// Written lines joined with newlines.
    #[must_use]
    pub fn output(&self) -> String {
        self.lock().lines.join("\n")
    }

    /// Returns `true` if any written line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lock().lines.iter().any(|line| line.contains(needle))
    }

    /// Number of lines containing `needle`.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.lock()
            .lines
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    /// How many times the screen was cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.lock().clears
    }

    /// How many times the session was closed.
    #[must_use]
    pub fn close_count(&self) -> usize {
        self.lock().closes
    }
}
