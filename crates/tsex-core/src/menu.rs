//! Top-level read-render-dispatch loop.
//!
//! The loop cycles through these states:
//! - `Rendering` -> `AwaitingInput`
//! - From `AwaitingInput`:
//!   - `Exiting` (exit word, end of input, or a failed read)
//!   - `Dispatching` (an integer) -> `Rendering`
//!   - `Rendering` (anything else, after a warning and a pause)
//!
//! `Exiting` closes the session exactly once and ends the loop.

use crate::error::{Result, TsexError};
use crate::pause::pause;
use crate::runner::{LessonRunner, RunOutcome, INVALID_SELECTION};
use crate::session::Session;

/// Inputs that end the session, compared after trimming and lowercasing.
pub const EXIT_WORDS: &[&str] = &["q", "quit", "exit"];

/// Prompt shown when waiting for a selection.
pub const MENU_PROMPT: &str = "Enter a lesson number (q or Q to quit): ";

/// Application name shown in the banner.
pub const APP_NAME: &str = "TypeScriptEx";

const BANNER_RULE: &str = "====================================";
const FOOTER_RULE: &str = "------------------------------------";

/// States of the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Drawing the banner and catalog.
    Rendering,
    /// Waiting for a line of input.
    AwaitingInput,
    /// Running the selected lesson number.
    Dispatching(i64),
    /// Closing the session. Terminal.
    Exiting,
}

/// A parsed line of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// One of [`EXIT_WORDS`].
    Exit,
    /// Any integer. It may still be outside the catalog.
    Lesson(i64),
    /// Neither an exit word nor an integer.
    Invalid,
}

impl Selection {
    /// Classifies a raw input line.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsex_core::Selection;
    ///
    /// assert_eq!(Selection::parse(" QUIT "), Selection::Exit);
    /// assert_eq!(Selection::parse("07"), Selection::Lesson(7));
    /// assert_eq!(Selection::parse("abc"), Selection::Invalid);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();
        if EXIT_WORDS.contains(&normalized.as_str()) {
            return Self::Exit;
        }
        normalized.parse::<i64>().map_or(Self::Invalid, Self::Lesson)
    }
}

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user typed an exit word.
    Quit,
    /// The input stream ended.
    EndOfInput,
}

/// The interactive menu. Owns the session for the whole run.
pub struct MenuLoop<S: Session> {
    session: S,
    runner: LessonRunner,
}

impl<S: Session> MenuLoop<S> {
    /// Creates a loop over `session` dispatching through `runner`.
    pub const fn new(session: S, runner: LessonRunner) -> Self {
        Self { session, runner }
    }

    /// Runs until the user exits.
    ///
    /// # Errors
    ///
    /// Returns `TsexError::SessionRead` if reading a selection fails. The
    /// session is closed in every case.
    pub async fn run(mut self) -> Result<MenuExit> {
        let mut state = MenuState::Rendering;
        let mut exit = Ok(MenuExit::Quit);

        loop {
            state = match state {
                MenuState::Rendering => {
                    self.render();
                    MenuState::AwaitingInput
                }
                MenuState::AwaitingInput => {
                    self.session.blank();
                    match self.session.read_line(MENU_PROMPT).await {
                        Ok(Some(line)) => match Selection::parse(&line) {
                            Selection::Exit => MenuState::Exiting,
                            Selection::Lesson(number) => MenuState::Dispatching(number),
                            Selection::Invalid => {
                                self.reject_input(&line).await;
                                MenuState::Rendering
                            }
                        },
                        Ok(None) => {
                            tracing::info!("Input closed, leaving menu");
                            exit = Ok(MenuExit::EndOfInput);
                            MenuState::Exiting
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Failed to read menu selection");
                            exit = Err(TsexError::SessionRead(e));
                            MenuState::Exiting
                        }
                    }
                }
                MenuState::Dispatching(number) => {
                    self.dispatch(number).await;
                    MenuState::Rendering
                }
                MenuState::Exiting => {
                    self.session.blank();
                    self.session
                        .write_line(&format!("👋 Great work! Closing {APP_NAME}."));
                    self.session.blank();
                    self.session.close();
                    tracing::info!("Menu loop finished");
                    return exit;
                }
            };
        }
    }

    fn render(&mut self) {
        let session = &mut self.session;
        session.clear();
        session.write_line(BANNER_RULE);
        session.announce(&format!("{APP_NAME} – Lesson Menu"));
        session.write_line(BANNER_RULE);
        session.blank();

        for entry in self.runner.catalog().all() {
            session.announce(&format!("{:02}. {}", entry.id, entry.title));
        }

        session.blank();
        session.write_line(" q | Q to quit");
        session.write_line(FOOTER_RULE);
    }

    async fn dispatch(&mut self, number: i64) {
        tracing::debug!(selection = number, "Dispatching selection");
        let outcome = match u32::try_from(number) {
            Ok(id) => self.runner.run(id, &mut self.session).await,
            Err(_) => {
                self.session.write_line(&format!("⚠️ {INVALID_SELECTION}"));
                RunOutcome::InvalidSelection
            }
        };

        // Keep the message on screen before the menu is redrawn.
        if !outcome.is_completed() {
            pause(&mut self.session).await;
        }
    }

    async fn reject_input(&mut self, line: &str) {
        tracing::debug!(input = %line.trim(), "Rejected menu input");
        self.session.blank();
        self.session.write_line("⚠️ Please enter a lesson number or Q.");
        pause(&mut self.session).await;
    }
}
