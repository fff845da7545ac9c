//! TypeScriptEx Core
//!
//! The lesson menu, the lesson runner, and the session primitives they
//! share: the interactive [`Session`], the pause gate, and emoji [`Decor`].

pub mod catalog;
pub mod config;
pub mod decor;
pub mod error;
pub mod menu;
pub mod pause;
pub mod runner;
pub mod session;

pub use catalog::{unit_name, Catalog, LessonDescriptor, LESSONS};
pub use config::{Config, CONFIG_FILE_NAME};
pub use decor::{Decor, EMOJI};
pub use error::{Result, TsexError};
pub use menu::{MenuExit, MenuLoop, MenuState, Selection, EXIT_WORDS, MENU_PROMPT};
pub use pause::{pause, wait_for_continue, wait_for_continue_with, CONTINUE_PROMPT};
pub use runner::{Lesson, LessonRegistry, LessonRunner, RunOutcome, INVALID_SELECTION};
pub use session::{ScriptedSession, Session, StdioSession, Transcript};
