//! Printing helpers shared by every lesson, and the script-driven
//! [`NarratedLesson`] used for the lessons that only narrate.

use async_trait::async_trait;
use tsex_core::{pause, unit_name, Lesson, Session};

const CODE_RULE_WIDTH: usize = 60;

/// Prints `<marker> --- lessonNN: <title> ---` and a blank line.
pub fn lesson_header(session: &mut dyn Session, id: u32, title: &str) {
    session.announce(&format!("--- {}: {title} ---", unit_name(id)));
    session.blank();
}

/// Prints the lesson goals as a numbered list.
pub fn goals(session: &mut dyn Session, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    session.write_line("🎯 Goals:");
    for (index, item) in items.iter().enumerate() {
        session.write_line(&format!("  {}) {item}", index + 1));
    }
    session.blank();
}

/// Prints a titled code block framed by dashed rules.
pub fn code_block(session: &mut dyn Session, title: &str, code: &str) {
    let rule = "-".repeat(CODE_RULE_WIDTH);
    session.blank();
    session.announce(title);
    session.write_line(&rule);
    for line in code.lines() {
        session.write_line(line);
    }
    session.write_line(&rule);
    session.blank();
}

/// Prints the closing line of a lesson.
pub fn lesson_complete(session: &mut dyn Session) {
    session.blank();
    session.announce("Lesson complete!");
}

/// One step of a narrated lesson.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Short heading, printed after the section number.
    pub heading: &'static str,
    /// TypeScript shown in a code block.
    pub code: &'static str,
    /// What running the code prints.
    pub output: &'static [&'static str],
    /// Takeaways printed after the output.
    pub notes: &'static [&'static str],
}

/// The full text of a narrated lesson.
#[derive(Debug, Clone, Copy)]
pub struct Script {
    /// Goals listed under the header.
    pub goals: &'static [&'static str],
    /// Sections, each followed by a pause.
    pub sections: &'static [Section],
    /// Summary bullets printed at the end.
    pub summary: &'static [&'static str],
}

/// A lesson that prints a [`Script`] section by section.
#[derive(Debug, Clone, Copy)]
pub struct NarratedLesson {
    id: u32,
    script: &'static Script,
}

impl NarratedLesson {
    /// Creates the unit for lesson `id`.
    #[must_use]
    pub const fn new(id: u32, script: &'static Script) -> Self {
        Self { id, script }
    }

    /// Number of pauses a full run waits for.
    #[must_use]
    pub const fn pause_count(&self) -> usize {
        self.script.sections.len() + 1
    }
}

#[async_trait]
impl Lesson for NarratedLesson {
    async fn run(&self, session: &mut dyn Session, title: &str) -> anyhow::Result<()> {
        lesson_header(session, self.id, title);
        goals(session, self.script.goals);

        for (index, section) in self.script.sections.iter().enumerate() {
            session.write_line(&format!("📌 {}. {}", index + 1, section.heading));
            code_block(session, section.heading, section.code);

            if !section.output.is_empty() {
                session.write_line("Output:");
                for line in section.output {
                    session.write_line(&format!("  {line}"));
                }
                session.blank();
            }
            for note in section.notes {
                session.write_line(&format!("→ {note}"));
            }
            pause(session).await;
        }

        if !self.script.summary.is_empty() {
            session.write_line("📝 Summary:");
            for item in self.script.summary {
                session.write_line(&format!("  - {item}"));
            }
        }
        lesson_complete(session);
        pause(session).await;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tsex_core::{Decor, ScriptedSession};

    use super::*;

    const SCRIPT: Script = Script {
        goals: &["Print a value"],
        sections: &[Section {
            heading: "Console output",
            code: "const x: number = 1;\nconsole.log(x);",
            output: &["1"],
            notes: &["x is a number"],
        }],
        summary: &["Annotations are erased at runtime"],
    };

    #[tokio::test]
    async fn test_narrated_lesson_prints_script_and_pauses() {
        let lesson = NarratedLesson::new(4, &SCRIPT);
        let mut session = ScriptedSession::new(["", ""]).with_decor(Decor::Fixed("*"));
        let transcript = session.transcript();

        lesson.run(&mut session, "Demo").await.unwrap();

        assert_eq!(lesson.pause_count(), 2);
        assert_eq!(session.remaining_inputs(), 0);
        assert!(transcript.contains("* --- lesson04: Demo ---"));
        assert!(transcript.contains("  1) Print a value"));
        assert!(transcript.contains("📌 1. Console output"));
        assert!(transcript.contains("console.log(x);"));
        assert!(transcript.contains("→ x is a number"));
        assert!(transcript.contains("  - Annotations are erased at runtime"));
        assert!(transcript.contains("* Lesson complete!"));
    }

    #[test]
    fn test_code_block_is_framed() {
        let mut session = ScriptedSession::new(Vec::<String>::new());
        let transcript = session.transcript();

        code_block(&mut session, "Snippet", "a\nb");

        let rule = "-".repeat(60);
        assert_eq!(transcript.lines(), vec!["", "Snippet", &rule, "a", "b", &rule, ""]);
    }
}
