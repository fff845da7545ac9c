//! Integration tests for the menu loop driving real and faulty lessons.
//!
//! Sessions are scripted: each test lists the lines a user would type and
//! inspects the transcript afterwards.

use async_trait::async_trait;
use tsex_core::{
    Catalog, Config, Lesson, LessonRegistry, LessonRunner, MenuExit, MenuLoop, ScriptedSession,
    Session, TsexError, MENU_PROMPT,
};

struct Failing;

#[async_trait]
impl Lesson for Failing {
    async fn run(&self, session: &mut dyn Session, _title: &str) -> anyhow::Result<()> {
        session.write_line("about to fail");
        anyhow::bail!("missing fixture")
    }
}

struct Panicking;

#[async_trait]
impl Lesson for Panicking {
    async fn run(&self, _session: &mut dyn Session, _title: &str) -> anyhow::Result<()> {
        panic!("lesson exploded")
    }
}

struct Quiet;

#[async_trait]
impl Lesson for Quiet {
    async fn run(&self, session: &mut dyn Session, title: &str) -> anyhow::Result<()> {
        session.write_line(&format!("quiet: {title}"));
        Ok(())
    }
}

fn real_runner() -> LessonRunner {
    LessonRunner::new(Catalog::standard(), tsex_lessons::registry(&Config::default()))
}

/// Lessons 1-3 misbehave in different ways; 4 has no unit at all.
fn faulty_runner() -> LessonRunner {
    let registry = LessonRegistry::new()
        .with(1, Quiet)
        .with(2, Failing)
        .with(3, Panicking);
    LessonRunner::new(Catalog::standard(), registry)
}

async fn run_menu(runner: LessonRunner, session: ScriptedSession) -> tsex_core::Result<MenuExit> {
    MenuLoop::new(session, runner).run().await
}

#[tokio::test]
async fn test_narrated_lesson_then_quit() {
    let lesson = tsex_lessons::narrated(1).expect("lesson 1 is narrated");
    let mut inputs = vec!["1".to_string()];
    inputs.extend(vec![String::new(); lesson.pause_count()]);
    inputs.push("Q".to_string());

    let session = ScriptedSession::new(inputs);
    let transcript = session.transcript();

    let exit = run_menu(real_runner(), session).await.expect("menu failed");

    assert_eq!(exit, MenuExit::Quit);
    assert!(transcript.contains("[Run] 1. Hello TypeScript: first output with ts-node"));
    assert!(transcript.contains("--- lesson01: Hello TypeScript: first output with ts-node ---"));
    assert!(transcript.contains("Lesson complete!"));
    assert!(transcript.contains("👋 Great work! Closing TypeScriptEx."));
    assert_eq!(transcript.close_count(), 1);
    // Initial render plus one after the lesson.
    assert_eq!(transcript.clear_count(), 2);
}

#[tokio::test]
async fn test_menu_lists_every_lesson() {
    let session = ScriptedSession::new(["exit"]);
    let transcript = session.transcript();

    run_menu(real_runner(), session).await.expect("menu failed");

    for lesson in Catalog::standard().all() {
        assert!(
            transcript.contains(&format!("{:02}. {}", lesson.id, lesson.title)),
            "missing menu line for {}",
            lesson.unit_name()
        );
    }
    assert_eq!(transcript.prompts(), vec![MENU_PROMPT]);
}

#[tokio::test]
async fn test_out_of_range_numbers_are_rejected() {
    let session = ScriptedSession::new(["99", "", "0", "", "-4", "", "quit"]);
    let transcript = session.transcript();

    let exit = run_menu(real_runner(), session).await.expect("menu failed");

    assert_eq!(exit, MenuExit::Quit);
    assert_eq!(transcript.count("⚠️ Invalid lesson number."), 3);
    assert!(!transcript.contains("[Run]"));
}

#[tokio::test]
async fn test_non_numeric_input_warns_and_redraws() {
    let session = ScriptedSession::new(["abc", "", "  ", "", " EXIT "]);
    let transcript = session.transcript();

    let exit = run_menu(real_runner(), session).await.expect("menu failed");

    assert_eq!(exit, MenuExit::Quit);
    assert_eq!(transcript.count("Please enter a lesson number or Q."), 2);
    assert_eq!(transcript.clear_count(), 3);
}

#[tokio::test]
async fn test_faulty_lessons_do_not_end_the_menu() {
    // quiet, failing (+pause), panicking (+pause), missing (+pause), quit
    let session = ScriptedSession::new(["1", "2", "", "3", "", "4", "", "q"]);
    let transcript = session.transcript();

    let exit = run_menu(faulty_runner(), session).await.expect("menu failed");

    assert_eq!(exit, MenuExit::Quit);
    assert!(transcript.contains("quiet: Hello TypeScript: first output with ts-node"));
    assert!(transcript.contains("about to fail"));
    assert!(transcript.contains("❌ Error while running lesson02: missing fixture"));
    assert!(transcript.contains("❌ Unknown error in lesson03: lesson exploded"));
    assert!(transcript.contains("⚠️ No lesson unit named 'lesson04' is registered."));
    assert!(transcript.contains("👋 Great work! Closing TypeScriptEx."));
    assert_eq!(transcript.close_count(), 1);
}

#[tokio::test]
async fn test_end_of_input_exits_cleanly() {
    let session = ScriptedSession::new(["1"]);
    let transcript = session.transcript();

    let exit = run_menu(faulty_runner(), session).await.expect("menu failed");

    assert_eq!(exit, MenuExit::EndOfInput);
    assert!(transcript.contains("👋 Great work! Closing TypeScriptEx."));
    assert_eq!(transcript.close_count(), 1);
}

#[tokio::test]
async fn test_read_error_is_reported() {
    let session = ScriptedSession::new(Vec::<String>::new()).failing_when_exhausted();
    let transcript = session.transcript();

    let err = run_menu(real_runner(), session).await.unwrap_err();

    assert!(matches!(err, TsexError::SessionRead(_)));
    assert_eq!(transcript.close_count(), 1);
}
