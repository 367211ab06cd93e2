use quiz_core::Phase;

use super::test_harness::{render_quiz_view, render_screen, seeded_vm};
use crate::vm::QuizIntent;

#[test]
fn quiz_view_starts_idle() {
    let html = render_quiz_view();
    assert!(html.contains("START"), "missing start button in {html}");
    assert!(!html.contains("RESTART"), "unexpected restart in {html}");
    assert!(!html.contains("Q #"), "unexpected counter in {html}");
}

#[test]
fn in_progress_screen_renders_question_and_score() {
    let mut vm = seeded_vm(5);
    vm.dispatch(QuizIntent::Start).unwrap();
    let prompt = vm.session().current_question().unwrap().prompt().to_string();

    let html = render_screen(vm.screen());
    assert!(html.contains("Q #1"), "missing counter in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains(&prompt), "missing prompt {prompt} in {html}");
    assert!(html.contains("END"), "missing end button in {html}");
    assert!(!html.contains("NEXT"), "next shown before answering in {html}");
}

#[test]
fn answered_screen_colors_and_offers_next() {
    let mut vm = seeded_vm(5);
    vm.dispatch(QuizIntent::Start).unwrap();
    let correct = vm.session().current_question().unwrap().correct_index();
    vm.dispatch(QuizIntent::Answer(correct)).unwrap();

    let html = render_screen(vm.screen());
    assert!(html.contains("quiz-page correct"), "missing page status in {html}");
    assert!(html.contains("correct selected"), "missing selected answer in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(html.contains("NEXT"), "missing next button in {html}");
}

#[test]
fn finished_screen_renders_stats_and_restart() {
    let mut vm = seeded_vm(9);
    vm.dispatch(QuizIntent::Start).unwrap();
    while vm.phase() == Phase::InProgress {
        let correct = vm.session().current_question().unwrap().correct_index();
        vm.dispatch(QuizIntent::Answer(correct)).unwrap();
        if vm.phase() == Phase::InProgress {
            vm.dispatch(QuizIntent::Next).unwrap();
        }
    }

    let html = render_screen(vm.screen());
    assert!(html.contains("Overall Score: 5"), "missing score in {html}");
    assert!(html.contains("Total Questions Answered: 5"), "missing count in {html}");
    assert!(html.contains("Percentage Correct: 100.00%"), "missing percentage in {html}");
    assert_eq!(html.matches("block correct").count(), 5, "bar blocks in {html}");
    assert!(html.contains("RESTART"), "missing restart in {html}");
}

#[test]
fn instructions_render_when_open() {
    let mut vm = seeded_vm(1);
    vm.dispatch(QuizIntent::ToggleInstructions).unwrap();
    let html = render_screen(vm.screen());
    assert!(html.contains("How to play"), "missing instructions in {html}");
}

#[test]
fn focus_script_targets_the_rendered_key_handler() {
    let html = render_quiz_view();
    let root = format!("id=\"{}\"", super::quiz::QUIZ_ROOT_ID);
    assert!(html.contains(&root), "missing {root} in {html}");
    assert!(html.contains("tabindex=\"0\""), "root not focusable in {html}");
    assert_eq!(
        super::quiz::focus_root_script(),
        "document.getElementById(\"quiz-root\")?.focus();"
    );
}
