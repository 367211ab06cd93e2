use dioxus::document::eval;
use dioxus::prelude::*;

use quiz_core::Phase;

use crate::context::AppContext;
use crate::vm::{AnswerButtonVm, FocusKey, QuizIntent, QuizScreenVm, QuizVm, StatsVm};

/// Element that carries the Enter-key handler.
pub(crate) const QUIZ_ROOT_ID: &str = "quiz-root";

pub(crate) fn focus_root_script() -> String {
    format!("document.getElementById({QUIZ_ROOT_ID:?})?.focus();")
}

/// Owns the quiz presenter for this window and forwards every event to it.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(move || QuizVm::new(ctx.quiz().new_session(), ctx.auto_finish()));
    let mut last_focus = use_signal(|| None::<FocusKey>);

    // START disappears and answered buttons are disabled, which drops focus to
    // the body; pull it back so Enter keeps reaching the root handler.
    use_effect(move || {
        let key = vm.read().focus_key();
        if *last_focus.peek() == Some(key) {
            return;
        }
        last_focus.set(Some(key));
        let _ = eval(&focus_root_script());
    });

    let screen = vm.read().screen();
    let on_intent = move |intent: QuizIntent| {
        // Rejections are kept on the vm and rendered as a message.
        let _ = vm.write().dispatch(intent);
    };

    rsx! {
        QuizScreen { screen, on_intent }
    }
}

/// Stateless rendering of one `QuizScreenVm` snapshot.
#[component]
pub fn QuizScreen(screen: QuizScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let page_class = format!("page quiz-page {}", screen.page_status.class());
    let in_progress = screen.phase == Phase::InProgress;
    let show_start = !in_progress;
    let prompt = screen.prompt.clone().unwrap_or_default();

    let on_key = move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Enter {
            evt.prevent_default();
            on_intent.call(QuizIntent::Enter);
        }
    };

    rsx! {
        div { class: "{page_class}", id: QUIZ_ROOT_ID, tabindex: "0", onkeydown: on_key,
            header { class: "quiz-header",
                button {
                    class: "icon-btn",
                    id: "instructions-icon",
                    title: "Instructions",
                    onclick: move |_| on_intent.call(QuizIntent::ToggleInstructions),
                    "?"
                }
                if in_progress {
                    span { class: "quiz-counter", "{screen.counter_label}" }
                    span { class: "quiz-score", "{screen.score_label}" }
                }
            }

            if screen.instructions_open {
                Instructions { on_intent }
            }

            main { class: "quiz-main",
                if in_progress {
                    div { class: "question-container",
                        h2 { class: "question", "{prompt}" }
                        div { class: "answers",
                            for answer in screen.answers.iter() {
                                AnswerButton {
                                    key: "{answer.index}",
                                    answer: answer.clone(),
                                    on_intent,
                                }
                            }
                        }
                        div { class: "quiz-controls",
                            if screen.can_advance {
                                button {
                                    class: "btn btn-primary",
                                    id: "next-btn",
                                    onclick: move |_| on_intent.call(QuizIntent::Next),
                                    "NEXT"
                                }
                            }
                            button {
                                class: "btn btn-secondary",
                                id: "end-btn",
                                onclick: move |_| on_intent.call(QuizIntent::End),
                                "END"
                            }
                        }
                    }
                }

                if let Some(stats) = screen.stats.clone() {
                    StatsPanel { stats }
                }

                if let Some(message) = screen.error.clone() {
                    p { class: "quiz-error", role: "alert", "{message}" }
                }

                if show_start {
                    button {
                        class: "btn btn-primary start-btn",
                        id: "start-btn",
                        onclick: move |_| on_intent.call(QuizIntent::Start),
                        "{screen.start_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn AnswerButton(answer: AnswerButtonVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let selected = if answer.selected { " selected" } else { "" };
    let class = format!("btn answer-btn {}{selected}", answer.status.class());
    let index = answer.index;

    rsx! {
        button {
            class: "{class}",
            disabled: answer.disabled,
            onclick: move |_| on_intent.call(QuizIntent::Answer(index)),
            "{answer.text}"
        }
    }
}

#[component]
fn StatsPanel(stats: StatsVm) -> Element {
    rsx! {
        section { class: "stats-container",
            h2 { "Results" }
            p { class: "stat", "{stats.score_label}" }
            p { class: "stat", "{stats.answered_label}" }
            p { class: "stat", "{stats.percentage_label}" }
            if let Some(elapsed) = stats.elapsed_label.clone() {
                p { class: "stat", "{elapsed}" }
            }
            div { class: "percentage-bar",
                for (i, block) in stats.blocks.iter().enumerate() {
                    div { key: "{i}", class: "block {block.class()}" }
                }
            }
        }
    }
}

#[component]
fn Instructions(on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_intent.call(QuizIntent::CloseInstructions),
            div {
                class: "modal-content instructions-container",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "icon-btn",
                    id: "close-instructions-icon",
                    title: "Close",
                    onclick: move |_| on_intent.call(QuizIntent::CloseInstructions),
                    "×"
                }
                h2 { "How to play" }
                ul {
                    li { "Press START (or Enter) to begin. Questions come in a random order." }
                    li { "Pick one answer per question. Your choice is locked in right away." }
                    li { "Green means correct, red means wrong." }
                    li { "Press NEXT (or Enter) for the next question, or END to stop early." }
                    li { "Your results are shown at the end. Press RESTART to play again." }
                }
            }
        }
    }
}
