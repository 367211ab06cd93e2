use std::sync::Arc;

use dioxus::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{BankSource, QuizService};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizScreen, QuizView};
use crate::vm::{QuizIntent, QuizScreenVm, QuizVm};

struct TestApp {
    quiz: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn auto_finish(&self) -> bool {
        true
    }
}

pub fn embedded_service() -> Arc<QuizService> {
    Arc::new(QuizService::load(&BankSource::Embedded).expect("embedded bank"))
}

/// A presenter over the embedded bank with a seeded shuffle.
pub fn seeded_vm(seed: u64) -> QuizVm<StdRng> {
    let session = embedded_service().new_session_with_rng(StdRng::seed_from_u64(seed));
    QuizVm::new(session, true)
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

#[derive(Props, Clone, PartialEq)]
struct ScreenHarnessProps {
    screen: QuizScreenVm,
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    rsx! {
        QuizScreen { screen: props.screen.clone(), on_intent: move |_: QuizIntent| {} }
    }
}

/// Render `QuizView` wired to the embedded bank, as the app would on launch.
pub fn render_quiz_view() -> String {
    let app = Arc::new(TestApp {
        quiz: embedded_service(),
    });
    let mut dom = VirtualDom::new_with_props(AppHarness, AppHarnessProps { app });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render one screen snapshot without any live session behind it.
pub fn render_screen(screen: QuizScreenVm) -> String {
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { screen });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
