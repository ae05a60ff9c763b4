use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::views::ReportPage;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared language code; AppNavbar writes it, views subscribe to it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "MindPulse" }
        document::Style { "{MAIN_CSS_INLINE}" }

        AppNavbar {}
        main { class: "app-main",
            ReportPage {}
        }
    }
}
