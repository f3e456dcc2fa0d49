use dioxus::prelude::*;

use crate::icons::{FaBook, FaChevronRight, FaPlay, FaUpload, FaUsers};
use crate::onboarding::{OnboardingFlow, OnboardingProgress, STEPS};
use crate::Icon;

#[component]
pub fn OnboardingView(on_complete: EventHandler<()>) -> Element {
    let mut flow = use_signal(OnboardingFlow::new);
    let current = flow();
    let step = current.step();

    let advance = move |progress: OnboardingProgress| {
        if progress == OnboardingProgress::Completed {
            on_complete.call(());
        }
    };

    rsx! {
        div {
            class: "onboarding",

            div {
                class: "onboarding-dots",
                for index in 0..STEPS.len() {
                    div {
                        key: "{index}",
                        class: if current.is_reached(index) { "dot dot--active" } else { "dot" },
                    }
                }
            }

            div {
                class: "onboarding-content",
                div {
                    class: "onboarding-icon",
                    {match current.index() {
                        0 => rsx! { div { class: "brand-badge brand-badge--large", "SM" } },
                        1 => rsx! { Icon { icon: FaPlay, width: 64, height: 64 } },
                        2 => rsx! { Icon { icon: FaBook, width: 64, height: 64 } },
                        3 => rsx! { Icon { icon: FaUpload, width: 64, height: 64 } },
                        _ => rsx! { Icon { icon: FaUsers, width: 64, height: 64 } },
                    }}
                }
                h1 { class: "onboarding-title", "{step.title}" }
                p { class: "onboarding-subtitle", "{step.subtitle}" }
                p { class: "onboarding-description", "{step.description}" }
            }

            div {
                class: "onboarding-actions",
                button {
                    class: "btn btn--primary btn--large btn--block",
                    onclick: move |_| {
                        let progress = flow.write().next();
                        advance(progress);
                    },
                    span { "{current.next_label()}" }
                    Icon { icon: FaChevronRight, width: 18, height: 18 }
                }
                if current.can_skip() {
                    button {
                        class: "btn btn--ghost btn--block",
                        onclick: move |_| {
                            let progress = flow.write().skip();
                            advance(progress);
                        },
                        "Skip to SignMate"
                    }
                }
            }
        }
    }
}
