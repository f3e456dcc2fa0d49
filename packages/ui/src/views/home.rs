use dioxus::prelude::*;

use crate::icons::{FaArrowRight, FaBook, FaBookOpen, FaHeart, FaUpload, FaUsers};
use crate::Icon;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Lessons",
        description: "Learn ISL alphabets, numbers, words, and phrases",
    },
    Feature {
        title: "Dictionary",
        description: "Search signs by word, category and difficulty",
    },
    Feature {
        title: "Practice",
        description: "Record yourself and get feedback on your signing",
    },
    Feature {
        title: "Community",
        description: "Learn together with fellow SignMate learners",
    },
];

/// Marketing landing page shown before onboarding.
#[component]
pub fn HomeView(on_get_started: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "home",

            header {
                class: "home-header",
                Brand {}
                button {
                    class: "btn btn--ghost",
                    onclick: move |_| on_get_started.call(()),
                    "Sign In"
                }
            }

            section {
                class: "home-hero",
                h1 { class: "home-title", "Learn Indian Sign Language with SignMate" }
                p {
                    class: "home-subtitle",
                    "Bite-sized lessons, a searchable sign dictionary and guided practice, all in one place."
                }
                button {
                    class: "btn btn--primary btn--large",
                    onclick: move |_| on_get_started.call(()),
                    span { "Get Started" }
                    Icon { icon: FaArrowRight, width: 18, height: 18 }
                }
            }

            section {
                class: "home-features",
                for (index, feature) in FEATURES.iter().enumerate() {
                    div {
                        key: "{feature.title}",
                        class: "card feature-card",
                        div {
                            class: "feature-icon",
                            {match index {
                                0 => rsx! { Icon { icon: FaBookOpen, width: 24, height: 24 } },
                                1 => rsx! { Icon { icon: FaBook, width: 24, height: 24 } },
                                2 => rsx! { Icon { icon: FaUpload, width: 24, height: 24 } },
                                _ => rsx! { Icon { icon: FaUsers, width: 24, height: 24 } },
                            }}
                        }
                        h3 { "{feature.title}" }
                        p { "{feature.description}" }
                    }
                }
            }

            footer {
                class: "home-footer",
                Icon { icon: FaHeart, width: 14, height: 14 }
                span { " Made for the ISL learning community" }
            }
        }
    }
}

/// The "SM" logo badge with the product name.
#[component]
pub fn Brand() -> Element {
    rsx! {
        div {
            class: "brand",
            div { class: "brand-badge", "SM" }
            span { class: "brand-name", "SignMate" }
        }
    }
}
