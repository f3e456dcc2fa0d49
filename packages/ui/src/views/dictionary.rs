use dioxus::prelude::*;

use crate::catalogue::{filter_signs, Difficulty, SignFilter, SIGNS, SIGN_CATEGORIES};
use crate::icons::{FaHeart, FaMagnifyingGlass, FaPlay};
use crate::Icon;

#[component]
pub fn DictionaryView() -> Element {
    let mut filter = use_signal(SignFilter::default);

    let current = filter.read().clone();
    let results = filter_signs(&SIGNS, &current);
    let count = results.len();

    rsx! {
        div {
            class: "page",

            div {
                class: "page-header",
                h1 { "ISL Dictionary" }
                p { "Search and explore Indian Sign Language signs" }
            }

            div {
                class: "card dictionary-controls",
                div {
                    class: "search-box",
                    Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                    input {
                        class: "form-input",
                        r#type: "search",
                        placeholder: "Search for signs...",
                        value: "{current.search}",
                        oninput: move |evt: FormEvent| filter.write().search = evt.value(),
                    }
                }
                div {
                    class: "filter-row",
                    select {
                        class: "form-input",
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            filter.write().category = (!value.is_empty()).then_some(value);
                        },
                        option { value: "", "All Categories" }
                        for category in SIGN_CATEGORIES {
                            option {
                                key: "{category.id}",
                                value: "{category.id}",
                                selected: current.category.as_deref() == Some(category.id),
                                "{category.name} ({category.total})"
                            }
                        }
                    }
                    select {
                        class: "form-input",
                        onchange: move |evt: FormEvent| {
                            filter.write().difficulty = evt.value().parse::<Difficulty>().ok();
                        },
                        option { value: "", "All Levels" }
                        for difficulty in Difficulty::ALL {
                            option {
                                key: "{difficulty}",
                                value: "{difficulty}",
                                selected: current.difficulty == Some(difficulty),
                                "{difficulty}"
                            }
                        }
                    }
                }
            }

            p { class: "result-count", "{count} signs found" }

            if results.is_empty() {
                div {
                    class: "empty-state",
                    p { "No signs match your search." }
                    button {
                        class: "btn btn--outline",
                        onclick: move |_| filter.set(SignFilter::default()),
                        "Clear filters"
                    }
                }
            } else {
                div {
                    class: "sign-grid",
                    for sign in results {
                        div {
                            key: "{sign.id}",
                            class: "card sign-card",
                            div {
                                class: "sign-preview",
                                Icon { icon: FaPlay, width: 24, height: 24 }
                            }
                            div {
                                class: "sign-title",
                                h3 { "{sign.word}" }
                                span {
                                    class: if sign.favorite { "favorite favorite--on" } else { "favorite" },
                                    Icon { icon: FaHeart, width: 14, height: 14 }
                                }
                            }
                            p { "{sign.description}" }
                            span { class: sign.difficulty.badge_class(), "{sign.difficulty}" }
                        }
                    }
                }
            }
        }
    }
}
