use dioxus::prelude::*;

use crate::catalogue::{lesson_progress, lessons_in, LESSON_CATEGORIES};
use crate::icons::{FaCircleCheck, FaClock, FaLock, FaPlay};
use crate::Icon;

#[component]
pub fn LessonsView() -> Element {
    let mut selected = use_signal(|| LESSON_CATEGORIES[0].id);

    let category = selected();
    let lessons = lessons_in(category);
    let (completed, total) = lesson_progress(category);
    let percent = if total == 0 { 0 } else { completed * 100 / total };

    rsx! {
        div {
            class: "page",

            div {
                class: "page-header",
                h1 { "ISL Lessons" }
                p { "Learn Indian Sign Language step by step" }
            }

            div {
                class: "chip-row",
                for entry in LESSON_CATEGORIES {
                    button {
                        key: "{entry.id}",
                        class: if entry.id == category { "chip chip--active" } else { "chip" },
                        onclick: move |_| selected.set(entry.id),
                        "{entry.name}"
                        span { class: "chip-count", "{entry.total}" }
                    }
                }
            }

            div {
                class: "card progress-card",
                div {
                    class: "progress-summary",
                    span { "{completed} of {total} lessons completed" }
                    span { "{percent}%" }
                }
                div {
                    class: "progress-track",
                    div { class: "progress-fill", style: "width: {percent}%" }
                }
            }

            div {
                class: "lesson-list",
                for lesson in lessons {
                    div {
                        key: "{lesson.id}",
                        class: if lesson.locked { "card lesson lesson--locked" } else { "card lesson" },
                        div {
                            class: "lesson-icon",
                            if lesson.completed {
                                Icon { icon: FaCircleCheck, width: 20, height: 20 }
                            } else if lesson.locked {
                                Icon { icon: FaLock, width: 20, height: 20 }
                            } else {
                                Icon { icon: FaPlay, width: 20, height: 20 }
                            }
                        }
                        div {
                            class: "lesson-body",
                            h3 { "{lesson.title}" }
                            div {
                                class: "lesson-meta",
                                Icon { icon: FaClock, width: 12, height: 12 }
                                span { "{lesson.minutes} min" }
                                span { class: lesson.difficulty.badge_class(), "{lesson.difficulty}" }
                            }
                        }
                        button {
                            class: "btn btn--primary",
                            disabled: lesson.locked,
                            if lesson.completed { "Review" } else { "Start" }
                        }
                    }
                }
            }
        }
    }
}
