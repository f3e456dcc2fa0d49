use dioxus::prelude::*;

use crate::catalogue::{score_class, UploadStatus, PRACTICE_CATEGORIES, RECENT_UPLOADS};
use crate::icons::{FaCamera, FaCircleCheck, FaCircleExclamation, FaPlay, FaUpload, FaVideo};
use crate::practice::{PracticeSession, PracticeTab, RecordingCopy, HISTORY_STATS};
use crate::Icon;

#[component]
pub fn PracticeView() -> Element {
    let mut session = use_signal(PracticeSession::new);
    let active = session.read().tab();

    rsx! {
        div {
            class: "page",

            div {
                class: "page-header",
                h1 { "Practice with SignMate" }
                p { "Record your practice and get AI-powered feedback" }
            }

            div {
                class: "segmented",
                for tab in PracticeTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if tab == active { "segment segment--active" } else { "segment" },
                        onclick: move |_| session.write().select_tab(tab),
                        "{tab.label()}"
                    }
                }
            }

            {match active {
                PracticeTab::Record => rsx! { RecordPanel { session } },
                PracticeTab::Upload => rsx! { UploadPanel { session } },
                PracticeTab::History => rsx! { HistoryPanel {} },
            }}
        }
    }
}

#[component]
fn RecordPanel(session: Signal<PracticeSession>) -> Element {
    let mut session = session;
    let recording = session.read().is_recording();
    let copy = RecordingCopy::for_state(recording);

    rsx! {
        div {
            class: "card capture-area",
            div {
                class: if recording { "camera-frame camera-frame--live" } else { "camera-frame" },
                if recording {
                    div { class: "recording-dot" }
                } else {
                    Icon { icon: FaCamera, width: 48, height: 48 }
                }
                span { class: "camera-badge", "{copy.badge}" }
            }
            h3 { "{copy.heading}" }
            p { "{copy.description}" }
            button {
                class: if recording { "btn btn--danger btn--large" } else { "btn btn--primary btn--large" },
                onclick: move |_| session.write().toggle_recording(),
                "{copy.action}"
            }
        }

        section {
            class: "section",
            h2 { "Choose Practice Category" }
            div {
                class: "practice-categories",
                for (name, description) in PRACTICE_CATEGORIES {
                    button {
                        key: "{name}",
                        class: "card practice-category",
                        h3 { "{name}" }
                        p { "{description}" }
                    }
                }
            }
        }
    }
}

#[component]
fn UploadPanel(session: Signal<PracticeSession>) -> Element {
    let mut session = session;
    let state = session.read().clone();

    rsx! {
        div {
            class: "card capture-area",
            Icon { icon: FaUpload, width: 48, height: 48 }
            h3 { "Upload Practice Video" }
            p { "Drag and drop your video file here, or click to browse" }
            input {
                id: "video-upload",
                class: "visually-hidden",
                r#type: "file",
                accept: "video/*",
                onchange: move |evt: FormEvent| session.write().select_file(&evt.value()),
            }
            label {
                class: "btn btn--primary",
                r#for: "video-upload",
                "Choose Video File"
            }
            if let Some(name) = state.selected_file() {
                p { class: "file-selected", "File selected: {name}" }
            }
        }

        div {
            class: "card practice-details",
            h3 { "Practice Details" }
            div {
                class: "form-field",
                label { class: "form-label", r#for: "practice-title", "Practice Title" }
                input {
                    id: "practice-title",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "e.g., Basic Greetings Practice",
                    value: "{state.details.title}",
                    oninput: move |evt: FormEvent| session.write().details.title = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { class: "form-label", r#for: "practice-category", "Category" }
                select {
                    id: "practice-category",
                    class: "form-input",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        session.write().details.category = (!value.is_empty()).then_some(value);
                    },
                    option { value: "", "Select a category" }
                    for (name, _) in PRACTICE_CATEGORIES {
                        option {
                            key: "{name}",
                            value: "{name}",
                            selected: state.details.category.as_deref() == Some(name),
                            "{name}"
                        }
                    }
                }
            }
            div {
                class: "form-field",
                label { class: "form-label", r#for: "practice-notes", "Notes (Optional)" }
                textarea {
                    id: "practice-notes",
                    class: "form-input",
                    rows: "3",
                    placeholder: "Add any notes about this practice session...",
                    value: "{state.details.notes}",
                    oninput: move |evt: FormEvent| session.write().details.notes = evt.value(),
                }
            }
            button {
                class: "btn btn--primary btn--block",
                disabled: state.selected_file().is_none(),
                "Upload & Analyze"
            }
        }
    }
}

#[component]
fn HistoryPanel() -> Element {
    rsx! {
        div {
            class: "stats-grid",
            for (index, (label, value)) in HISTORY_STATS.iter().enumerate() {
                div {
                    key: "{label}",
                    class: "card stat-card",
                    div {
                        p { class: "stat-label", "{label}" }
                        p { class: "stat-value", "{value}" }
                    }
                    {match index {
                        0 => rsx! { Icon { icon: FaVideo, width: 28, height: 28 } },
                        1 => rsx! { Icon { icon: FaCircleCheck, width: 28, height: 28 } },
                        _ => rsx! { Icon { icon: FaCircleExclamation, width: 28, height: 28 } },
                    }}
                }
            }
        }

        section {
            class: "section",
            h2 { "Recent Practice Sessions" }
            div {
                class: "card upload-list",
                for upload in RECENT_UPLOADS {
                    div {
                        key: "{upload.id}",
                        class: "upload-row",
                        Icon { icon: FaPlay, width: 16, height: 16 }
                        div {
                            class: "upload-info",
                            h3 { "{upload.name}" }
                            p { class: "upload-time", "{upload.when}" }
                        }
                        {match (upload.status, upload.score) {
                            (UploadStatus::Analyzed, Some(score)) => rsx! {
                                span {
                                    class: score_class(score),
                                    Icon { icon: FaCircleCheck, width: 14, height: 14 }
                                    "{score}%"
                                }
                            },
                            _ => rsx! {
                                span {
                                    class: "score score--pending",
                                    Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                                    "Processing"
                                }
                            },
                        }}
                        button { class: "btn btn--outline", "View Details" }
                    }
                }
            }
        }
    }
}
