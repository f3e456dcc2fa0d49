use dioxus::prelude::*;
use store::UserRecord;

use crate::greeting::{current_hour, greeting_for_hour};
use crate::icons::{FaAward, FaBook, FaChevronRight, FaPlay, FaArrowTrendUp};
use crate::router::MainTab;
use crate::Icon;

const STATS: [(&str, &str); 3] = [
    ("Signs Learned", "127"),
    ("Streak Days", "12"),
    ("Quiz Score", "85%"),
];

const RECENT_ACTIVITY: [(&str, &str, &str); 4] = [
    ("Completed", "Basic Greetings Quiz", "2 hours ago"),
    ("Learned", "Family Signs Collection", "1 day ago"),
    ("Practiced", "Numbers 1-20", "2 days ago"),
    ("Joined", "Community Challenge", "3 days ago"),
];

/// Shortcuts into other tabs.
const QUICK_ACTIONS: [(&str, &str, MainTab); 3] = [
    ("Continue Learning", "Basic Emotions", MainTab::Lessons),
    ("Look Up a Sign", "Search the dictionary", MainTab::Dictionary),
    ("Practice Session", "Record & improve", MainTab::Upload),
];

#[component]
pub fn DashboardView(user: Option<UserRecord>, on_navigate: EventHandler<MainTab>) -> Element {
    let greeting = greeting_for_hour(current_hour());
    let headline = match &user {
        Some(user) if !user.first_name().is_empty() => {
            format!("{greeting}, {}! Ready to learn with SignMate?", user.first_name())
        }
        _ => format!("{greeting}! Ready to learn with SignMate?"),
    };

    rsx! {
        div {
            class: "page",

            div {
                class: "page-header",
                h1 { "{headline}" }
                p { "Continue your ISL learning journey today" }
            }

            div {
                class: "stats-grid",
                for (index, (label, value)) in STATS.iter().enumerate() {
                    div {
                        key: "{label}",
                        class: "card stat-card",
                        div {
                            p { class: "stat-label", "{label}" }
                            p { class: "stat-value", "{value}" }
                        }
                        {match index {
                            0 => rsx! { Icon { icon: FaAward, width: 28, height: 28 } },
                            1 => rsx! { Icon { icon: FaArrowTrendUp, width: 28, height: 28 } },
                            _ => rsx! { Icon { icon: FaPlay, width: 28, height: 28 } },
                        }}
                    }
                }
            }

            section {
                class: "section",
                h2 { "Quick Actions" }
                div {
                    class: "quick-actions",
                    for (title, subtitle, tab) in QUICK_ACTIONS {
                        button {
                            key: "{title}",
                            class: "card quick-action",
                            onclick: move |_| on_navigate.call(tab),
                            div {
                                h3 { "{title}" }
                                p { "{subtitle}" }
                            }
                            Icon { icon: FaChevronRight, width: 16, height: 16 }
                        }
                    }
                }
            }

            section {
                class: "section",
                h2 { "Recent Activity" }
                div {
                    class: "card activity-list",
                    for (action, item, when) in RECENT_ACTIVITY {
                        div {
                            key: "{item}",
                            class: "activity-row",
                            Icon { icon: FaBook, width: 16, height: 16 }
                            span { class: "activity-text", "{action} " strong { "{item}" } }
                            span { class: "activity-time", "{when}" }
                        }
                    }
                }
            }
        }
    }
}
