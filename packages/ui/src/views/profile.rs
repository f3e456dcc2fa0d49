use dioxus::prelude::*;
use store::UserRecord;

use crate::icons::{
    FaArrowTrendUp, FaAward, FaBookOpen, FaCalendar, FaChevronRight, FaRightFromBracket, FaStar,
    FaUsers,
};
use crate::profile::{
    earned_count, AchievementState, Preference, Preferences, ProfileSection, ACHIEVEMENTS,
    COMMUNITY_IMPACT, LEARNING_PROGRESS, LEARNING_STATS, PROFILE_ACTIVITY,
};
use crate::Icon;

#[component]
pub fn ProfileView(user: Option<UserRecord>, on_sign_out: EventHandler<()>) -> Element {
    let mut section = use_signal(ProfileSection::default);
    let active = section();

    let (initials, name, email) = match &user {
        Some(user) => (user.initials(), user.name.clone(), user.email.clone()),
        None => ("?".to_string(), "Guest".to_string(), String::new()),
    };

    rsx! {
        div {
            class: "page",

            div {
                class: "card profile-header",
                div { class: "avatar", "{initials}" }
                div {
                    h1 { "{name}" }
                    if !email.is_empty() {
                        p { class: "profile-email", "{email}" }
                    }
                    span { class: "badge badge--beginner", "ISL Learner" }
                }
            }

            div {
                class: "segmented",
                for entry in ProfileSection::ALL {
                    button {
                        key: "{entry.label()}",
                        class: if entry == active { "segment segment--active" } else { "segment" },
                        onclick: move |_| section.set(entry),
                        "{entry.label()}"
                    }
                }
            }

            {match active {
                ProfileSection::Overview => rsx! { OverviewSection {} },
                ProfileSection::Achievements => rsx! { AchievementsSection {} },
                ProfileSection::Settings => rsx! {
                    SettingsSection { name: name.clone(), email: email.clone(), on_sign_out }
                },
            }}
        }
    }
}

#[component]
fn OverviewSection() -> Element {
    rsx! {
        section {
            class: "section",
            h2 { "Your SignMate Journey" }
            div {
                class: "stats-grid",
                for stat in LEARNING_STATS.iter() {
                    div {
                        key: "{stat.label}",
                        class: "card",
                        p { class: "stat-label", "{stat.label}" }
                        p { class: "stat-value", "{stat.value}" }
                        p { class: "stat-change", "{stat.change}" }
                    }
                }
            }
        }

        section {
            class: "section",
            h2 { "Recent Activity" }
            div {
                class: "card activity-list",
                for (action, item, when, points) in PROFILE_ACTIVITY {
                    div {
                        key: "{item}",
                        class: "activity-row",
                        span { class: "activity-text", "{action} " strong { "{item}" } }
                        span { class: "activity-time", "{when}" }
                        span { class: "activity-points", "+{points} pts" }
                    }
                }
            }
        }

        div {
            class: "two-column",
            div {
                class: "card",
                h3 { "Learning Progress" }
                for (topic, percent) in LEARNING_PROGRESS {
                    div {
                        key: "{topic}",
                        class: "progress-item",
                        div {
                            class: "progress-summary",
                            span { "{topic}" }
                            span { "{percent}%" }
                        }
                        div {
                            class: "progress-track",
                            div { class: "progress-fill", style: "width: {percent}%" }
                        }
                    }
                }
            }
            div {
                class: "card",
                h3 { "Community Impact" }
                for (index, (label, value)) in COMMUNITY_IMPACT.iter().enumerate() {
                    div {
                        key: "{label}",
                        class: "impact-row",
                        {match index {
                            0 => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
                            1 => rsx! { Icon { icon: FaAward, width: 16, height: 16 } },
                            _ => rsx! { Icon { icon: FaArrowTrendUp, width: 16, height: 16 } },
                        }}
                        span { class: "impact-label", "{label}" }
                        strong { "{value}" }
                    }
                }
            }
        }
    }
}

#[component]
fn AchievementsSection() -> Element {
    let earned = earned_count(&ACHIEVEMENTS);
    let total = ACHIEVEMENTS.len();

    rsx! {
        section {
            class: "section",
            h2 { "SignMate Achievements" }
            p { class: "result-count", "{earned} of {total} earned. Track your progress and unlock new badges" }
            div {
                class: "achievement-grid",
                for achievement in ACHIEVEMENTS {
                    div {
                        key: "{achievement.id}",
                        class: if achievement.is_earned() { "card achievement" } else { "card achievement achievement--locked" },
                        {match achievement.id {
                            1 => rsx! { Icon { icon: FaBookOpen, width: 24, height: 24 } },
                            2 => rsx! { Icon { icon: FaCalendar, width: 24, height: 24 } },
                            3 => rsx! { Icon { icon: FaUsers, width: 24, height: 24 } },
                            4 => rsx! { Icon { icon: FaStar, width: 24, height: 24 } },
                            _ => rsx! { Icon { icon: FaAward, width: 24, height: 24 } },
                        }}
                        h3 { "{achievement.title}" }
                        p { "{achievement.description}" }
                        {match achievement.state {
                            AchievementState::Earned { when } => rsx! {
                                span { class: "badge badge--beginner", "Earned {when}" }
                            },
                            AchievementState::InProgress { percent } => rsx! {
                                div {
                                    class: "progress-summary",
                                    span { "Progress" }
                                    span { "{percent}%" }
                                }
                                div {
                                    class: "progress-track",
                                    div { class: "progress-fill", style: "width: {percent}%" }
                                }
                            },
                        }}
                    }
                }
            }
        }
    }
}

#[component]
fn SettingsSection(name: String, email: String, on_sign_out: EventHandler<()>) -> Element {
    let mut prefs = use_signal(Preferences::default);
    let current = prefs();

    rsx! {
        section {
            class: "section",
            h2 { "Account Settings" }
            div {
                class: "card settings-card",
                h3 { "Profile Information" }
                div {
                    class: "form-field",
                    label { class: "form-label", "Full Name" }
                    input { class: "form-input", r#type: "text", readonly: true, value: "{name}" }
                }
                div {
                    class: "form-field",
                    label { class: "form-label", "Email" }
                    input { class: "form-input", r#type: "email", readonly: true, value: "{email}" }
                }
            }
        }

        div {
            class: "card settings-card",
            h3 { "Learning Preferences" }
            for pref in Preference::ALL {
                div {
                    key: "{pref.title()}",
                    class: "preference-row",
                    div {
                        p { class: "preference-title", "{pref.title()}" }
                        p { class: "preference-description", "{pref.description()}" }
                    }
                    button {
                        class: if current.get(pref) { "switch switch--on" } else { "switch" },
                        role: "switch",
                        aria_checked: "{current.get(pref)}",
                        onclick: move |_| prefs.write().toggle(pref),
                        div { class: "switch-knob" }
                    }
                }
            }
        }

        div {
            class: "card settings-list",
            for label in ["Change Password", "Download My Data", "Privacy Settings"] {
                button {
                    key: "{label}",
                    class: "settings-row",
                    span { "{label}" }
                    Icon { icon: FaChevronRight, width: 14, height: 14 }
                }
            }
            button {
                class: "settings-row settings-row--danger",
                onclick: move |_| on_sign_out.call(()),
                Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                span { "Sign Out" }
            }
        }
    }
}
