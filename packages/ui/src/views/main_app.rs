use dioxus::prelude::*;
use store::UserRecord;

use crate::router::MainTab;
use crate::views::{
    Brand, DashboardView, DictionaryView, LessonsView, NavVariant, Navigation, PracticeView,
    ProfileView,
};

/// The authenticated shell: sidebar (or bottom bar) plus the active tab.
#[component]
pub fn MainAppView(
    user: Option<UserRecord>,
    active_tab: MainTab,
    set_active_tab: EventHandler<MainTab>,
    on_sign_out: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "main-app",

            aside {
                class: "main-sidebar",
                Brand {}
                Navigation {
                    active_tab,
                    variant: NavVariant::Sidebar,
                    on_select: set_active_tab,
                }
            }

            main {
                class: "main-content",
                {match active_tab {
                    MainTab::Home => rsx! {
                        DashboardView { user: user.clone(), on_navigate: set_active_tab }
                    },
                    MainTab::Lessons => rsx! { LessonsView {} },
                    MainTab::Dictionary => rsx! { DictionaryView {} },
                    MainTab::Upload => rsx! { PracticeView {} },
                    MainTab::Profile => rsx! {
                        ProfileView { user: user.clone(), on_sign_out }
                    },
                }}
            }

            div {
                class: "main-bottom-nav",
                Navigation {
                    active_tab,
                    variant: NavVariant::BottomBar,
                    on_select: set_active_tab,
                }
            }
        }
    }
}
