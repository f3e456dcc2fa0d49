use dioxus::prelude::*;

use crate::icons::{FaBook, FaBookOpen, FaHouse, FaUpload, FaUser};
use crate::router::MainTab;
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    /// Vertical list in the desktop sidebar.
    Sidebar,
    /// Fixed tab bar along the bottom on small screens.
    BottomBar,
}

#[component]
pub fn Navigation(
    active_tab: MainTab,
    variant: NavVariant,
    on_select: EventHandler<MainTab>,
) -> Element {
    let (container, item) = match variant {
        NavVariant::Sidebar => ("nav-sidebar", "nav-item"),
        NavVariant::BottomBar => ("nav-bottom", "nav-tab"),
    };

    rsx! {
        nav {
            class: "{container}",
            for tab in MainTab::ALL {
                button {
                    key: "{tab.id()}",
                    class: if tab == active_tab { "{item} {item}--active" } else { "{item}" },
                    onclick: move |_| on_select.call(tab),
                    TabIcon { tab }
                    span { "{tab.label()}" }
                }
            }
        }
    }
}

#[component]
fn TabIcon(tab: MainTab) -> Element {
    match tab {
        MainTab::Home => rsx! { Icon { icon: FaHouse, width: 20, height: 20 } },
        MainTab::Lessons => rsx! { Icon { icon: FaBookOpen, width: 20, height: 20 } },
        MainTab::Dictionary => rsx! { Icon { icon: FaBook, width: 20, height: 20 } },
        MainTab::Upload => rsx! { Icon { icon: FaUpload, width: 20, height: 20 } },
        MainTab::Profile => rsx! { Icon { icon: FaUser, width: 20, height: 20 } },
    }
}
