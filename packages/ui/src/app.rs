use dioxus::prelude::*;

use crate::app_state::use_router;
use crate::router::Screen;
use crate::views::{AuthView, HomeView, MainAppView, OnboardingView};

/// Renders whichever screen the router is on and feeds user actions back into it.
#[component]
pub fn Screens() -> Element {
    let mut router = use_router();
    let screen = router.read().screen();

    match screen {
        Screen::Home => rsx! {
            HomeView {
                on_get_started: move |_| {
                    router.write().advance_from_home();
                },
            }
        },
        Screen::Onboarding => rsx! {
            OnboardingView {
                on_complete: move |_| {
                    router.write().complete_onboarding();
                },
            }
        },
        Screen::Auth => {
            let mode = router.read().auth_mode().unwrap_or_default();
            rsx! {
                AuthView {
                    mode,
                    on_auth_complete: move |user| {
                        router.write().complete_auth(user);
                    },
                    on_back: move |_| {
                        router.write().back_from_auth();
                    },
                    on_switch_mode: move |_| {
                        router.write().toggle_auth_mode();
                    },
                }
            }
        }
        Screen::MainApp => {
            let (user, active_tab) = {
                let state = router.read();
                (state.current_user().cloned(), state.active_tab().unwrap_or_default())
            };
            rsx! {
                MainAppView {
                    user,
                    active_tab,
                    set_active_tab: move |tab| {
                        router.write().select_tab(tab);
                    },
                    on_sign_out: move |_| {
                        router.write().sign_out();
                    },
                }
            }
        }
    }
}
