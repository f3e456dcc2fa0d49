//! Shared SignMate UI: the navigation state machine, the screen components and
//! the demo content behind the learning tabs.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaFacebook, FaGoogle};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub mod router;
pub use router::{MainTab, Screen, UnknownTab, ViewRouter};

pub mod auth_form;
pub mod catalogue;
pub mod greeting;
pub mod onboarding;
pub mod practice;
pub mod profile;

mod app_state;
pub use app_state::{use_backend, use_router, AppStateProvider};

pub mod views;

mod app;
pub use app::Screens;
