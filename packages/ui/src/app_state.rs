//! App-wide context: the navigation state and the auth backend.

use api::MockBackend;
use dioxus::prelude::*;
use store::AppConfig;

use crate::router::ViewRouter;

/// Get the navigation state.
/// Writing to the returned signal re-renders whichever screen is affected.
pub fn use_router() -> Signal<ViewRouter> {
    use_context::<Signal<ViewRouter>>()
}

/// Get the auth backend shared by every form instance.
pub fn use_backend() -> Signal<MockBackend> {
    use_context::<Signal<MockBackend>>()
}

/// Provider component that owns the router and the backend.
/// Wrap your app with this component; it reads `signmate.toml` once on mount.
#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let config = use_hook(AppConfig::load);

    use_context_provider(|| Signal::new(ViewRouter::new(&config.navigation)));
    use_context_provider(|| Signal::new(MockBackend::new(config.auth.clone())));

    rsx! {
        {children}
    }
}
