//! # Screen navigation state machine
//!
//! [`ViewRouter`] is the single source of truth for what is on screen. It holds
//! one [`Screen`] plus the sub-state that only makes sense inside a screen: the
//! [`AuthMode`] of the auth form and the [`MainTab`] of the app shell.
//!
//! ```text
//! Home -> Onboarding -> Auth -> MainApp -> (sign out) Home
//!            ^            |
//!            +----back----+
//! ```
//!
//! Every transition method returns `true` when it applied. A request that does not
//! fit the current screen (selecting a tab during onboarding, going back from the
//! app shell) changes nothing, is logged at `debug` level and returns `false`.
//!
//! Entering a screen resets its sub-state: the auth screen always opens in
//! [`AuthMode::Login`] and the app shell always opens on [`MainTab::Home`].
//! [`ViewRouter::active_tab`] returns `None` outside the app shell so a stale tab
//! is never rendered.

use std::fmt;
use std::str::FromStr;

use store::{AuthMode, NavigationConfig, StartScreen, UserRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Onboarding,
    Auth,
    MainApp,
}

/// Sections of the authenticated app shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MainTab {
    #[default]
    Home,
    Lessons,
    Dictionary,
    Upload,
    Profile,
}

impl MainTab {
    pub const ALL: [MainTab; 5] = [
        MainTab::Home,
        MainTab::Lessons,
        MainTab::Dictionary,
        MainTab::Upload,
        MainTab::Profile,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MainTab::Home => "home",
            MainTab::Lessons => "lessons",
            MainTab::Dictionary => "dictionary",
            MainTab::Upload => "upload",
            MainTab::Profile => "profile",
        }
    }

    /// Navigation label. The upload tab is presented as "Practice".
    pub fn label(self) -> &'static str {
        match self {
            MainTab::Home => "Home",
            MainTab::Lessons => "Lessons",
            MainTab::Dictionary => "Dictionary",
            MainTab::Upload => "Practice",
            MainTab::Profile => "Profile",
        }
    }
}

impl fmt::Display for MainTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab: {}", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for MainTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MainTab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewRouter {
    screen: Screen,
    auth_mode: AuthMode,
    active_tab: MainTab,
    current_user: Option<UserRecord>,
    require_auth: bool,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl ViewRouter {
    pub fn new(config: &NavigationConfig) -> Self {
        let screen = match config.start_screen {
            StartScreen::Home => Screen::Home,
            StartScreen::Onboarding => Screen::Onboarding,
        };
        Self {
            screen,
            auth_mode: AuthMode::Login,
            active_tab: MainTab::Home,
            current_user: None,
            require_auth: config.require_auth,
        }
    }

    /// Router in its initial state with default navigation options.
    pub fn start() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Auth form mode, only while the auth screen is up.
    pub fn auth_mode(&self) -> Option<AuthMode> {
        (self.screen == Screen::Auth).then_some(self.auth_mode)
    }

    /// Selected app tab, only while the app shell is up.
    pub fn active_tab(&self) -> Option<MainTab> {
        (self.screen == Screen::MainApp).then_some(self.active_tab)
    }

    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user.as_ref()
    }

    /// `Home -> Onboarding`, from the "Get Started" button.
    pub fn advance_from_home(&mut self) -> bool {
        if self.screen != Screen::Home {
            return self.reject("advance_from_home");
        }
        self.enter(Screen::Onboarding);
        true
    }

    /// `Onboarding -> Auth`, or straight to the app when auth is disabled.
    pub fn complete_onboarding(&mut self) -> bool {
        if self.screen != Screen::Onboarding {
            return self.reject("complete_onboarding");
        }
        if self.require_auth {
            self.enter(Screen::Auth);
        } else {
            self.enter(Screen::MainApp);
        }
        true
    }

    /// `Auth -> MainApp` once the backend accepted the credentials.
    pub fn complete_auth(&mut self, user: UserRecord) -> bool {
        if self.screen != Screen::Auth {
            return self.reject("complete_auth");
        }
        tracing::info!("Authenticated as {}", user.email);
        self.current_user = Some(user);
        self.enter(Screen::MainApp);
        true
    }

    /// `Auth -> Onboarding`.
    pub fn back_from_auth(&mut self) -> bool {
        if self.screen != Screen::Auth {
            return self.reject("back_from_auth");
        }
        self.enter(Screen::Onboarding);
        true
    }

    pub fn set_auth_mode(&mut self, mode: AuthMode) -> bool {
        if self.screen != Screen::Auth {
            return self.reject("set_auth_mode");
        }
        self.auth_mode = mode;
        true
    }

    pub fn toggle_auth_mode(&mut self) -> bool {
        self.set_auth_mode(self.auth_mode.toggled())
    }

    pub fn select_tab(&mut self, tab: MainTab) -> bool {
        if self.screen != Screen::MainApp {
            return self.reject("select_tab");
        }
        self.active_tab = tab;
        true
    }

    /// Select a tab by its identifier (`"home"`, `"lessons"`, ...).
    pub fn select_tab_id(&mut self, id: &str) -> bool {
        match id.parse::<MainTab>() {
            Ok(tab) => self.select_tab(tab),
            Err(e) => {
                tracing::debug!("Ignoring tab selection: {}", e);
                false
            }
        }
    }

    /// `MainApp -> Home`, forgetting the signed-in user.
    pub fn sign_out(&mut self) -> bool {
        if self.screen != Screen::MainApp {
            return self.reject("sign_out");
        }
        if let Some(user) = self.current_user.take() {
            tracing::info!("Signed out {}", user.email);
        }
        self.enter(Screen::Home);
        true
    }

    fn enter(&mut self, screen: Screen) {
        tracing::debug!("Screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        match screen {
            Screen::Auth => self.auth_mode = AuthMode::Login,
            Screen::MainApp => self.active_tab = MainTab::Home,
            Screen::Home | Screen::Onboarding => {}
        }
    }

    fn reject(&self, action: &str) -> bool {
        tracing::debug!("Ignoring {} on {:?} screen", action, self.screen);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> UserRecord {
        UserRecord::new("Ann", "ann@x.com")
    }

    fn router_at(screen: Screen) -> ViewRouter {
        let mut router = ViewRouter::start();
        if screen == Screen::Home {
            return router;
        }
        router.advance_from_home();
        if screen == Screen::Onboarding {
            return router;
        }
        router.complete_onboarding();
        if screen == Screen::Auth {
            return router;
        }
        router.complete_auth(ann());
        router
    }

    #[test]
    fn test_start_on_home() {
        let router = ViewRouter::start();
        assert_eq!(router.screen(), Screen::Home);
        assert!(router.current_user().is_none());
        assert!(router.active_tab().is_none());
        assert!(router.auth_mode().is_none());
    }

    #[test]
    fn test_start_on_onboarding() {
        let config = NavigationConfig {
            start_screen: StartScreen::Onboarding,
            ..NavigationConfig::default()
        };
        assert_eq!(ViewRouter::new(&config).screen(), Screen::Onboarding);
    }

    #[test]
    fn test_happy_path() {
        let mut router = ViewRouter::start();
        assert!(router.advance_from_home());
        assert_eq!(router.screen(), Screen::Onboarding);

        assert!(router.complete_onboarding());
        assert_eq!(router.screen(), Screen::Auth);
        assert_eq!(router.auth_mode(), Some(AuthMode::Login));

        assert!(router.complete_auth(ann()));
        assert_eq!(router.screen(), Screen::MainApp);
        assert_eq!(router.current_user(), Some(&ann()));
        assert_eq!(router.active_tab(), Some(MainTab::Home));
    }

    #[test]
    fn test_onboarding_skips_auth_when_not_required() {
        let config = NavigationConfig {
            require_auth: false,
            ..NavigationConfig::default()
        };
        let mut router = ViewRouter::new(&config);
        router.advance_from_home();
        assert!(router.complete_onboarding());
        assert_eq!(router.screen(), Screen::MainApp);
        assert!(router.current_user().is_none());
    }

    #[test]
    fn test_out_of_order_transitions_are_ignored() {
        let mut router = ViewRouter::start();
        assert!(!router.complete_onboarding());
        assert!(!router.complete_auth(ann()));
        assert!(!router.back_from_auth());
        assert!(!router.sign_out());
        assert_eq!(router.screen(), Screen::Home);
        assert!(router.current_user().is_none());

        let mut router = router_at(Screen::MainApp);
        assert!(!router.advance_from_home());
        assert!(!router.set_auth_mode(AuthMode::Signup));
        assert_eq!(router.screen(), Screen::MainApp);
    }

    #[test]
    fn test_select_tab_during_onboarding_is_noop() {
        let mut router = router_at(Screen::Onboarding);
        let before = router.clone();
        assert!(!router.select_tab_id("lessons"));
        assert_eq!(router, before);
        assert_eq!(router.screen(), Screen::Onboarding);
        assert!(router.active_tab().is_none());
    }

    #[test]
    fn test_select_tab_in_main_app() {
        let mut router = router_at(Screen::MainApp);
        assert!(router.select_tab(MainTab::Dictionary));
        assert_eq!(router.active_tab(), Some(MainTab::Dictionary));
        assert!(router.select_tab_id("profile"));
        assert_eq!(router.active_tab(), Some(MainTab::Profile));
    }

    #[test]
    fn test_unknown_tab_id_is_noop() {
        let mut router = router_at(Screen::MainApp);
        router.select_tab(MainTab::Lessons);
        assert!(!router.select_tab_id("settings"));
        assert!(!router.select_tab_id("Lessons"));
        assert_eq!(router.active_tab(), Some(MainTab::Lessons));
    }

    #[test]
    fn test_back_from_auth() {
        let mut router = router_at(Screen::Auth);
        assert!(router.back_from_auth());
        assert_eq!(router.screen(), Screen::Onboarding);
        assert!(!router.back_from_auth());
        assert_eq!(router.screen(), Screen::Onboarding);
    }

    #[test]
    fn test_reentering_auth_resets_mode() {
        let mut router = router_at(Screen::Auth);
        assert!(router.toggle_auth_mode());
        assert_eq!(router.auth_mode(), Some(AuthMode::Signup));

        router.back_from_auth();
        assert!(router.auth_mode().is_none());
        router.complete_onboarding();
        assert_eq!(router.auth_mode(), Some(AuthMode::Login));
    }

    #[test]
    fn test_sign_out_resets_tab_and_user() {
        let mut router = router_at(Screen::MainApp);
        router.select_tab(MainTab::Profile);
        assert!(router.sign_out());
        assert_eq!(router.screen(), Screen::Home);
        assert!(router.current_user().is_none());
        assert!(router.active_tab().is_none());

        router.advance_from_home();
        router.complete_onboarding();
        router.complete_auth(ann());
        assert_eq!(router.active_tab(), Some(MainTab::Home));
    }

    #[test]
    fn test_tab_ids_and_labels() {
        for tab in MainTab::ALL {
            assert_eq!(tab.id().parse::<MainTab>(), Ok(tab));
        }
        assert_eq!(MainTab::Upload.label(), "Practice");
        assert_eq!(
            "quiz".parse::<MainTab>(),
            Err(UnknownTab("quiz".to_string()))
        );
    }
}
