mod home;
pub use home::{Brand, HomeView};

mod onboarding;
pub use onboarding::OnboardingView;

mod auth;
pub use auth::AuthView;

mod navigation;
pub use navigation::{NavVariant, Navigation};

mod main_app;
pub use main_app::MainAppView;

mod dashboard;
pub use dashboard::DashboardView;

mod lessons;
pub use lessons::LessonsView;

mod dictionary;
pub use dictionary::DictionaryView;

mod practice;
pub use practice::PracticeView;

mod profile;
pub use profile::ProfileView;
