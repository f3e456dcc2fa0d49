//! Profile tab sections and the learner's demo statistics.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileSection {
    #[default]
    Overview,
    Achievements,
    Settings,
}

impl ProfileSection {
    pub const ALL: [ProfileSection; 3] = [
        ProfileSection::Overview,
        ProfileSection::Achievements,
        ProfileSection::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileSection::Overview => "Overview",
            ProfileSection::Achievements => "Achievements",
            ProfileSection::Settings => "Settings",
        }
    }
}

pub struct LearningStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub const LEARNING_STATS: [LearningStat; 4] = [
    LearningStat { label: "Total Signs Learned", value: "127", change: "+12 this week" },
    LearningStat { label: "Practice Sessions", value: "24", change: "+3 this week" },
    LearningStat { label: "Quiz Average", value: "85%", change: "+8% improvement" },
    LearningStat { label: "Community Rank", value: "#245", change: "+50 positions" },
];

/// (action, item, when, points)
pub const PROFILE_ACTIVITY: [(&str, &str, &str, u32); 4] = [
    ("Completed Quiz", "Basic Emotions", "2 hours ago", 85),
    ("Practiced Signs", "Family Members", "1 day ago", 12),
    ("Helped User", "Community Question", "2 days ago", 5),
    ("Lesson Complete", "Advanced Greetings", "3 days ago", 25),
];

/// (topic, percent complete)
pub const LEARNING_PROGRESS: [(&str, u8); 3] = [
    ("Basic Signs", 100),
    ("Numbers", 85),
    ("Family & Friends", 70),
];

pub const COMMUNITY_IMPACT: [(&str, &str); 3] = [
    ("People Helped", "15"),
    ("Community Points", "2,340"),
    ("Rank", "#245"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AchievementState {
    Earned { when: &'static str },
    InProgress { percent: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub state: AchievementState,
}

impl Achievement {
    pub fn is_earned(&self) -> bool {
        matches!(self.state, AchievementState::Earned { .. })
    }
}

pub const ACHIEVEMENTS: [Achievement; 5] = [
    Achievement { id: 1, title: "First Steps", description: "Completed your first lesson", state: AchievementState::Earned { when: "2 weeks ago" } },
    Achievement { id: 2, title: "Consistent Learner", description: "7-day learning streak", state: AchievementState::Earned { when: "1 week ago" } },
    Achievement { id: 3, title: "Community Helper", description: "Helped 5 fellow learners", state: AchievementState::Earned { when: "3 days ago" } },
    Achievement { id: 4, title: "Sign Master", description: "Mastered 100 signs", state: AchievementState::InProgress { percent: 85 } },
    Achievement { id: 5, title: "Perfect Score", description: "Achieved 100% in a quiz", state: AchievementState::InProgress { percent: 95 } },
];

pub fn earned_count(achievements: &[Achievement]) -> usize {
    achievements.iter().filter(|a| a.is_earned()).count()
}

/// Notification switches in the settings section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preference {
    PracticeReminders,
    CommunityUpdates,
    AchievementAlerts,
}

impl Preference {
    pub const ALL: [Preference; 3] = [
        Preference::PracticeReminders,
        Preference::CommunityUpdates,
        Preference::AchievementAlerts,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Preference::PracticeReminders => "Daily Practice Reminders",
            Preference::CommunityUpdates => "Community Updates",
            Preference::AchievementAlerts => "Achievement Notifications",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preference::PracticeReminders => "Get notified about your practice sessions",
            Preference::CommunityUpdates => "Stay updated with community activities",
            Preference::AchievementAlerts => "Celebrate your learning milestones",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub practice_reminders: bool,
    pub community_updates: bool,
    pub achievement_alerts: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            practice_reminders: true,
            community_updates: false,
            achievement_alerts: true,
        }
    }
}

impl Preferences {
    pub fn get(&self, pref: Preference) -> bool {
        match pref {
            Preference::PracticeReminders => self.practice_reminders,
            Preference::CommunityUpdates => self.community_updates,
            Preference::AchievementAlerts => self.achievement_alerts,
        }
    }

    pub fn toggle(&mut self, pref: Preference) {
        let slot = match pref {
            Preference::PracticeReminders => &mut self.practice_reminders,
            Preference::CommunityUpdates => &mut self.community_updates,
            Preference::AchievementAlerts => &mut self.achievement_alerts,
        };
        *slot = !*slot;
    }
}
