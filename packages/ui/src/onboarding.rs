//! Onboarding carousel steps and progression.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnboardingStep {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const STEPS: [OnboardingStep; 5] = [
    OnboardingStep {
        title: "Welcome to SignMate",
        subtitle: "Your companion for mastering Indian Sign Language",
        description: "Begin your journey to learn ISL with personalized lessons and interactive practice sessions.",
    },
    OnboardingStep {
        title: "Learn with Interactive Lessons",
        subtitle: "Master ISL step by step",
        description: "Follow structured video lessons designed by ISL experts, with clear demonstrations and practice exercises.",
    },
    OnboardingStep {
        title: "Comprehensive Dictionary",
        subtitle: "Explore thousands of signs",
        description: "Access our extensive ISL dictionary with search filters, categories, and detailed sign demonstrations.",
    },
    OnboardingStep {
        title: "Practice & Get Feedback",
        subtitle: "Upload and improve your skills",
        description: "Record your practice sessions and receive AI-powered feedback to perfect your signing technique.",
    },
    OnboardingStep {
        title: "Join the Community",
        subtitle: "Connect with fellow learners",
        description: "Share your progress, participate in challenges, and learn together with the SignMate community.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnboardingProgress {
    Step(usize),
    Completed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnboardingFlow {
    current: usize,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn step(&self) -> &'static OnboardingStep {
        &STEPS[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == STEPS.len()
    }

    /// Whether step `index` is reached (drives the progress dots).
    pub fn is_reached(&self, index: usize) -> bool {
        index <= self.current
    }

    /// Skipping is offered once the user has seen the welcome step.
    pub fn can_skip(&self) -> bool {
        self.current > 0
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last() {
            "Get Started"
        } else {
            "Continue"
        }
    }

    pub fn next(&mut self) -> OnboardingProgress {
        if self.is_last() {
            OnboardingProgress::Completed
        } else {
            self.current += 1;
            OnboardingProgress::Step(self.current)
        }
    }

    pub fn skip(&mut self) -> OnboardingProgress {
        if self.can_skip() {
            OnboardingProgress::Completed
        } else {
            OnboardingProgress::Step(self.current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_every_step_then_completes() {
        let mut flow = OnboardingFlow::new();
        assert_eq!(flow.step().title, "Welcome to SignMate");
        for expected in 1..STEPS.len() {
            assert_eq!(flow.next(), OnboardingProgress::Step(expected));
        }
        assert!(flow.is_last());
        assert_eq!(flow.next_label(), "Get Started");
        assert_eq!(flow.next(), OnboardingProgress::Completed);
        assert_eq!(flow.index(), STEPS.len() - 1);
    }

    #[test]
    fn test_skip_only_after_first_step() {
        let mut flow = OnboardingFlow::new();
        assert!(!flow.can_skip());
        assert_eq!(flow.skip(), OnboardingProgress::Step(0));

        flow.next();
        assert!(flow.can_skip());
        assert_eq!(flow.skip(), OnboardingProgress::Completed);
    }

    #[test]
    fn test_progress_dots() {
        let mut flow = OnboardingFlow::new();
        flow.next();
        assert!(flow.is_reached(0));
        assert!(flow.is_reached(1));
        assert!(!flow.is_reached(2));
        assert_eq!(flow.next_label(), "Continue");
    }
}
