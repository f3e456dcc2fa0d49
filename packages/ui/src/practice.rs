//! State behind the practice tab: record, upload and history sub-tabs.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PracticeTab {
    #[default]
    Record,
    Upload,
    History,
}

impl PracticeTab {
    pub const ALL: [PracticeTab; 3] = [
        PracticeTab::Record,
        PracticeTab::Upload,
        PracticeTab::History,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PracticeTab::Record => "Record Practice",
            PracticeTab::Upload => "Upload Video",
            PracticeTab::History => "Practice History",
        }
    }
}

/// Optional description attached to an upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PracticeDetails {
    pub title: String,
    pub category: Option<String>,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PracticeSession {
    tab: PracticeTab,
    recording: bool,
    selected_file: Option<String>,
    pub details: PracticeDetails,
}

impl PracticeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> PracticeTab {
        self.tab
    }

    /// Switching tabs keeps the recording flag and the chosen file.
    pub fn select_tab(&mut self, tab: PracticeTab) {
        self.tab = tab;
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn toggle_recording(&mut self) {
        self.recording = !self.recording;
        let state = if self.recording { "started" } else { "stopped" };
        tracing::debug!("Practice recording {}", state);
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    /// Record the value of a file input. Browsers report a fake path such as
    /// `C:\fakepath\hello.mp4`; only the file name is kept. An empty value
    /// (the picker was cancelled) leaves the previous choice alone.
    pub fn select_file(&mut self, value: &str) {
        let name = value.rsplit(['/', '\\']).next().unwrap_or(value).trim();
        if !name.is_empty() {
            self.selected_file = Some(name.to_string());
        }
    }
}

/// Per-state text of the recording panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordingCopy {
    pub badge: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

impl RecordingCopy {
    pub fn for_state(recording: bool) -> Self {
        if recording {
            Self {
                badge: "Recording...",
                heading: "Recording Your Practice",
                description: "SignMate is recording your practice session",
                action: "Stop Recording",
            }
        } else {
            Self {
                badge: "Camera Ready",
                heading: "Ready to Practice?",
                description: "Position yourself in the camera frame and start practicing your signs",
                action: "Start Recording",
            }
        }
    }
}

pub const HISTORY_STATS: [(&str, &str); 3] = [
    ("Total Practices", "24"),
    ("Average Score", "85%"),
    ("Improvement", "+12%"),
];
