use serde::{Deserialize, Serialize};

/// The analysis backend sends `taskid` and `video_id` as either a JSON
/// number or a string. `-1` in either form is the sentinel for
/// "rejected / not found".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Text(String),
    Number(i64),
}

impl IdValue {
    pub fn is_sentinel(&self) -> bool {
        match self {
            IdValue::Text(s) => s == "-1",
            IdValue::Number(n) => *n == -1,
        }
    }

    pub fn to_id_string(&self) -> String {
        match self {
            IdValue::Text(s) => s.clone(),
            IdValue::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitResponse {
    pub taskid: IdValue,
}

impl SubmitResponse {
    /// The accepted task id, or `None` when the server rejected the request
    /// with the `-1` sentinel.
    pub fn task_id(&self) -> Option<String> {
        if self.taskid.is_sentinel() {
            None
        } else {
            Some(self.taskid.to_id_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Ready,
    Extract,
    Trans,
    Analysis,
    Saving,
    Success,
    Error,
    Toolong,
    /// Any status string this build does not know about. Treated as
    /// "still processing" rather than a hard failure.
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Once a terminal status has been observed, polling must stop.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Success | TaskStatus::Error | TaskStatus::Toolong
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub status: TaskStatus,
}

/// Server-supplied HTML fragment. The analysis backend is a trusted
/// collaborator; this newtype marks the one place where its markup crosses
/// into the page unsanitized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisInfo {
    pub video_id: IdValue,
    pub score: i64,
    pub description: RichText,
    pub tags: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl AnalysisInfo {
    /// The analyzed video id, or `None` when the server answered with the
    /// `-1` "no such task" sentinel.
    pub fn video_id(&self) -> Option<String> {
        if self.video_id.is_sentinel() {
            None
        } else {
            Some(self.video_id.to_id_string())
        }
    }

    /// Tags arrive as one comma-separated string. Order and duplicates are
    /// kept as received, blanks dropped.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Display classification of the 0-100 safety score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyTier {
    Safe,
    Caution,
    Harmful,
}

impl SafetyTier {
    pub fn classify(score: i64) -> Self {
        if score >= 70 {
            SafetyTier::Safe
        } else if score >= 40 {
            SafetyTier::Caution
        } else {
            SafetyTier::Harmful
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            SafetyTier::Safe => "This video is safe to watch",
            SafetyTier::Caution => "This video needs caution",
            SafetyTier::Harmful => "This video is likely harmful",
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            SafetyTier::Safe => "#10b981",
            SafetyTier::Caution => "#f59e0b",
            SafetyTier::Harmful => "#ef4444",
        }
    }
}
