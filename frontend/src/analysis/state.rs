use crate::models::TaskStatus;

pub const POLL_INTERVAL_MS: u32 = 5_000;
pub const DONE_DELAY_MS: u32 = 1_000;

/// Recognized URL shapes, tried in order. The second element is the
/// character that ends the id segment for that shape.
const URL_PATTERNS: [(&str, char); 3] = [
    ("youtube.com/watch?v=", '&'),
    ("youtube.com/embed/", '?'),
    ("youtu.be/", '?'),
];

/// Pulls the video id out of a YouTube URL. Permissive pattern matching,
/// not a security boundary; the host check lives in [`validate_url`].
pub fn extract_video_id(url: &str) -> Option<String> {
    for (marker, stop) in URL_PATTERNS {
        if let Some(start) = url.find(marker) {
            let rest = &url[start + marker.len()..];
            let id = rest.split(stop).next().unwrap_or("");
            if !id.is_empty() {
                return Some(id.to_string());
            }
        }
    }
    None
}

/// Why a submission attempt did not reach the processing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    EmptyUrl,
    NotYoutube,
    NoVideoId,
    Rejected,
    Connection,
}

impl SubmitError {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitError::EmptyUrl => "Enter a YouTube link to analyze.",
            SubmitError::NotYoutube | SubmitError::NoVideoId => {
                "Enter a valid YouTube link (watch, embed or youtu.be)."
            }
            SubmitError::Rejected => "The analysis request was rejected. Please try again.",
            SubmitError::Connection => "Could not reach the analysis server. Please try again.",
        }
    }
}

/// Local validation, run before anything touches the network.
pub fn validate_url(url: &str) -> Result<String, SubmitError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::EmptyUrl);
    }
    if !trimmed.contains("youtube.com") && !trimmed.contains("youtu.be") {
        return Err(SubmitError::NotYoutube);
    }
    extract_video_id(trimmed).ok_or(SubmitError::NoVideoId)
}

/// Progress text shown while a task works through the pipeline.
pub fn status_message(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Ready => "Preparing...",
        TaskStatus::Extract => "Extracting video...",
        TaskStatus::Trans => "Preprocessing audio and video...",
        TaskStatus::Analysis => "AI analysis in progress...",
        TaskStatus::Saving => "Saving to database...",
        TaskStatus::Success => "Analysis complete!",
        _ => "Processing...",
    }
}

/// A failure that ends the current analysis attempt. Rendered as an error
/// card whose only action routes back to the submission page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalError {
    AnalysisFailed,
    VideoTooLong,
    StatusCheckFailed,
    TaskNotFound,
    ResultUnavailable,
}

impl FatalError {
    pub fn message(&self) -> &'static str {
        match self {
            FatalError::AnalysisFailed => "An error occurred during analysis.",
            FatalError::VideoTooLong => "This video is too long to analyze.",
            FatalError::StatusCheckFailed => "Could not check the analysis status.",
            FatalError::TaskNotFound => "No analysis exists for this task id.",
            FatalError::ResultUnavailable => "Could not load the analysis result.",
        }
    }
}

/// What the view should do after a poll round-trip resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    KeepPolling,
    Finished,
    Failed(FatalError),
    /// The view was torn down while the request was in flight; drop the
    /// response on the floor.
    Ignore,
}

/// Book-keeping for the status-polling loop. One instance lives for one
/// mounted processing view; the interval asks `try_begin` before every
/// request, so ticks never overlap an in-flight poll and nothing fires
/// after a terminal status or teardown.
#[derive(Debug, Default)]
pub struct PollTracker {
    in_flight: bool,
    terminal: bool,
    cancelled: bool,
}

impl PollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the next poll slot. Returns false when a poll is already in
    /// flight, a terminal status was observed, or the view is gone.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight || self.terminal || self.cancelled {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Applies a status response to the loop.
    pub fn complete(&mut self, status: TaskStatus) -> PollOutcome {
        self.in_flight = false;
        if self.cancelled {
            return PollOutcome::Ignore;
        }
        if status.is_terminal() {
            self.terminal = true;
        }
        match status {
            TaskStatus::Success => PollOutcome::Finished,
            TaskStatus::Error => PollOutcome::Failed(FatalError::AnalysisFailed),
            TaskStatus::Toolong => PollOutcome::Failed(FatalError::VideoTooLong),
            _ => PollOutcome::KeepPolling,
        }
    }

    /// A poll request failed in transport. Stops the loop; recovery is the
    /// user-driven "analyze another video" action.
    pub fn fail(&mut self) -> PollOutcome {
        self.in_flight = false;
        if self.cancelled {
            return PollOutcome::Ignore;
        }
        self.terminal = true;
        PollOutcome::Failed(FatalError::StatusCheckFailed)
    }

    /// Teardown. Any response still in flight resolves to `Ignore`.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_watch_urls() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        // id ends at the next query parameter
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_embed_urls() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_short_urls() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=share"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(extract_video_id("https://example.com/watch?v=abc"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v="), None);
        assert_eq!(extract_video_id("plain text"), None);
    }

    #[test]
    fn validation_stops_empty_input_before_the_network() {
        assert_eq!(validate_url(""), Err(SubmitError::EmptyUrl));
        assert_eq!(validate_url("   \t "), Err(SubmitError::EmptyUrl));
    }

    #[test]
    fn validation_requires_a_youtube_host() {
        assert_eq!(
            validate_url("https://vimeo.com/12345"),
            Err(SubmitError::NotYoutube)
        );
        assert_eq!(
            validate_url("https://www.youtube.com/feed/trending"),
            Err(SubmitError::NoVideoId)
        );
    }

    #[test]
    fn validation_returns_the_extracted_id() {
        assert_eq!(
            validate_url("  https://youtu.be/dQw4w9WgXcQ  "),
            Ok("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn status_messages_match_the_pipeline_stages() {
        assert_eq!(status_message(TaskStatus::Ready), "Preparing...");
        assert_eq!(status_message(TaskStatus::Extract), "Extracting video...");
        assert_eq!(
            status_message(TaskStatus::Trans),
            "Preprocessing audio and video..."
        );
        assert_eq!(
            status_message(TaskStatus::Analysis),
            "AI analysis in progress..."
        );
        assert_eq!(status_message(TaskStatus::Saving), "Saving to database...");
        assert_eq!(status_message(TaskStatus::Success), "Analysis complete!");
        assert_eq!(status_message(TaskStatus::Unknown), "Processing...");
        assert_eq!(status_message(TaskStatus::Error), "Processing...");
    }

    #[test]
    fn tracker_keeps_polling_through_pipeline_stages() {
        let mut tracker = PollTracker::new();
        for status in [
            TaskStatus::Ready,
            TaskStatus::Extract,
            TaskStatus::Trans,
            TaskStatus::Analysis,
            TaskStatus::Saving,
            TaskStatus::Unknown,
        ] {
            assert!(tracker.try_begin());
            assert_eq!(tracker.complete(status), PollOutcome::KeepPolling);
        }
    }

    #[test]
    fn no_poll_fires_after_a_terminal_status() {
        let mut tracker = PollTracker::new();
        assert!(tracker.try_begin());
        assert_eq!(tracker.complete(TaskStatus::Success), PollOutcome::Finished);
        // simulate the interval ticking a few more times before teardown
        for _ in 0..3 {
            assert!(!tracker.try_begin());
        }
    }

    #[test]
    fn success_finishes_exactly_once() {
        let mut tracker = PollTracker::new();
        assert!(tracker.try_begin());
        assert_eq!(tracker.complete(TaskStatus::Success), PollOutcome::Finished);
        assert!(!tracker.try_begin());
        // a hypothetical second completion can never be reached because
        // try_begin denies the slot, so Finished is emitted exactly once
    }

    #[test]
    fn error_and_toolong_stop_the_loop_with_a_fatal_error() {
        let mut tracker = PollTracker::new();
        assert!(tracker.try_begin());
        assert_eq!(
            tracker.complete(TaskStatus::Error),
            PollOutcome::Failed(FatalError::AnalysisFailed)
        );
        assert!(!tracker.try_begin());

        let mut tracker = PollTracker::new();
        assert!(tracker.try_begin());
        assert_eq!(
            tracker.complete(TaskStatus::Toolong),
            PollOutcome::Failed(FatalError::VideoTooLong)
        );
        assert!(!tracker.try_begin());
    }

    #[test]
    fn transport_failure_stops_the_loop() {
        let mut tracker = PollTracker::new();
        assert!(tracker.try_begin());
        assert_eq!(
            tracker.fail(),
            PollOutcome::Failed(FatalError::StatusCheckFailed)
        );
        assert!(!tracker.try_begin());
    }

    #[test]
    fn overlapping_ticks_share_one_in_flight_poll() {
        let mut tracker = PollTracker::new();
        assert!(tracker.try_begin());
        // the 5s timer fires again while the response is still pending
        assert!(!tracker.try_begin());
        assert_eq!(tracker.complete(TaskStatus::Analysis), PollOutcome::KeepPolling);
        assert!(tracker.try_begin());
    }

    #[test]
    fn late_response_after_teardown_is_ignored() {
        let mut tracker = PollTracker::new();
        assert!(tracker.try_begin());
        tracker.cancel();
        assert_eq!(tracker.complete(TaskStatus::Success), PollOutcome::Ignore);
        assert!(!tracker.try_begin());

        let mut tracker = PollTracker::new();
        assert!(tracker.try_begin());
        tracker.cancel();
        assert_eq!(tracker.fail(), PollOutcome::Ignore);
    }
}
