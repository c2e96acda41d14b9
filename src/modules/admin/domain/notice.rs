use std::time::Duration;

use tokio::time::Instant;

/// How long a save or import banner stays up.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Holds at most one notice. A newer notice replaces the old one and
/// restarts the clock.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    current: Option<Notice>,
    ttl: Duration,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.post(NoticeKind::Success, message.into(), self.ttl);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.post(NoticeKind::Error, message.into(), self.ttl);
    }

    /// Error that stays up longer than the default, e.g. a failed import
    /// whose reason the user needs time to read.
    pub fn error_for(&mut self, message: impl Into<String>, ttl: Duration) {
        self.post(NoticeKind::Error, message.into(), ttl);
    }

    fn post(&mut self, kind: NoticeKind, message: String, ttl: Duration) {
        self.current = Some(Notice {
            kind,
            message,
            expires_at: Instant::now() + ttl,
        });
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Drops the notice once it has expired.
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_notice_clears_after_ttl() {
        let mut board = NoticeBoard::default();
        board.success("Saved");

        tokio::time::advance(Duration::from_millis(2_999)).await;
        board.tick(Instant::now());
        assert_eq!(board.current().map(|n| n.kind), Some(NoticeKind::Success));

        tokio::time::advance(Duration::from_millis(1)).await;
        board.tick(Instant::now());
        assert!(board.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_notice_restarts_the_clock() {
        let mut board = NoticeBoard::new(Duration::from_secs(3));
        board.success("first");
        tokio::time::advance(Duration::from_secs(2)).await;
        board.error_for("second", Duration::from_secs(5));

        tokio::time::advance(Duration::from_secs(4)).await;
        board.tick(Instant::now());

        let notice = board.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "second");
    }
}
