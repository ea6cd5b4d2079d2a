use std::time::{Duration, Instant};

/// Banner kind. Errors linger a little longer than confirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    fn ttl(self) -> Duration {
        match self {
            NoticeKind::Error => Duration::from_secs(3),
            NoticeKind::Success => Duration::from_secs(2),
        }
    }
}

/// One transient banner.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    expires: Instant,
}

/// Stack of transient banners. Concurrent notices stack without
/// deduplication; expired ones are swept on the event-loop tick.
#[derive(Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Notices::default()
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into(), NoticeKind::Error.ttl());
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into(), NoticeKind::Success.ttl());
    }

    fn push(&mut self, kind: NoticeKind, text: String, ttl: Duration) {
        self.items.push(Notice {
            kind,
            text,
            expires: Instant::now() + ttl,
        });
    }

    /// Drop expired notices.
    pub fn sweep(&mut self) {
        let now = Instant::now();
        self.items.retain(|n| n.expires > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    fn push_with_ttl(&mut self, kind: NoticeKind, text: &str, ttl: Duration) {
        self.push(kind, text.to_string(), ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_stack_without_dedup() {
        let mut notices = Notices::new();
        notices.error("load failed");
        notices.error("load failed");
        notices.success("saved");
        assert_eq!(notices.iter().count(), 3);
    }

    #[test]
    fn test_sweep_drops_only_expired() {
        let mut notices = Notices::new();
        notices.push_with_ttl(NoticeKind::Error, "old", Duration::from_secs(0));
        notices.push_with_ttl(NoticeKind::Success, "fresh", Duration::from_secs(60));
        notices.sweep();
        let texts: Vec<&str> = notices.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["fresh"]);
    }
}
