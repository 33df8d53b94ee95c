//! Transient user-visible messages (the toast mechanism).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

pub trait NotificationSink {
    fn notify(&mut self, notice: Notice);

    fn info(&mut self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        });
    }

    fn success(&mut self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    fn error(&mut self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }
}

/// Collecting sink; the CLI drains it after each action and tests assert on
/// its contents.
#[derive(Debug, Default)]
pub struct NoticeLog {
    pub notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> NoticeLog {
        NoticeLog::default()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl NotificationSink for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_collects_in_order() {
        let mut log = NoticeLog::new();
        log.info("one");
        log.error("two");
        assert_eq!(log.notices.len(), 2);
        assert_eq!(log.notices[0].level, NoticeLevel::Info);
        assert_eq!(log.last().unwrap().message, "two");
    }
}
