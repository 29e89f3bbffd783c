//! Dialog-style user notifications

use std::fmt;
use std::io::{self, Write};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
    Success,
}

impl NoticeLevel {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Success => "Success",
        }
    }
}

/// A message shown to the user, blocking the session until printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.title(), self.message)
    }
}

/// Print a notice and mirror it to the log
pub fn show<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    match notice.level {
        NoticeLevel::Warning => warn!("{}", notice.message),
        NoticeLevel::Error => error!("{}", notice.message),
        NoticeLevel::Success => info!("{}", notice.message),
    }
    writeln!(out, "{}", notice)?;
    out.flush()
}
