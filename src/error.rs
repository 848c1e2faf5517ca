use std::fmt::{self, Debug, Display};

pub struct SimpleError {
    pub msg: String,
}

impl SimpleError {
    pub fn new(msg: &str) -> Self {
        Self {
            msg: msg.to_owned(),
        }
    }
}

impl<T> From<T> for SimpleError where T: Display {
    fn from(err: T) -> Self {
        Self {
            msg: format!("{}", err),
        }
    }
}

impl Debug for SimpleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

pub trait LogError {
    fn log_error(self, tag: &'static str) -> Self;
    fn log_warn(self, tag: &'static str) -> Self;
    fn log_error_consume(self, tag: &'static str);
    fn log_warn_consume(self, tag: &'static str);
}

impl<T, E: Debug> LogError for Result<T, E> {
    fn log_error(self, tag: &'static str) -> Self {
        if let Err(err) = &self {
            log::error!("[{}] {:?}", tag, err);
        }
        self
    }
    fn log_warn(self, tag: &'static str) -> Self {
        if let Err(err) = &self {
            log::warn!("[{}] {:?}", tag, err);
        }
        self
    }
    fn log_error_consume(self, tag: &'static str) {
        let _ = self.log_error(tag);
    }
    fn log_warn_consume(self, tag: &'static str) {
        let _ = self.log_warn(tag);
    }
}
