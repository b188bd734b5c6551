#[derive(thiserror::Error, Debug)]
pub enum SendCodeError {
    #[error("Form data unavailable")]
    FormData,

    #[error("Request timed out")]
    Timeout,

    #[error("Request error")]
    Request(#[source] gloo_net::Error),

    #[error("Parse error")]
    Parse(#[source] gloo_net::Error),
}

impl SendCodeError {
    /// Maps a transport error, telling aborted requests apart from others.
    pub fn from_request(err: gloo_net::Error) -> Self {
        let lowered = err.to_string().to_lowercase();

        if lowered.contains("abort") || lowered.contains("timeout") {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }

    /// Message including the source error, for the console.
    pub fn trace_message(&self) -> String {
        use std::error::Error;

        match self.source() {
            Some(source) => format!("{}: {}", self, source),
            None => self.to_string(),
        }
    }
}

pub type SendCodeResult<T> = Result<T, SendCodeError>;
