use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientErrorCode {
    InvalidArgument,
    Network,
    Internal,
}

impl ClientErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientErrorCode::InvalidArgument => "countly-client/invalid-argument",
            ClientErrorCode::Network => "countly-client/network",
            ClientErrorCode::Internal => "countly-client/internal",
        }
    }
}

/// Failure reported by a [`CountlyClient`](crate::client::CountlyClient)
/// implementation. The adapter never interprets these; they travel to the
/// caller unchanged.
#[derive(Clone, Debug)]
pub struct ClientError {
    pub code: ClientErrorCode,
    message: String,
}

impl ClientError {
    pub fn new(code: ClientErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for ClientError {}

pub type ClientResult<T> = Result<T, ClientError>;

pub fn invalid_argument(message: impl Into<String>) -> ClientError {
    ClientError::new(ClientErrorCode::InvalidArgument, message)
}

pub fn network_error(message: impl Into<String>) -> ClientError {
    ClientError::new(ClientErrorCode::Network, message)
}

pub fn internal_error(message: impl Into<String>) -> ClientError {
    ClientError::new(ClientErrorCode::Internal, message)
}
