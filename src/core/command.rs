use async_trait::async_trait;
use crate::core::library::PricingError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    Unavailable {
        message: String,
        retryable: bool,
    },
    Validation {
        message: String,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::Unavailable { message, .. } => { message.as_str() }
            CommandError::Validation { message } => { message.as_str() }
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CommandError::Unavailable { retryable, .. } => { *retryable }
            CommandError::Validation { .. } => { false }
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<PricingError> for CommandError {
    fn from(other: PricingError) -> Self {
        match other {
            PricingError::ServiceUnavailable { message, retryable } => {
                CommandError::Unavailable { message, retryable }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::PricingError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let err = CommandError::from(PricingError::unavailable("test", true));
        assert_eq!(CommandError::Unavailable { message: "test".to_string(), retryable: true }, err);
        assert_eq!("test", err.message());
        assert!(err.retryable());
    }

    #[tokio::test]
    async fn test_should_not_retry_validation_error() {
        let err = CommandError::Validation { message: "bad id".to_string() };
        assert_eq!("bad id", err.message());
        assert!(!err.retryable());
    }
}
