// Error taxonomy for the behavior registry.
// Every failure here is recoverable and handled at the call site; nothing is
// fatal to the process.

use thiserror::Error;

/// Errors a caller can receive from contexts, wrappers, and adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BehaviorError {
    /// A context was invoked before any strategy was bound to it.
    #[error("no strategy bound to context")]
    UnboundStrategy,

    /// A selector or media format was not recognized. The caller can degrade
    /// gracefully, e.g. skip the entry and keep going.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            BehaviorError::UnboundStrategy.to_string(),
            "no strategy bound to context"
        );
        assert_eq!(
            BehaviorError::UnsupportedFormat("avi".to_string()).to_string(),
            "unsupported format: avi"
        );
    }

    #[test]
    fn test_errors_compare() {
        assert_eq!(
            BehaviorError::UnsupportedFormat("avi".into()),
            BehaviorError::UnsupportedFormat("avi".into())
        );
        assert_ne!(
            BehaviorError::UnboundStrategy,
            BehaviorError::UnsupportedFormat("avi".into())
        );
    }
}
