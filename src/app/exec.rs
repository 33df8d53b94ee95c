//! Shared request execution for the submit handlers.
//!
//! Every screen used to repeat the same catch-and-toast dance; it lives
//! here once instead. The caller owns the busy flag and the notification
//! wording, this helper owns awaiting the request and folding any failure
//! into a single user-facing message.

use std::future::Future;

use crate::error::Result;

#[derive(Debug)]
pub enum Submission<T> {
    Completed(T),
    Failed(String),
}

/// Awaits a gateway request and maps any error to `failure_message`. The
/// underlying cause is logged, never surfaced to the user.
pub async fn execute<T>(
    request: impl Future<Output = Result<T>>,
    failure_message: &str,
) -> Submission<T> {
    match request.await {
        Ok(value) => Submission::Completed(value),
        Err(e) => {
            tracing::warn!(error = %e, "gateway request failed");
            Submission::Failed(failure_message.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn completed_carries_the_value() {
        let result = execute(async { Ok(7u32) }, "nope").await;
        assert!(matches!(result, Submission::Completed(7)));
    }

    #[tokio::test]
    async fn failure_is_replaced_by_the_generic_message() {
        let result = execute(
            async {
                Err::<u32, _>(ErrorKind::GatewayError("500 internal".to_string()).into())
            },
            "Failed to process the request. Please try again.",
        )
        .await;
        match result {
            Submission::Failed(message) => {
                assert_eq!(message, "Failed to process the request. Please try again.")
            }
            Submission::Completed(_) => panic!("expected failure"),
        }
    }
}
