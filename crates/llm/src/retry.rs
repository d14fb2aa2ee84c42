use std::time::Duration;
use textsum_common::{Result, SummarizerError};
use tracing::{debug, warn};

use crate::llm_trait::InferenceBackend;
use crate::types::SummaryRequest;

/// Exponential backoff settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,

    /// Delay before the second attempt; doubles after that
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
        }
    }

    /// Delay before the zero-based `attempt` (>= 1)
    pub fn delay_before(&self, attempt: u32) -> Duration {
        self.initial_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

/// Retry session state
#[derive(Debug)]
enum RetryState {
    Attempting(u32),
    Done(String),
    Failed(SummarizerError),
}

/// Drives attempts against a backend until success, a permanent failure, or exhaustion
#[derive(Debug, Clone, Default)]
pub struct RetryController {
    policy: RetryPolicy,
}

impl RetryController {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run the retry session for one request
    pub async fn run(
        &self,
        backend: &dyn InferenceBackend,
        request: &SummaryRequest,
        credential: &str,
    ) -> Result<String> {
        let mut state = RetryState::Attempting(0);

        loop {
            state = match state {
                RetryState::Attempting(attempt) => {
                    self.step(attempt, backend, request, credential).await
                }
                RetryState::Done(summary) => return Ok(summary),
                RetryState::Failed(error) => return Err(error),
            };
        }
    }

    async fn step(
        &self,
        attempt: u32,
        backend: &dyn InferenceBackend,
        request: &SummaryRequest,
        credential: &str,
    ) -> RetryState {
        let max_attempts = self.policy.max_attempts.max(1);

        let error = match backend.attempt(request, credential).await {
            Ok(summary) => return RetryState::Done(summary),
            Err(e) => e,
        };

        if !error.is_retryable() {
            debug!("Attempt {}/{} failed permanently: {}", attempt + 1, max_attempts, error);
            return RetryState::Failed(error);
        }

        let next = attempt + 1;
        if next >= max_attempts {
            return RetryState::Failed(SummarizerError::Exhausted {
                attempts: max_attempts,
                source: Box::new(error),
            });
        }

        let delay = self.policy.delay_before(next);
        warn!(
            "{}. Retrying in {:?}... (attempt {}/{})",
            error,
            delay,
            next + 1,
            max_attempts
        );
        tokio::time::sleep(delay).await;

        RetryState::Attempting(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SummaryStyle;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::time::Instant;

    /// Backend replaying scripted outcomes and recording when each attempt started
    struct ScriptedBackend {
        outcomes: Mutex<VecDeque<Result<String>>>,
        calls: Mutex<Vec<Instant>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(outcomes: Vec<Result<String>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                calls: Mutex::new(Vec::new()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Instant> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl InferenceBackend for ScriptedBackend {
        async fn attempt(&self, request: &SummaryRequest, _credential: &str) -> Result<String> {
            self.calls.lock().unwrap().push(Instant::now());
            self.prompts.lock().unwrap().push(request.prompt().to_string());
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(SummarizerError::transport("script exhausted")))
        }
    }

    fn request() -> SummaryRequest {
        SummaryRequest::new("Some text to summarize.", SummaryStyle::Short)
    }

    #[test]
    fn test_delay_schedule() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_before(1), Duration::from_secs(2));
        assert_eq!(policy.delay_before(2), Duration::from_secs(4));
        assert_eq!(policy.delay_before(3), Duration::from_secs(8));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success() {
        let backend = ScriptedBackend::new(vec![Ok("summary".to_string())]);
        let controller = RetryController::default();

        let result = controller.run(&backend, &request(), "token").await.unwrap();
        assert_eq!(result, "summary");
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_delays_then_success() {
        let backend = ScriptedBackend::new(vec![
            Err(SummarizerError::api(503, "loading")),
            Err(SummarizerError::api(429, "rate limited")),
            Ok("summary".to_string()),
        ]);
        let controller = RetryController::default();

        let result = controller.run(&backend, &request(), "token").await.unwrap();
        assert_eq!(result, "summary");

        let calls = backend.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1] - calls[0], Duration::from_secs(2));
        assert_eq!(calls[2] - calls[1], Duration::from_secs(4));

        // every attempt sees the same prompt
        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts.iter().all(|p| p == request().prompt()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_wraps_last_failure() {
        let backend = ScriptedBackend::new(vec![
            Err(SummarizerError::api(500, "first")),
            Err(SummarizerError::api(502, "second")),
            Err(SummarizerError::api(503, "third")),
        ]);
        let controller = RetryController::default();

        let err = controller.run(&backend, &request(), "token").await.unwrap_err();
        assert_eq!(backend.calls().len(), 3);
        match &err {
            SummarizerError::Exhausted { attempts, source } => {
                assert_eq!(*attempts, 3);
                assert!(matches!(**source, SummarizerError::Api { status: 503, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("failed after 3 attempts"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_retry_on_client_errors() {
        for status in [400, 401, 403, 404] {
            let backend = ScriptedBackend::new(vec![
                Err(SummarizerError::api(status, "nope")),
                Ok("unreachable".to_string()),
            ]);
            let controller = RetryController::default();

            let err = controller.run(&backend, &request(), "token").await.unwrap_err();
            assert_eq!(backend.calls().len(), 1, "status {status}");
            assert_eq!(err.status_code(), Some(status));
            assert!(!matches!(err, SummarizerError::Exhausted { .. }));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_retry_on_transport_or_empty_result() {
        for failure in [SummarizerError::transport("timed out"), SummarizerError::EmptyResult] {
            let backend = ScriptedBackend::new(vec![Err(failure), Ok("unreachable".to_string())]);
            let controller = RetryController::default();

            let err = controller.run(&backend, &request(), "token").await.unwrap_err();
            assert_eq!(backend.calls().len(), 1);
            assert!(err.status_code().is_none());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_attempt_policy() {
        let backend = ScriptedBackend::new(vec![Err(SummarizerError::api(503, "busy"))]);
        let controller = RetryController::new(RetryPolicy::new(1, Duration::from_secs(2)));

        let err = controller.run(&backend, &request(), "token").await.unwrap_err();
        assert_eq!(backend.calls().len(), 1);
        assert!(matches!(err, SummarizerError::Exhausted { attempts: 1, .. }));
    }
}
