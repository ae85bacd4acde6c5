use std::{future::Future, time::Duration};

///
/// Run async function until it returns Ok or `max_attempts` attempts fail.
///
/// After failed attempt `n` (counting from 1) the loop sleeps
/// [backoff_for_attempt] before the next one. No sleep follows the last attempt.
///
/// ### Errors
/// Error of the last attempt
///
pub async fn retry<AttemptF, ErrF, F, Fut, T, E>(
    max_attempts: u32,
    backoff_base: Duration,
    attempt_log_fn: AttemptF,
    error_log_fn: ErrF,
    async_fn: F,
) -> Result<T, E>
where
    AttemptF: Fn(u32),
    ErrF: Fn(u32, &E),
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;

        attempt_log_fn(attempt);
        match async_fn().await {
            Ok(output) => return Ok(output),
            Err(err) => {
                error_log_fn(attempt, &err);
                if attempt >= max_attempts {
                    return Err(err);
                }
            }
        }

        tokio::time::sleep(backoff_for_attempt(backoff_base, attempt)).await;
    }
}

///
/// `2^attempt * base`, saturating
///
pub fn backoff_for_attempt(base: Duration, attempt: u32) -> Duration {
    let multiplier = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
    base.saturating_mul(multiplier)
}
