use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Runs `op` up to `attempts + 1` times, sleeping `delay` between tries, while
/// `should_retry` accepts the error. The last error is returned as is.
pub async fn with_retry<T, E, F, Fut>(
    attempts: u32,
    delay: Duration,
    should_retry: impl Fn(&E) -> bool,
    mut op: F,
) -> Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts && should_retry(&e) => {
                attempt += 1;
                warn!(attempt, max = attempts, error = %e, "retrying");
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn retries_until_success() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<u32, String> = with_retry(3, Duration::ZERO, |_| true, move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            if n < 2 { Err(format!("fail {}", n)) } else { Ok(n) }
        })
        .await;

        assert_eq!(result, Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_attempts() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<(), String> = with_retry(2, Duration::ZERO, |_| true, move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("down".to_string())
        })
        .await;

        assert_eq!(result, Err("down".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn zero_attempts_and_fatal_errors_do_not_retry() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let _: Result<(), String> = with_retry(0, Duration::ZERO, |_| true, move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("once".to_string())
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let _: Result<(), String> = with_retry(5, Duration::ZERO, |e: &String| e != "fatal", move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("fatal".to_string())
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
