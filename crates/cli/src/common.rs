//! Shared helpers for commands: exit-code mapping, status lines and spinners.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::time::{Duration, Instant};

/// Run a command body and map its outcome to an exit code, printing the
/// error on failure.
pub async fn run_cli_async<F, Fut>(f: F) -> i32
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    match f().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("❌ {}", style(err).red());
            1
        }
    }
}

/// Where user-facing status lines go.
///
/// With `--stdout` the libdef itself is written to stdout, so status moves
/// to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Status {
    to_stderr: bool,
}

impl Status {
    /// Status output, on stderr when `to_stderr` is set.
    pub fn new(to_stderr: bool) -> Self {
        Self { to_stderr }
    }

    /// Print one status line.
    pub fn line(self, message: impl Display) {
        if self.to_stderr {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
    }
}

/// A steadily ticking spinner showing `message`.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());
    spinner
}

/// Time since `start`, as `123ms` or `2s 45ms`.
pub fn format_elapsed_ms(start: Instant) -> String {
    let elapsed = start.elapsed();
    if elapsed.as_secs() == 0 {
        return format!("{}ms", elapsed.as_millis());
    }
    let seconds = elapsed.as_secs();
    let remaining_ms = elapsed.subsec_millis();
    format!("{seconds}s {remaining_ms}ms")
}

/// Run `f` behind a spinner and report how long it took once it succeeds.
pub async fn run_with_spinner_async<T, F, Fut>(
    status: Status,
    description: &str,
    success_message: &str,
    f: F,
) -> Result<T, String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    let spinner = spinner(description);
    let start = Instant::now();
    let result = f().await;
    spinner.finish_and_clear();
    if result.is_ok() {
        status.line(format!("{} ({})", success_message, format_elapsed_ms(start)));
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_cli_async_exit_codes() {
        assert_eq!(run_cli_async(|| async { Ok(()) }).await, 0);
        assert_eq!(
            run_cli_async(|| async { Err("boom".to_string()) }).await,
            1
        );
    }

    #[tokio::test]
    async fn test_run_with_spinner_passes_value_through() {
        let status = Status::new(true);
        let value = run_with_spinner_async(status, "Working...", "Done", || async {
            Ok::<_, String>(42)
        })
        .await
        .unwrap();
        assert_eq!(value, 42);

        let err = run_with_spinner_async(status, "Working...", "Done", || async {
            Err::<(), _>("failed".to_string())
        })
        .await
        .unwrap_err();
        assert_eq!(err, "failed");
    }

    #[test]
    fn test_format_elapsed_ms_is_short_for_fast_work() {
        let out = format_elapsed_ms(Instant::now());
        assert!(out.ends_with("ms"));
    }
}
