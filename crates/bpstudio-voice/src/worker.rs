//! Worker lifecycle.
//!
//! The worker announces itself, then either returns immediately (one-shot)
//! or idles until the shutdown future resolves or the idle period elapses.

use std::future::{Future, poll_fn};
use std::pin::pin;
use std::task::Poll;
use std::time::Duration;

use crate::config::WorkerConfig;

/// How long the worker idles before exiting on its own.
pub const IDLE_DURATION: Duration = Duration::from_secs(3600 * 24 * 365);

/// Why the worker stopped. Every variant is a clean exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    OneShot,
    Interrupted,
    IdleElapsed,
}

/// The line printed once the worker is up.
pub fn status_line(config: &WorkerConfig) -> String {
    format!("agent online | room-prefix={}", config.room_prefix)
}

/// Run the worker with the default idle period.
pub async fn run<F>(config: &WorkerConfig, shutdown: F) -> WorkerExit
where
    F: Future<Output = ()>,
{
    run_for(config, IDLE_DURATION, shutdown).await
}

/// Run the worker, idling for at most `idle`.
pub async fn run_for<F>(config: &WorkerConfig, idle: Duration, shutdown: F) -> WorkerExit
where
    F: Future<Output = ()>,
{
    let mut shutdown = pin!(shutdown);
    // Polled once up front so a signal listener behind `shutdown` is
    // registered before the worker reports itself online.
    let already_shut_down =
        poll_fn(|cx| Poll::Ready(shutdown.as_mut().poll(cx).is_ready())).await;

    println!("{}", status_line(config));
    tracing::info!(
        target: "bpstudio.voice",
        room_prefix = %config.room_prefix,
        one_shot = config.one_shot,
        "Voice worker started"
    );

    if config.one_shot {
        return WorkerExit::OneShot;
    }

    let exit = if already_shut_down {
        WorkerExit::Interrupted
    } else {
        tokio::select! {
            () = shutdown.as_mut() => WorkerExit::Interrupted,
            () = tokio::time::sleep(idle) => WorkerExit::IdleElapsed,
        }
    };

    tracing::info!(target: "bpstudio.voice", reason = ?exit, "Voice worker stopped");
    exit
}
