//! Per-guild janitor task.
//!
//! Each guild's janitor repeatedly flushes the update queue and evicts idle cache
//! entries. Cancelling it drains the queue one last time before the task exits, so
//! every mutation accepted before shutdown reaches Discord.

use std::{
    sync::{
        atomic::{AtomicU8, Ordering},
        Arc, Weak,
    },
    time::Duration,
};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::server::{
    config::StarboardTuning,
    error::{internal::InternalError, AppError},
    service::starboard::GuildStarboard,
};

const PHASE_RUNNING: u8 = 0;
const PHASE_DRAINING: u8 = 1;
const PHASE_STOPPED: u8 = 2;
const PHASE_CRASHED: u8 = 3;

/// Observable lifecycle of a janitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JanitorStatus {
    /// No janitor, or it exited cleanly.
    Stopped,
    Running,
    /// Cancelled and flushing the remaining queue.
    Draining,
    /// Ended with an error or panicked.
    Crashed,
}

/// Handle to a running janitor task.
pub struct Janitor {
    cancel: CancellationToken,
    handle: JoinHandle<Result<(), AppError>>,
    phase: Arc<AtomicU8>,
}

impl Janitor {
    /// Spawns the janitor loop for a guild.
    ///
    /// The task only holds a weak reference so dropping the coordinator stops it.
    ///
    /// # Arguments
    /// - `guild` - Coordinator whose queue and cache are maintained
    /// - `tuning` - Loop interval and cache TTL
    ///
    /// # Returns
    /// - `Janitor` - Handle used to observe and stop the task
    pub fn spawn(guild: Weak<GuildStarboard>, tuning: StarboardTuning) -> Self {
        let cancel = CancellationToken::new();
        let phase = Arc::new(AtomicU8::new(PHASE_RUNNING));

        let task_cancel = cancel.clone();
        let task_phase = phase.clone();
        let handle = tokio::spawn(async move {
            let result = run(guild, tuning, task_cancel, task_phase.clone()).await;
            let end = if result.is_ok() {
                PHASE_STOPPED
            } else {
                PHASE_CRASHED
            };
            task_phase.store(end, Ordering::SeqCst);
            result
        });

        Self {
            cancel,
            handle,
            phase,
        }
    }

    /// Current lifecycle state.
    ///
    /// A task that finished without reaching a final phase panicked and is reported
    /// as crashed.
    pub fn status(&self) -> JanitorStatus {
        match self.phase.load(Ordering::SeqCst) {
            PHASE_STOPPED => JanitorStatus::Stopped,
            PHASE_CRASHED => JanitorStatus::Crashed,
            _ if self.handle.is_finished() => JanitorStatus::Crashed,
            PHASE_DRAINING => JanitorStatus::Draining,
            _ => JanitorStatus::Running,
        }
    }

    /// Cancels the janitor and waits for it to drain the queue.
    ///
    /// # Returns
    /// - `Ok(())` - Queue drained and task exited
    /// - `Err(AppError)` - The task failed while running or draining, or panicked
    pub async fn shutdown(self) -> Result<(), AppError> {
        self.cancel.cancel();
        self.join().await
    }

    /// Waits for the task to end and returns its result.
    pub async fn join(self) -> Result<(), AppError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(InternalError::TaskFailed(e.to_string()).into()),
        }
    }
}

async fn run(
    guild: Weak<GuildStarboard>,
    tuning: StarboardTuning,
    cancel: CancellationToken,
    phase: Arc<AtomicU8>,
) -> Result<(), AppError> {
    let guild_id = match guild.upgrade() {
        Some(starboard) => starboard.guild_id(),
        None => return Ok(()),
    };
    info!("Starboard janitor started for guild {}", guild_id);

    loop {
        let Some(starboard) = guild.upgrade() else {
            return Ok(());
        };
        starboard.flush_queue().await?;
        let evicted = starboard.purge_cache(tuning.cache_ttl).await?;
        if evicted > 0 {
            debug!("Evicted {} idle messages for guild {}", evicted, guild_id);
        }
        drop(starboard);

        if cancelled_during(&cancel, tuning.janitor_interval).await {
            break;
        }
    }

    phase.store(PHASE_DRAINING, Ordering::SeqCst);
    if let Some(starboard) = guild.upgrade() {
        let drained = starboard.flush_queue().await?;
        info!(
            "Starboard janitor for guild {} drained {} queued messages",
            guild_id, drained
        );
    }

    Ok(())
}

/// Sleeps for `interval`, returning early with `true` if cancelled.
async fn cancelled_during(cancel: &CancellationToken, interval: Duration) -> bool {
    tokio::select! {
        _ = cancel.cancelled() => true,
        _ = tokio::time::sleep(interval) => false,
    }
}
