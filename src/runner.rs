//! Periodic loop for the terminal monitors

use log::warn;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

/// Why a periodic loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    DurationReached,
    Interrupted,
}

/// Call `tick` every `period` until `limit` has elapsed or Ctrl-C arrives
///
/// The first tick fires immediately. The limit is checked before each tick,
/// so a run never starts a tick after its deadline.
pub async fn run_periodic<F>(period: Duration, limit: Option<Duration>, mut tick: F) -> StopReason
where
    F: FnMut(),
{
    let start = Instant::now();
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut ctrl_c = Box::pin(tokio::signal::ctrl_c());
    let mut ctrl_c_armed = true;

    loop {
        tokio::select! {
            result = &mut ctrl_c, if ctrl_c_armed => match result {
                Ok(()) => return StopReason::Interrupted,
                Err(e) => {
                    warn!("Unable to listen for Ctrl-C: {}", e);
                    ctrl_c_armed = false;
                }
            },
            _ = interval.tick() => {
                if limit.is_some_and(|limit| start.elapsed() > limit) {
                    return StopReason::DurationReached;
                }
                tick();
            }
        }
    }
}
