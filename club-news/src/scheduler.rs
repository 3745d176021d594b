use crate::bot::{NewsBot, TIME_ZONE};
use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{error, info};

/// How often the heartbeat line is logged
pub const HEARTBEAT_INTERVAL: std::time::Duration = std::time::Duration::from_secs(300);

/// A fixed local wall-clock time, once per day
#[derive(Debug, Clone, Copy)]
pub struct DailySchedule {
    pub hour: u32,
    pub minute: u32,
    pub time_zone: Tz,
}

impl Default for DailySchedule {
    fn default() -> Self {
        Self {
            hour: 9,
            minute: 0,
            time_zone: TIME_ZONE,
        }
    }
}

impl DailySchedule {
    /// Next occurrence strictly after `now`.
    ///
    /// When the wall-clock time is ambiguous (DST fall-back) the earlier
    /// instant is used; when it does not exist (spring-forward) that day is
    /// skipped. Returns `None` for an invalid hour/minute.
    pub fn next_run_after(&self, now: DateTime<Utc>) -> Option<DateTime<Tz>> {
        let local_now = now.with_timezone(&self.time_zone);
        let mut date = local_now.date_naive();

        for _ in 0..3 {
            let naive = date.and_hms_opt(self.hour, self.minute, 0)?;
            if let Some(candidate) = self.time_zone.from_local_datetime(&naive).earliest() {
                if candidate > local_now {
                    return Some(candidate);
                }
            }
            date = date.succ_opt()?;
        }
        None
    }

    /// Next occurrence after a run that fired at `fired`.
    ///
    /// Counts from whichever is later of `fired` and `now`, so a wall clock
    /// stepped back behind `fired` cannot repeat the same occurrence.
    pub fn next_run_following(
        &self,
        fired: DateTime<Tz>,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Tz>> {
        self.next_run_after(now.max(fired.with_timezone(&Utc)))
    }
}

/// Runs the daily cycle at every occurrence of `schedule`, forever
pub async fn run_daily(bot: Arc<NewsBot>, schedule: DailySchedule) {
    info!(
        "Daily news scheduled at {:02}:{:02} ({})",
        schedule.hour, schedule.minute, schedule.time_zone
    );

    let mut next = schedule.next_run_after(Utc::now());

    loop {
        let Some(run_at) = next else {
            error!("Invalid schedule {:?}, daily news disabled", schedule);
            return;
        };

        let wait = (run_at.with_timezone(&Utc) - Utc::now())
            .max(Duration::zero())
            .to_std()
            .unwrap_or_default();
        info!("Next scheduled news at {}", run_at);
        tokio::time::sleep(wait).await;

        info!("Sending scheduled news");
        let report = bot.run_daily_cycle().await;
        info!("Scheduled cycle finished: {:?}", report);

        next = schedule.next_run_following(run_at, Utc::now());
    }
}

/// Logs a liveness line every [`HEARTBEAT_INTERVAL`]
pub async fn heartbeat() {
    let mut timer = tokio::time::interval(HEARTBEAT_INTERVAL);
    timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        timer.tick().await;
        info!(
            "Bot alive: {}",
            crate::digest::timestamp(&Utc::now().with_timezone(&TIME_ZONE))
        );
    }
}
