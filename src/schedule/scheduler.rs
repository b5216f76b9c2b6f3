use std::{str::FromStr, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{sleep, sleep_until, Duration as TokioDuration, Instant},
};
use tracing::{debug, error, info};

use crate::{
    app::App,
    dispatch::{run_task::run_task, wake_up::wake_up},
    schedule::trigger::{ScheduledTrigger, TriggerAction},
};

/// Scheduler that spawns an individual task for each scheduled trigger
pub struct Scheduler {
    app: App,
    schedule: Vec<ScheduledTrigger>,
    task_handles: Vec<JoinHandle<()>>,
}

impl Scheduler {
    #[allow(clippy::missing_const_for_fn)]
    #[must_use]
    pub fn new(app: App, schedule: Vec<ScheduledTrigger>) -> Self {
        Self {
            app,
            schedule,
            task_handles: Vec::new(),
        }
    }

    pub async fn run(&mut self) {
        info!(
            "📅 Scheduler started with {} scheduled triggers",
            self.schedule.len()
        );

        // If there are no scheduled triggers, just wait indefinitely
        if self.schedule.is_empty() {
            debug!("📅 No scheduled triggers configured, scheduler will idle");
            std::future::pending::<()>().await;
            return;
        }

        // Spawn a task for each scheduled trigger
        for trigger in &self.schedule {
            let app = self.app.clone();
            let trigger = trigger.clone();

            let handle = tokio::spawn(async move {
                run_trigger(trigger, app).await;
            });

            self.task_handles.push(handle);
        }

        // Wait for all tasks to complete (they run indefinitely)
        for (index, handle) in self.task_handles.iter_mut().enumerate() {
            if let Err(e) = handle.await {
                error!("📅 Scheduler task {} failed: {}", index, e);
            }
        }
    }
}

/// Run a single trigger in its own loop
async fn run_trigger(trigger: ScheduledTrigger, app: App) {
    debug!("📅 Starting scheduler task for '{}'", trigger.name);

    // Parse the cron expression once; a bad expression disables only this
    // trigger, the rest of the table keeps running.
    let Ok(schedule) = parse_cron_schedule(&trigger) else {
        return;
    };

    loop {
        // A pass without a tick (exhausted schedule) must not dispatch.
        if !wait_for_next_fire(&trigger, &schedule).await {
            continue;
        }

        // Fire in its own task: a jittered wake-up sleeping for minutes must
        // not delay the computation of this trigger's next tick.
        let app = app.clone();
        let trigger = trigger.clone();
        tokio::spawn(async move {
            fire(&trigger, &app).await;
        });
    }
}

/// Parse cron schedule for a trigger
fn parse_cron_schedule(trigger: &ScheduledTrigger) -> Result<cron::Schedule, ()> {
    match cron::Schedule::from_str(trigger.cron_expression) {
        Ok(schedule) => Ok(schedule),
        Err(e) => {
            error!(
                "❌ Invalid cron expression for trigger '{}': {}",
                trigger.name, e
            );
            Err(())
        }
    }
}

/// Sleep until the trigger's next fire time. Returns whether a tick
/// actually arrived: an exhausted schedule backs off for a minute and
/// reports `false` so the caller does not dispatch.
async fn wait_for_next_fire(trigger: &ScheduledTrigger, schedule: &cron::Schedule) -> bool {
    let now = chrono::Utc::now();

    let Some(next_fire) = schedule.upcoming(chrono::Utc).take(1).next() else {
        error!(
            "❌ Could not determine next fire time for trigger '{}'",
            trigger.name
        );
        // Sleep for a minute and try again
        sleep(TokioDuration::from_secs(60)).await;
        return false;
    };

    debug!(
        "🔄 Trigger '{}' next fire at: {}",
        trigger.name,
        next_fire.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let sleep_duration = (next_fire - now).to_std().unwrap_or_default();
    if sleep_duration > Duration::ZERO {
        sleep_until(Instant::now() + sleep_duration).await;
    }
    true
}

/// Execute one fire of a trigger: resolve its target URL and hand off to
/// the matching dispatcher. A missing URL skips only this invocation.
pub async fn fire(trigger: &ScheduledTrigger, app: &App) {
    match &trigger.action {
        TriggerAction::WakeUp {
            target,
            path,
            auth_mode,
            max_jitter_seconds,
        } => {
            let Some(base_url) = target.base_url(&app.config.targets) else {
                error!(
                    "❌ [{}] {} is not set, skipping wake-up",
                    trigger.name,
                    target.config_key()
                );
                return;
            };
            let url = format!("{base_url}{path}");
            wake_up(
                &app.http,
                &target.to_string(),
                &url,
                *auth_mode,
                &app.config.secret_token,
                *max_jitter_seconds,
            )
            .await;
        }
        TriggerAction::RunTask {
            target,
            endpoint_path,
            timeframe,
        } => {
            let Some(base_url) = target.base_url(&app.config.targets) else {
                error!(
                    "❌ [{}] {} is not set, skipping job trigger",
                    trigger.name,
                    target.config_key()
                );
                return;
            };
            run_task(
                &app.http,
                &target.to_string(),
                base_url,
                endpoint_path,
                timeframe,
                &app.config.secret_token,
            )
            .await;
        }
    }
}
