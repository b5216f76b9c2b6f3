use strum::Display;

use crate::{config::TargetsConfig, dispatch::AuthMode};

/// One calendar-triggered binding. The table is built once at startup and
/// never modified afterwards.
#[derive(Debug, Clone)]
pub struct ScheduledTrigger {
    pub name: &'static str,
    /// Six-field cron expression (seconds first).
    pub cron_expression: &'static str,
    pub action: TriggerAction,
}

#[derive(Debug, Clone)]
pub enum TriggerAction {
    /// Deferred GET ping, spread by a random delay drawn per fire.
    WakeUp {
        target: Target,
        path: &'static str,
        auth_mode: AuthMode,
        max_jitter_seconds: u64,
    },
    /// Immediate POST asking the target to start a collection job.
    RunTask {
        target: Target,
        endpoint_path: &'static str,
        timeframe: &'static str,
    },
}

/// Which configured external service an action is aimed at. Resolved
/// against [`TargetsConfig`] at fire time so a missing URL only skips the
/// fires that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Target {
    CoinSifter,
    KlineProvider,
    PriceFeed,
}

impl Target {
    #[must_use]
    pub fn base_url<'a>(&self, targets: &'a TargetsConfig) -> Option<&'a str> {
        match self {
            Self::CoinSifter => targets.coin_sifter_url.as_deref(),
            Self::KlineProvider => targets.kline_provider_url.as_deref(),
            Self::PriceFeed => targets.price_feed_url.as_deref(),
        }
    }

    /// Config key to name in the skip log when the URL is absent.
    #[must_use]
    pub const fn config_key(&self) -> &'static str {
        match self {
            Self::CoinSifter => "targets.coin_sifter_url",
            Self::KlineProvider => "targets.kline_provider_url",
            Self::PriceFeed => "targets.price_feed_url",
        }
    }
}

/// The static schedule table. Minute offsets are deliberately distinct so
/// independent triggers do not collide on the same tick; the hourly task
/// skips hour 0, which belongs to the daily one.
#[must_use]
pub fn default_schedule() -> Vec<ScheduledTrigger> {
    vec![
        ScheduledTrigger {
            name: "wake-coin-sifter",
            cron_expression: "0 2/12 * * * *",
            action: TriggerAction::WakeUp {
                target: Target::CoinSifter,
                path: "/blacklist",
                auth_mode: AuthMode::TokenHeader,
                max_jitter_seconds: 200,
            },
        },
        ScheduledTrigger {
            name: "wake-kline-provider",
            cron_expression: "0 5/10 * * * *",
            action: TriggerAction::WakeUp {
                target: Target::KlineProvider,
                path: "/klines",
                auth_mode: AuthMode::Bearer,
                max_jitter_seconds: 200,
            },
        },
        ScheduledTrigger {
            name: "wake-price-feed",
            cron_expression: "0 7/15 * * * *",
            action: TriggerAction::WakeUp {
                target: Target::PriceFeed,
                path: "/price",
                auth_mode: AuthMode::Bearer,
                max_jitter_seconds: 90,
            },
        },
        ScheduledTrigger {
            name: "task-1h",
            cron_expression: "0 0 1-23 * * *",
            action: TriggerAction::RunTask {
                target: Target::KlineProvider,
                endpoint_path: "/api/jobs/run/1h",
                timeframe: "1h",
            },
        },
        ScheduledTrigger {
            name: "task-fr",
            cron_expression: "0 4 */4 * * *",
            action: TriggerAction::RunTask {
                target: Target::KlineProvider,
                endpoint_path: "/api/jobs/run/fr",
                timeframe: "fr",
            },
        },
        ScheduledTrigger {
            name: "task-4h",
            cron_expression: "0 8 */4 * * *",
            action: TriggerAction::RunTask {
                target: Target::KlineProvider,
                endpoint_path: "/api/jobs/run/4h",
                timeframe: "4h",
            },
        },
        ScheduledTrigger {
            name: "task-12h",
            cron_expression: "0 10 12 * * *",
            action: TriggerAction::RunTask {
                target: Target::KlineProvider,
                endpoint_path: "/api/jobs/run/12h",
                timeframe: "12h",
            },
        },
        ScheduledTrigger {
            name: "task-1d",
            cron_expression: "0 0 0 * * *",
            action: TriggerAction::RunTask {
                target: Target::KlineProvider,
                endpoint_path: "/api/jobs/run/1d",
                timeframe: "1d",
            },
        },
    ]
}
