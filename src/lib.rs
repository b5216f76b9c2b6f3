//! Stoker - scheduled wake-up and job-trigger dispatcher
//!
//! Fires authenticated HTTP requests at a fixed set of external services on
//! cron schedules: jittered GET pings to keep idle services warm, and
//! immediate POST triggers that start asynchronous data-collection jobs.
//! Exposes a single health-check route for its own liveness.

#![allow(missing_docs)]

pub mod api;
pub mod app;
pub mod app_info;
pub mod boot;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod environment;
pub mod router;
pub mod schedule;
pub mod setup_tracing;
