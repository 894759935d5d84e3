//! Background jobs driven by a daily wall-clock schedule

mod daily_post_job;
mod runner;

pub use daily_post_job::DailyPostJob;
pub use runner::{DailyScheduler, ScheduledJob};
