//! Wall-clock scheduling primitives

mod clock;
mod daily;

pub use clock::{Clock, SystemClock};
pub use daily::DailySchedule;
