//! Once-a-day schedule at a fixed local time

use chrono::{DateTime, Days, Local, NaiveTime, TimeZone};

use crate::domain::DomainError;

/// Fires once per day at a fixed local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    at: NaiveTime,
}

impl DailySchedule {
    pub fn new(at: NaiveTime) -> Self {
        Self { at }
    }

    /// Parse an `HH:MM` (or `HH:MM:SS`) time of day
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let value = value.trim();

        NaiveTime::parse_from_str(value, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
            .map(Self::new)
            .map_err(|e| {
                DomainError::configuration(format!("Invalid schedule time '{}': {}", value, e))
            })
    }

    pub fn time_of_day(&self) -> NaiveTime {
        self.at
    }

    /// First fire time strictly after `after`.
    ///
    /// Days on which the local time does not exist (DST gap) are skipped;
    /// ambiguous local times resolve to their earliest instant.
    pub fn next_after(&self, after: &DateTime<Local>) -> DateTime<Local> {
        let mut day = after.date_naive();

        loop {
            let candidate = Local
                .from_local_datetime(&day.and_time(self.at))
                .earliest();

            if let Some(candidate) = candidate {
                if candidate > *after {
                    return candidate;
                }
            }

            day = match day.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => return *after,
            };
        }
    }
}

impl Default for DailySchedule {
    fn default() -> Self {
        Self::new(NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(y, m, d, h, min, s)
            .earliest()
            .unwrap()
    }

    #[test]
    fn test_parse_valid_times() {
        assert_eq!(
            DailySchedule::parse("09:00").unwrap().time_of_day(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            DailySchedule::parse(" 18:30:15 ").unwrap().time_of_day(),
            NaiveTime::from_hms_opt(18, 30, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_invalid_time() {
        let err = DailySchedule::parse("25:00").unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
        assert!(DailySchedule::parse("nine").is_err());
    }

    #[test]
    fn test_default_is_nine_am() {
        assert_eq!(
            DailySchedule::default().time_of_day(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_next_after_before_fire_time_is_same_day() {
        let schedule = DailySchedule::default();
        let now = local(2024, 3, 12, 8, 59, 0);

        assert_eq!(schedule.next_after(&now), local(2024, 3, 12, 9, 0, 0));
    }

    #[test]
    fn test_next_after_fire_time_is_next_day() {
        let schedule = DailySchedule::default();

        assert_eq!(
            schedule.next_after(&local(2024, 3, 12, 9, 0, 0)),
            local(2024, 3, 13, 9, 0, 0)
        );
        assert_eq!(
            schedule.next_after(&local(2024, 3, 12, 23, 59, 59)),
            local(2024, 3, 13, 9, 0, 0)
        );
    }

    #[test]
    fn test_consecutive_fires_are_one_day_apart() {
        let schedule = DailySchedule::parse("07:15").unwrap();
        let mut fire = schedule.next_after(&local(2024, 1, 1, 0, 0, 0));

        for _ in 0..30 {
            let next = schedule.next_after(&fire);
            assert_eq!(next.date_naive(), fire.date_naive() + Duration::days(1));
            assert_eq!(next.time(), schedule.time_of_day());
            fire = next;
        }
    }
}
