//! Weekly market schedule and the next open/close transitions.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Timelike, Weekday,
};
use serde::Serialize;

/// Outcome of a market-hours check.
///
/// Both transition instants carry full date+time+offset, not just a
/// time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatus {
    pub open: bool,
    pub next_opening_time: DateTime<FixedOffset>,
    pub next_closing_time: DateTime<FixedOffset>,
}

/// Fixed weekly trading schedule: open Monday-Friday between the opening
/// and closing hours, closed Saturday/Sunday.
///
/// The opening hour is inclusive and the closing hour exclusive, so exactly
/// 08:00 counts as open and exactly 16:00 counts as closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketHours {
    opening_hour: u32,
    closing_hour: u32,
}

impl Default for MarketHours {
    fn default() -> Self {
        MarketHours {
            opening_hour: 8,
            closing_hour: 16,
        }
    }
}

impl MarketHours {
    pub fn new(opening_hour: u32, closing_hour: u32) -> Self {
        MarketHours {
            opening_hour,
            closing_hour,
        }
    }

    /// Whether the market is open at `now`, and the next transition instants.
    ///
    /// Pure function of `now`; the returned instants keep `now`'s offset.
    pub fn status(&self, now: DateTime<FixedOffset>) -> MarketStatus {
        let weekday = now.weekday();
        let hour = now.hour();
        let weekend = matches!(weekday, Weekday::Sat | Weekday::Sun);

        let open = !weekend && hour >= self.opening_hour && hour < self.closing_hour;

        let today = now.date_naive();
        let next_monday = next_week_monday(today);
        let offset = *now.offset();

        let next_closing_time =
            if weekend || (weekday == Weekday::Fri && hour >= self.closing_hour) {
                at_hour(next_monday, self.closing_hour, offset)
            } else if hour < self.closing_hour {
                at_hour(today, self.closing_hour, offset)
            } else {
                at_hour(today + Duration::days(1), self.closing_hour, offset)
            };

        // The Friday rollover threshold is exclusive here: at exactly the
        // opening hour the next opening is still the following day.
        let next_opening_time = if weekend || (weekday == Weekday::Fri && hour > self.opening_hour)
        {
            at_hour(next_monday, self.opening_hour, offset)
        } else if hour < self.opening_hour {
            at_hour(today, self.opening_hour, offset)
        } else {
            at_hour(today + Duration::days(1), self.opening_hour, offset)
        };

        MarketStatus {
            open,
            next_opening_time,
            next_closing_time,
        }
    }
}

/// Monday of the week after the one containing `date`.
fn next_week_monday(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day() + Duration::weeks(1)
}

fn at_hour(date: NaiveDate, hour: u32, offset: FixedOffset) -> DateTime<FixedOffset> {
    let wall = date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default());
    wall.and_local_timezone(offset)
        .single()
        // A fixed offset maps every wall-clock time to exactly one instant.
        .unwrap_or_else(|| DateTime::from_naive_utc_and_offset(wall, offset))
}
