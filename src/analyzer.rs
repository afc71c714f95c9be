//! Aggregation of holidays by the weekday they fall on.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;
use tracing::{debug, error, info};

use crate::calendar::HolidayCalendar;
use crate::error::{AnalyzerError, Result};

/// Weekdays in calendar order, Monday first
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Raw calendar names that are shown under a different name
pub const HOLIDAY_NAME_MAPPING: &[(&str, &str)] = &[
    ("Erster Mai", "Tag der Arbeit"),
    ("Erster Weihnachtstag", "1. Weihnachtstag"),
    ("Zweiter Weihnachtstag", "2. Weihnachtstag"),
    ("Tag der Deutschen Einheit", "Tag der Deutschen Einheit"),
    ("Christi Himmelfahrt", "Christi Himmelfahrt"),
    ("Ostermontag", "Ostermontag"),
    ("Karfreitag", "Karfreitag"),
    ("Pfingstmontag", "Pfingstmontag"),
    ("Neujahr", "Neujahr"),
];

/// Display name of a raw calendar name; names without a mapping pass through.
pub fn display_name(raw: &str) -> &str {
    HOLIDAY_NAME_MAPPING
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
        .unwrap_or(raw)
}

/// Occurrences of one holiday per weekday
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayCounts([u32; 7]);

impl WeekdayCounts {
    pub fn get(&self, weekday: Weekday) -> u32 {
        self.0[weekday.num_days_from_monday() as usize]
    }

    pub fn set(&mut self, weekday: Weekday, count: u32) {
        self.0[weekday.num_days_from_monday() as usize] = count;
    }

    pub fn increment(&mut self, weekday: Weekday) {
        self.0[weekday.num_days_from_monday() as usize] += 1;
    }

    /// Sum over all weekdays
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// (weekday, count) pairs, Monday first
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, u32)> + '_ {
        WEEKDAYS.iter().map(move |weekday| (*weekday, self.get(*weekday)))
    }
}

impl FromIterator<(Weekday, u32)> for WeekdayCounts {
    fn from_iter<I: IntoIterator<Item = (Weekday, u32)>>(iter: I) -> Self {
        let mut counts = WeekdayCounts::default();
        for (weekday, count) in iter {
            counts.set(weekday, count);
        }
        counts
    }
}

/// Holiday name -> occurrences per weekday, accumulated over all analyzed years
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayWeekdayCounts {
    holidays: BTreeMap<String, WeekdayCounts>,
}

impl HolidayWeekdayCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Number of distinct holiday names
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn get(&self, holiday: &str) -> Option<&WeekdayCounts> {
        self.holidays.get(holiday)
    }

    /// Occurrences of `holiday` on `weekday`, 0 for unknown holidays
    pub fn count(&self, holiday: &str, weekday: Weekday) -> u32 {
        self.get(holiday).map_or(0, |counts| counts.get(weekday))
    }

    /// Count one more occurrence of `holiday` on `weekday`
    pub fn record(&mut self, holiday: &str, weekday: Weekday) {
        match self.holidays.get_mut(holiday) {
            Some(counts) => counts.increment(weekday),
            None => {
                let mut counts = WeekdayCounts::default();
                counts.increment(weekday);
                self.holidays.insert(holiday.to_string(), counts);
            }
        }
    }

    pub fn insert(&mut self, holiday: impl Into<String>, counts: WeekdayCounts) {
        self.holidays.insert(holiday.into(), counts);
    }

    /// Holidays in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WeekdayCounts)> {
        self.holidays
            .iter()
            .map(|(name, counts)| (name.as_str(), counts))
    }

    /// Occurrences of all holidays together, per weekday
    pub fn weekday_totals(&self) -> WeekdayCounts {
        WEEKDAYS
            .iter()
            .map(|weekday| {
                let total = self.holidays.values().map(|c| c.get(*weekday)).sum::<u32>();
                (*weekday, total)
            })
            .collect()
    }

    /// Sorted names of the holidays that fell on `weekday` at least once
    pub fn holidays_on(&self, weekday: Weekday) -> Vec<&str> {
        self.iter()
            .filter(|(_, counts)| counts.get(weekday) > 0)
            .map(|(name, _)| name)
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, WeekdayCounts)> for HolidayWeekdayCounts {
    fn from_iter<I: IntoIterator<Item = (S, WeekdayCounts)>>(iter: I) -> Self {
        let mut counts = HolidayWeekdayCounts::new();
        for (holiday, weekday_counts) in iter {
            counts.insert(holiday, weekday_counts);
        }
        counts
    }
}

/// Count for every holiday of `years` on which weekday it fell.
///
/// Each year is looked up in `calendar` from January 1st to December 31st;
/// a year listed twice is counted twice. Raw names are translated with
/// [`display_name`].
pub fn analyze_holidays<C>(calendar: &C, years: &[i32]) -> Result<HolidayWeekdayCounts>
where
    C: HolidayCalendar + ?Sized,
{
    info!(?years, "starting holiday analysis");

    if years.is_empty() {
        error!("empty years list provided");
        return Err(AnalyzerError::EmptyYears);
    }

    let mut counts = HolidayWeekdayCounts::new();
    for &year in years {
        debug!(year, "processing holidays");
        let (start, end) = year_bounds(year)?;
        for (date, raw_name) in calendar.holidays_between(start, end) {
            let name = display_name(&raw_name);
            if name != raw_name {
                debug!(from = %raw_name, to = name, "mapped holiday name");
            }
            let weekday = date.weekday();
            counts.record(name, weekday);
            debug!(holiday = name, %weekday, "found holiday");
        }
    }

    info!(holidays = counts.len(), "completed holiday analysis");
    Ok(counts)
}

fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    match (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => {
            error!(year, "year not representable");
            Err(AnalyzerError::UnsupportedYear { year })
        }
    }
}
