//! Rule based public holiday calendar.
//!
//! Holidays are described by [`Holiday`] rules and expanded for a range of
//! years into named dates. [`GermanCalendar`] carries the nationwide German
//! public holidays; additional rules can be appended at runtime.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{trace, warn};

use crate::locale::Language;

/// Source of (date, raw holiday name) pairs.
pub trait HolidayCalendar {
    /// All holidays between `start` and `end` (inclusively), ordered by date.
    /// Names sharing a date keep the order of the rules that produced them.
    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, String)>;
}

/// Types of rules producing public holidays
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum Holiday {
    /// Same month and day every year.
    /// `first` and `last` are the first and last year this day is a holiday (inclusively).
    YearlyDay {
        month: u32,
        day: u32,
        first: Option<i32>,
        last: Option<i32>,
    },
    /// A single holiday which is valid only once in time.
    SingularDay(NaiveDate),
    /// A holiday that is defined in relative days (e.g. -2 for Good Friday) to Easter (Sunday).
    EasterOffset {
        offset: i32,
        first: Option<i32>,
        last: Option<i32>,
    },
    /// The last `weekday` strictly before `month`/`day`, e.g. the Wednesday before November 23rd.
    WeekdayBefore {
        month: u32,
        day: u32,
        weekday: Weekday,
        first: Option<i32>,
        last: Option<i32>,
    },
}

/// A holiday rule together with the name the calendar reports for it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NamedHoliday {
    pub name: String,
    pub rule: Holiday,
}

impl NamedHoliday {
    pub fn new(name: impl Into<String>, rule: Holiday) -> NamedHoliday {
        NamedHoliday {
            name: name.into(),
            rule,
        }
    }
}

/// Named holidays for a fixed range of years
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    holidays: BTreeMap<NaiveDate, Vec<String>>,
}

impl Calendar {
    /// Calculate all holidays for a given range of years from `start` to `end`
    /// (inclusively). Rules that do not yield a valid date for a year are skipped.
    pub fn calc_calendar(holiday_rules: &[NamedHoliday], start: i32, end: i32) -> Calendar {
        let mut holidays: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();

        for NamedHoliday { name, rule } in holiday_rules {
            for date in Self::rule_dates(name, rule, start, end) {
                let names = holidays.entry(date).or_default();
                if !names.contains(name) {
                    trace!(%date, holiday = %name, "holiday added");
                    names.push(name.clone());
                }
            }
        }
        Calendar { holidays }
    }

    fn rule_dates(name: &str, rule: &Holiday, start: i32, end: i32) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        match rule {
            Holiday::SingularDay(date) => {
                let year = date.year();
                if year >= start && year <= end {
                    dates.push(*date);
                }
            }
            Holiday::YearlyDay {
                month,
                day,
                first,
                last,
            } => {
                let (first, last) = Self::calc_first_and_last(start, end, first, last);
                for year in first..=last {
                    match NaiveDate::from_ymd_opt(year, *month, *day) {
                        Some(date) => dates.push(date),
                        None => warn!(holiday = name, year, month, day, "no such date, skipped"),
                    }
                }
            }
            Holiday::EasterOffset {
                offset,
                first,
                last,
            } => {
                let (first, last) = Self::calc_first_and_last(start, end, first, last);
                for year in first..=last {
                    match easter_sunday(year)
                        .and_then(|easter| easter.checked_add_signed(Duration::days(*offset as i64)))
                    {
                        Some(date) => dates.push(date),
                        None => warn!(holiday = name, year, "easter date unavailable, skipped"),
                    }
                }
            }
            Holiday::WeekdayBefore {
                month,
                day,
                weekday,
                first,
                last,
            } => {
                let (first, last) = Self::calc_first_and_last(start, end, first, last);
                for year in first..=last {
                    match NaiveDate::from_ymd_opt(year, *month, *day)
                        .and_then(|anchor| weekday_before(anchor, *weekday))
                    {
                        Some(date) => dates.push(date),
                        None => warn!(holiday = name, year, month, day, "no such date, skipped"),
                    }
                }
            }
        }
        dates
    }

    fn calc_first_and_last(
        start: i32,
        end: i32,
        first: &Option<i32>,
        last: &Option<i32>,
    ) -> (i32, i32) {
        let first = match first {
            Some(year) => std::cmp::max(start, *year),
            _ => start,
        };
        let last = match last {
            Some(year) => std::cmp::min(end, *year),
            _ => end,
        };
        (first, last)
    }

    /// Returns true if the specified day is a holiday
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Names of the holidays on `date`, empty if there are none
    pub fn holiday_names(&self, date: NaiveDate) -> &[String] {
        self.holidays.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct holiday dates
    pub fn len(&self) -> usize {
        self.holidays.len()
    }
}

impl HolidayCalendar for Calendar {
    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, String)> {
        if start > end {
            return Vec::new();
        }
        self.holidays
            .range(start..=end)
            .flat_map(|(date, names)| names.iter().map(move |name| (*date, name.clone())))
            .collect()
    }
}

/// Easter Sunday of the gregorian calendar
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let easter = computus::gregorian(year).ok()?;
    NaiveDate::from_ymd_opt(easter.year, easter.month, easter.day)
}

/// The last `weekday` strictly before `anchor`
pub fn weekday_before(anchor: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let mut date = anchor.pred_opt()?;
    while date.weekday() != weekday {
        date = date.pred_opt()?;
    }
    Some(date)
}

/// Calendar of the nationwide German public holidays
#[derive(Debug, Clone)]
pub struct GermanCalendar {
    language: Language,
    holiday_rules: Vec<NamedHoliday>,
}

impl GermanCalendar {
    /// Create a calendar reporting holiday names in `language`
    pub fn new(language: Language) -> GermanCalendar {
        let name = |de: &str, en: &str| match language {
            Language::De => de.to_string(),
            Language::En => en.to_string(),
        };
        let yearly = |month, day, first, last| Holiday::YearlyDay {
            month,
            day,
            first,
            last,
        };
        let easter = |offset| Holiday::EasterOffset {
            offset,
            first: None,
            last: None,
        };
        let holiday_rules = vec![
            NamedHoliday::new(name("Neujahr", "New Year's Day"), yearly(1, 1, None, None)),
            NamedHoliday::new(name("Karfreitag", "Good Friday"), easter(-2)),
            NamedHoliday::new(name("Ostermontag", "Easter Monday"), easter(1)),
            NamedHoliday::new(name("Erster Mai", "Labor Day"), yearly(5, 1, None, None)),
            NamedHoliday::new(name("Christi Himmelfahrt", "Ascension Day"), easter(39)),
            NamedHoliday::new(name("Pfingstmontag", "Whit Monday"), easter(50)),
            // June 17th until reunification, October 3rd afterwards
            NamedHoliday::new(
                name("Tag der Deutschen Einheit", "German Unity Day"),
                yearly(6, 17, Some(1954), Some(1989)),
            ),
            NamedHoliday::new(
                name("Tag der Deutschen Einheit", "German Unity Day"),
                yearly(10, 3, Some(1990), None),
            ),
            // nationwide only for the 500th anniversary
            NamedHoliday::new(
                name("Reformationstag", "Reformation Day"),
                yearly(10, 31, Some(2017), Some(2017)),
            ),
            NamedHoliday::new(
                name("Buß- und Bettag", "Repentance and Prayer Day"),
                Holiday::WeekdayBefore {
                    month: 11,
                    day: 23,
                    weekday: Weekday::Wed,
                    first: None,
                    last: Some(1994),
                },
            ),
            NamedHoliday::new(
                name("Erster Weihnachtstag", "Christmas Day"),
                yearly(12, 25, None, None),
            ),
            NamedHoliday::new(
                name("Zweiter Weihnachtstag", "Second Day of Christmas"),
                yearly(12, 26, None, None),
            ),
        ];
        GermanCalendar {
            language,
            holiday_rules,
        }
    }

    /// add an ad-hoc holiday rule to the rule list
    pub fn add_holiday_rule(&mut self, holiday: NamedHoliday) -> &mut Self {
        self.holiday_rules.push(holiday);
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn rules(&self) -> &[NamedHoliday] {
        &self.holiday_rules
    }

    /// Expand the rules for the years `start` to `end` (inclusively)
    pub fn populate_cal(&self, start: i32, end: i32) -> Calendar {
        Calendar::calc_calendar(&self.holiday_rules, start, end)
    }
}

impl HolidayCalendar for GermanCalendar {
    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, String)> {
        if start > end {
            return Vec::new();
        }
        self.populate_cal(start.year(), end.year())
            .holidays_between(start, end)
    }
}
