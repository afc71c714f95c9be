use chrono::Weekday;
use holiday_analyzer::calendar::GermanCalendar;
use holiday_analyzer::locale::Language;
use holiday_analyzer::{analyze_holidays, format_holiday_table, AnalyzerError, WEEKDAYS};

fn german() -> GermanCalendar {
    GermanCalendar::new(Language::De)
}

#[test]
fn single_year_2024() {
    let results = analyze_holidays(&german(), &[2024]).unwrap();

    for name in [
        "Neujahr",
        "Karfreitag",
        "Ostermontag",
        "Tag der Arbeit",
        "Christi Himmelfahrt",
        "Pfingstmontag",
        "Tag der Deutschen Einheit",
        "1. Weihnachtstag",
        "2. Weihnachtstag",
    ] {
        assert!(results.get(name).is_some(), "missing {name}");
    }
    assert_eq!(results.len(), 9);

    // New Year's Day 2024 is on Monday
    assert_eq!(results.count("Neujahr", Weekday::Mon), 1);
    // Christmas Day 2024 is on Wednesday
    assert_eq!(results.count("1. Weihnachtstag", Weekday::Wed), 1);
}

#[test]
fn raw_names_are_remapped() {
    let results = analyze_holidays(&german(), &[2020, 2021, 2022]).unwrap();
    for raw in ["Erster Mai", "Erster Weihnachtstag", "Zweiter Weihnachtstag"] {
        assert!(results.get(raw).is_none(), "raw name {raw} leaked");
    }
    assert_eq!(results.get("Tag der Arbeit").unwrap().total(), 3);
}

#[test]
fn multiple_years_new_year_total() {
    let results = analyze_holidays(&german(), &[2024, 2025]).unwrap();
    let total_new_years = results.get("Neujahr").unwrap().total();
    assert_eq!(total_new_years, 2);
}

#[test]
fn weekday_sums_match_year_count() {
    let years: Vec<i32> = (1995..=2016).chain(2018..=2040).collect();
    let results = analyze_holidays(&german(), &years).unwrap();
    for (name, counts) in results.iter() {
        assert_eq!(counts.total() as usize, years.len(), "{name}");
    }
}

#[test]
fn occasional_holidays_count_only_their_years() {
    let results = analyze_holidays(&german(), &[2016, 2017, 2018]).unwrap();
    // 2017-10-31 was a Tuesday
    let reformation = results.get("Reformationstag").unwrap();
    assert_eq!(reformation.total(), 1);
    assert_eq!(reformation.get(Weekday::Tue), 1);
}

#[test]
fn every_year_in_window_succeeds() {
    let calendar = german();
    for year in 1950..=2099 {
        let results = analyze_holidays(&calendar, &[year]).unwrap();
        assert!(!results.is_empty(), "{year}");
    }
}

#[test]
fn empty_years() {
    assert_eq!(
        analyze_holidays(&german(), &[]),
        Err(AnalyzerError::EmptyYears)
    );
}

#[test]
fn analyze_and_format_is_repeatable() {
    let years = [2025, 2024];
    let render = || {
        let counts = analyze_holidays(&german(), &years).unwrap();
        format_holiday_table(&counts, &years, Language::De.labels()).unwrap()
    };
    let first = render();
    assert_eq!(first, render());
    assert!(first.starts_with("Analyse für die Jahre: 2024, 2025\n\n"));
}

#[test]
fn table_2024_rows() {
    let counts = analyze_holidays(&german(), &[2024]).unwrap();
    let table = format_holiday_table(&counts, &[2024], Language::De.labels()).unwrap();
    let normalized = table.split_whitespace().collect::<Vec<_>>().join(" ");

    assert!(normalized.contains("Montag | 3 | Neujahr, Ostermontag, Pfingstmontag"));
    assert!(normalized.contains("Dienstag | 0 |"));
    assert!(normalized.contains("Mittwoch | 2 | 1. Weihnachtstag, Tag der Arbeit"));
    assert!(normalized.contains(
        "Donnerstag | 3 | 2. Weihnachtstag, Christi Himmelfahrt, Tag der Deutschen Einheit"
    ));
    assert!(normalized.contains("Freitag | 1 | Karfreitag"));
    assert_eq!(table.lines().count(), 4 + WEEKDAYS.len());
}

#[test]
fn english_table() {
    let calendar = GermanCalendar::new(Language::En);
    let counts = analyze_holidays(&calendar, &[2024]).unwrap();
    assert_eq!(counts.count("New Year's Day", Weekday::Mon), 1);
    assert_eq!(counts.count("Christmas Day", Weekday::Wed), 1);

    let table = format_holiday_table(&counts, &[2024], Language::En.labels()).unwrap();
    let normalized = table.split_whitespace().collect::<Vec<_>>().join(" ");
    assert!(normalized.contains("Weekday | Count | Holidays"));
    assert!(normalized.contains("Friday | 1 | Good Friday"));
}
