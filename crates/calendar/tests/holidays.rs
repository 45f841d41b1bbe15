use chrono::{Datelike, NaiveDate, Weekday};
use strata_calendar::{Holiday, HolidayKind, holidays_for_year};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn find<'a>(holidays: &'a [Holiday], name: &str) -> &'a Holiday {
    holidays
        .iter()
        .find(|h| h.name == name)
        .unwrap_or_else(|| panic!("{name} missing"))
}

#[test]
fn every_year_yields_fifteen_holidays() {
    for year in [1583, 1900, 1999, 2024, 2100, 2400] {
        let holidays = holidays_for_year(year);
        assert_eq!(holidays.len(), 15, "year {year}");

        let public = holidays
            .iter()
            .filter(|h| h.kind == HolidayKind::Public)
            .count();
        // 2 fixed public + Good Friday + Easter Monday + 3 bank holidays.
        assert_eq!(public, 7, "year {year}");
    }
}

#[test]
fn fixed_dates_are_stable_across_calls() {
    let first = holidays_for_year(2024);
    let second = holidays_for_year(2024);
    assert_eq!(first, second);

    assert_eq!(
        *find(&first, "New Year's Day"),
        Holiday {
            date: ymd(2024, 1, 1),
            name: "New Year's Day",
            kind: HolidayKind::Public,
        }
    );
    assert_eq!(find(&first, "Christmas Day").date, ymd(2024, 12, 25));
    assert_eq!(find(&first, "Christmas Day").kind, HolidayKind::Religious);
    assert_eq!(find(&first, "Boxing Day").date, ymd(2024, 12, 26));
    assert_eq!(find(&first, "All Saints' Day").date, ymd(2024, 11, 1));
    assert_eq!(find(&first, "St Valentine's Day").date, ymd(2024, 2, 14));
    assert_eq!(find(&first, "St Patrick's Day").date, ymd(2024, 3, 17));
}

#[test]
fn moveable_feasts_2024() {
    let holidays = holidays_for_year(2024);
    assert_eq!(find(&holidays, "Easter Sunday").date, ymd(2024, 3, 31));
    assert_eq!(find(&holidays, "Good Friday").date, ymd(2024, 3, 29));
    assert_eq!(find(&holidays, "Good Friday").kind, HolidayKind::Public);
    assert_eq!(find(&holidays, "Easter Monday").date, ymd(2024, 4, 1));
    assert_eq!(find(&holidays, "Ash Wednesday").date, ymd(2024, 2, 14));
    assert_eq!(find(&holidays, "Ascension Day").date, ymd(2024, 5, 9));
    assert_eq!(find(&holidays, "Pentecost").date, ymd(2024, 5, 19));
}

#[test]
fn moveable_feasts_are_strictly_ordered() {
    for year in 1900..=2100 {
        let holidays = holidays_for_year(year);
        let dates: Vec<NaiveDate> = [
            "Ash Wednesday",
            "Good Friday",
            "Easter Sunday",
            "Easter Monday",
            "Ascension Day",
            "Pentecost",
        ]
        .iter()
        .map(|name| find(&holidays, name).date)
        .collect();
        assert!(
            dates.windows(2).all(|pair| pair[0] < pair[1]),
            "feast order violated in {year}: {dates:?}"
        );
    }
}

#[test]
fn bank_holidays_are_mondays_in_the_right_month() {
    for year in 1990..=2040 {
        let holidays = holidays_for_year(year);
        let early_may = find(&holidays, "Early May Bank Holiday");
        let spring = find(&holidays, "Spring Bank Holiday");
        let summer = find(&holidays, "Summer Bank Holiday");

        for h in [early_may, spring, summer] {
            assert_eq!(h.date.weekday(), Weekday::Mon, "{} in {year}", h.name);
            assert_eq!(h.kind, HolidayKind::Public);
        }
        assert_eq!(early_may.date.month(), 5);
        assert!(early_may.date.day() <= 7);
        assert_eq!(spring.date.month(), 5);
        assert!(spring.date.day() > 24);
        assert_eq!(summer.date.month(), 8);
        assert!(summer.date.day() > 24);
    }
}

#[test]
fn insertion_order_is_preserved() {
    let names: Vec<&str> = holidays_for_year(2025).iter().map(|h| h.name).collect();
    assert_eq!(
        names,
        [
            "New Year's Day",
            "Christmas Day",
            "Boxing Day",
            "All Saints' Day",
            "St Valentine's Day",
            "St Patrick's Day",
            "Easter Sunday",
            "Good Friday",
            "Easter Monday",
            "Ash Wednesday",
            "Ascension Day",
            "Pentecost",
            "Early May Bank Holiday",
            "Spring Bank Holiday",
            "Summer Bank Holiday",
        ]
    );
}

#[test]
fn extreme_years_do_not_panic() {
    // Far outside any plausible input, including chrono's range limits.
    for year in [i32::MIN, -1, 0, 1, i32::MAX] {
        let _ = holidays_for_year(year);
    }
}
