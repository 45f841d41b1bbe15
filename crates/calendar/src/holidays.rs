use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Whether a holiday is a statutory day off or a religious observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayKind {
    Public,
    Religious,
}

/// A named holiday on a specific calendar date.
///
/// Dates carry no time-of-day or timezone; two holidays on the same
/// year/month/day compare equal on their `date` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: &'static str,
    pub kind: HolidayKind,
}

/// UK public holidays and major Christian observances on fixed dates,
/// as (month, day, name, kind).
const FIXED_DATES: [(u32, u32, &str, HolidayKind); 6] = [
    (1, 1, "New Year's Day", HolidayKind::Public),
    (12, 25, "Christmas Day", HolidayKind::Religious),
    (12, 26, "Boxing Day", HolidayKind::Public),
    (11, 1, "All Saints' Day", HolidayKind::Religious),
    (2, 14, "St Valentine's Day", HolidayKind::Religious),
    (3, 17, "St Patrick's Day", HolidayKind::Religious),
];

/// Moveable feasts as (offset in days from Easter Sunday, name, kind).
const EASTER_OFFSETS: [(i64, &str, HolidayKind); 6] = [
    (0, "Easter Sunday", HolidayKind::Religious),
    (-2, "Good Friday", HolidayKind::Public),
    (1, "Easter Monday", HolidayKind::Public),
    (-46, "Ash Wednesday", HolidayKind::Religious),
    (39, "Ascension Day", HolidayKind::Religious),
    (49, "Pentecost", HolidayKind::Religious),
];

/// Computes every holiday observed in `year`, in a stable insertion order:
/// the six fixed dates, then the six Easter-derived feasts, then the three
/// bank-holiday Mondays. The result is never sorted.
///
/// Total over any `i32` year: entries whose date falls outside chrono's
/// representable range are omitted rather than failing the whole call. No
/// caching is performed; callers wanting memoization build a
/// [`HolidayIndex`](crate::HolidayIndex).
pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
    let mut holidays = Vec::with_capacity(15);

    for &(month, day, name, kind) in &FIXED_DATES {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            holidays.push(Holiday { date, name, kind });
        }
    }

    if let Some(easter) = easter_sunday(year) {
        for &(offset, name, kind) in &EASTER_OFFSETS {
            if let Some(date) = offset_days(easter, offset) {
                holidays.push(Holiday { date, name, kind });
            }
        }
    }

    let bank_mondays = [
        (first_weekday_in(year, 5, Weekday::Mon), "Early May Bank Holiday"),
        (last_weekday_in(year, 5, Weekday::Mon), "Spring Bank Holiday"),
        (last_weekday_in(year, 8, Weekday::Mon), "Summer Bank Holiday"),
    ];
    for (date, name) in bank_mondays {
        if let Some(date) = date {
            holidays.push(Holiday { date, name, kind: HolidayKind::Public });
        }
    }

    holidays
}

/// Gregorian Easter Sunday via the Meeus/Jones/Butcher algorithm.
///
/// Uses euclidean division so the intermediate residues stay correct for
/// negative years; returns `None` only when the resulting date cannot be
/// represented.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let y = i64::from(year);
    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114).div_euclid(31);
    let day = (h + l - 7 * m + 114).rem_euclid(31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn offset_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// First occurrence of `weekday` in the given month, scanning forward from
/// day 1.
fn first_weekday_in(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let mut date = NaiveDate::from_ymd_opt(year, month, 1)?;
    while date.weekday() != weekday {
        date = date.checked_add_days(Days::new(1))?;
    }
    Some(date)
}

/// Last occurrence of `weekday` in the given month, scanning backward from
/// the month's final day.
fn last_weekday_in(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let mut date = last_day_of_month(year, month)?;
    while date.weekday() != weekday {
        date = date.checked_sub_days(Days::new(1))?;
    }
    Some(date)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(chrono::Months::new(1))?
        .checked_sub_days(Days::new(1))
}
