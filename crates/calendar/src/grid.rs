use crate::holidays::Holiday;
use crate::index::HolidayIndex;
use chrono::{Datelike, Days, NaiveDate};

/// A month grid is always 6 rows of 7 columns.
pub const GRID_CELLS: usize = 42;

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// `false` for the leading/trailing padding days borrowed from the
    /// adjacent months.
    pub in_month: bool,
    /// Holidays observed on exactly this date, computed against the
    /// calendar year the date falls in.
    pub holidays: Vec<Holiday>,
}

/// Builds the Monday-first 42-cell grid for `month_index` (0 = January) of
/// `year`.
///
/// The grid opens with the tail of the previous month so that the first
/// cell is always a Monday, then runs through the target month, then
/// borrows from the next month up to 42 cells. Padding cells that land in
/// the previous or next calendar year are annotated against that year's
/// holiday table, not the requested year's.
///
/// For years beyond chrono's representable range the grid degrades to
/// empty rather than failing; per-cell holiday lookups degrade to an empty
/// list.
///
/// # Panics
///
/// Panics if `month_index > 11`.
pub fn month_grid(year: i32, month_index: u32) -> Vec<DayCell> {
    month_grid_with(&mut HolidayIndex::new(), year, month_index)
}

/// [`month_grid`] reusing a caller-held [`HolidayIndex`], so a run of
/// grids (a whole year of them, say) computes each year's holiday table
/// once instead of once per grid.
pub fn month_grid_with(index: &mut HolidayIndex, year: i32, month_index: u32) -> Vec<DayCell> {
    assert!(month_index < 12, "month index out of range: {month_index}");

    let Some(first) = NaiveDate::from_ymd_opt(year, month_index + 1, 1) else {
        return Vec::new();
    };
    // chrono numbers weekdays Monday-first already, so the day-of-week of
    // the 1st is exactly the number of leading padding cells.
    let lead = u64::from(first.weekday().num_days_from_monday());
    let Some(start) = first.checked_sub_days(Days::new(lead)) else {
        return Vec::new();
    };

    let mut cells = Vec::with_capacity(GRID_CELLS);
    let mut date = start;
    for _ in 0..GRID_CELLS {
        cells.push(DayCell {
            date,
            in_month: date.year() == year && date.month0() == month_index,
            holidays: index.on_date(date).to_vec(),
        });
        match date.checked_add_days(Days::new(1)) {
            Some(next) => date = next,
            None => break,
        }
    }
    cells
}
