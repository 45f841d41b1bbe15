use crate::holidays::{Holiday, holidays_for_year};
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

/// Holidays grouped by calendar date for constant-time per-cell lookup.
///
/// The flat per-year list from [`holidays_for_year`] would otherwise be
/// re-scanned for every one of the 42 cells of every month grid; the index
/// builds the grouping once per year and extends itself lazily when a
/// lookup touches a year it has not seen (grids spill into adjacent years
/// at the January/December boundaries).
#[derive(Debug, Default)]
pub struct HolidayIndex {
    by_date: BTreeMap<NaiveDate, Vec<Holiday>>,
    loaded_years: BTreeSet<i32>,
}

impl HolidayIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// An index pre-populated for one year.
    pub fn for_year(year: i32) -> Self {
        let mut index = Self::new();
        index.ensure_year(year);
        index
    }

    /// Loads the holiday table for `year` if it is not already present.
    pub fn ensure_year(&mut self, year: i32) {
        if !self.loaded_years.insert(year) {
            return;
        }
        for holiday in holidays_for_year(year) {
            self.by_date.entry(holiday.date).or_default().push(holiday);
        }
    }

    /// The holidays observed on `date`, computed against the calendar year
    /// the date itself falls in.
    pub fn on_date(&mut self, date: NaiveDate) -> &[Holiday] {
        self.ensure_year(date.year());
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }
}
