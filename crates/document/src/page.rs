use crate::content::MonthContent;
use strata_calendar::{DayCell, HolidayIndex, month_grid_with};
use strata_types::Color;

/// One physical output page, described before rasterization.
#[derive(Debug, Clone, PartialEq)]
pub enum PageModel {
    /// Full-bleed photo page with the month title overlaid.
    Cover { content: MonthContent },
    /// The day grid for one month with holiday annotations.
    Grid {
        month_index: u32,
        year: i32,
        cells: Vec<DayCell>,
        accent: Color,
    },
}

impl PageModel {
    pub fn month_index(&self) -> u32 {
        match self {
            PageModel::Cover { content } => content.month_index,
            PageModel::Grid { month_index, .. } => *month_index,
        }
    }
}

/// An ordered, fully materialized calendar ready for export: two pages per
/// month, cover before grid, January through December.
///
/// Documents are assembled fresh for each export request and never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDocument {
    pub year: i32,
    pub pages: Vec<PageModel>,
}

impl CalendarDocument {
    pub fn assemble(year: i32, months: &[MonthContent; 12]) -> Self {
        // One index for all twelve grids, so each calendar year touched is
        // tabulated once.
        let mut index = HolidayIndex::new();
        let mut pages = Vec::with_capacity(months.len() * 2);
        for content in months {
            pages.push(PageModel::Cover {
                content: content.clone(),
            });
            pages.push(PageModel::Grid {
                month_index: content.month_index,
                year,
                cells: month_grid_with(&mut index, year, content.month_index),
                accent: content.accent,
            });
        }
        Self { year, pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
