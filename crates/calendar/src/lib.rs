//! Calendar grid construction and holiday computation.
//!
//! This crate provides the pure date arithmetic behind a printed calendar:
//! - Per-year holiday tables (fixed dates, Easter-derived moveable feasts,
//!   and bank-holiday Mondays)
//! - A date-keyed holiday index for constant-time per-cell lookup
//! - 42-cell Monday-first month grids with per-cell holiday annotations
//!
//! Everything here is deterministic and side-effect free; the functions can
//! be called concurrently from any number of callers.

mod grid;
mod holidays;
mod index;

pub use grid::{DayCell, GRID_CELLS, month_grid, month_grid_with};
pub use holidays::{Holiday, HolidayKind, easter_sunday, holidays_for_year};
pub use index::HolidayIndex;
