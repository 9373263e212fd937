use chrono::{Datelike, NaiveDate};

use crate::locale::table::{self, Language};

/// Months in a year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Rows in every month grid. Fixed so all months render at uniform height.
pub const GRID_ROWS: usize = 6;

/// Columns in every month grid (Monday through Sunday).
pub const GRID_COLS: usize = 7;

/// One row of a month grid; `None` marks an empty cell.
pub type WeekRow = [Option<u8>; GRID_COLS];

/// Everything needed to render one month: locale labels plus a fixed
/// 6×7 grid of day numbers laid out Monday-first.
///
/// A value object: regenerated whenever year or locale changes, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MonthGrid {
    /// Month index, 0 = January.
    pub month_index: usize,
    /// Calendar year.
    pub year: i32,
    /// Locale month name.
    pub display_name: String,
    /// Locale weekday abbreviations, Monday first.
    pub weekday_labels: [String; GRID_COLS],
    /// Exactly six rows of seven cells each.
    pub weeks: [WeekRow; GRID_ROWS],
}

impl MonthGrid {
    /// Count populated day cells. Always equals the month's true length.
    pub fn day_count(&self) -> usize {
        self.weeks
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

/// Number of days in the given month under Gregorian rules.
fn days_in_month(year: i32, month_index: usize) -> u32 {
    let first = first_of_month(year, month_index);
    let next = if month_index == 11 {
        first_of_month(year + 1, 0)
    } else {
        first_of_month(year, month_index + 1)
    };
    (next - first).num_days() as u32
}

/// Weekday of day 1 of the month, Monday = 0 .. Sunday = 6.
fn first_weekday_mon0(year: i32, month_index: usize) -> usize {
    first_of_month(year, month_index)
        .weekday()
        .num_days_from_monday() as usize
}

fn first_of_month(year: i32, month_index: usize) -> NaiveDate {
    // month_index is validated by the public entry points; chrono only fails
    // here for years outside its supported range.
    NaiveDate::from_ymd_opt(year, month_index as u32 + 1, 1)
        .unwrap_or_else(|| panic!("year {year} out of supported calendar range"))
}

/// Lay out the day numbers of one month into exactly six Monday-first rows.
fn build_weeks(year: i32, month_index: usize) -> [WeekRow; GRID_ROWS] {
    let days = days_in_month(year, month_index);
    let first_col = first_weekday_mon0(year, month_index);

    let mut weeks = [[None; GRID_COLS]; GRID_ROWS];
    let mut row = 0;
    let mut col = first_col;
    for day in 1..=days {
        weeks[row][col] = Some(day as u8);
        col += 1;
        if col == GRID_COLS {
            col = 0;
            row += 1;
        }
    }
    // Remaining cells stay None: trailing cells of the last populated row and
    // any fully-empty padding rows up to six.
    weeks
}

/// Compute the grid for a single month.
///
/// Total over any year chrono can represent. Panics if `month_index >= 12`;
/// an out-of-range month is a programming error, not a recoverable condition.
pub fn month_grid(year: i32, month_index: usize, language: Language) -> MonthGrid {
    assert!(
        month_index < MONTHS_PER_YEAR,
        "month_index {month_index} out of range 0..12"
    );
    let pack = table::locale_strings(language);
    MonthGrid {
        month_index,
        year,
        display_name: pack.months[month_index].to_string(),
        weekday_labels: pack.days_short.map(str::to_string),
        weeks: build_weeks(year, month_index),
    }
}

/// Compute all twelve month grids for a year; index `i` is month `i`.
pub fn year_grids(year: i32, language: Language) -> Vec<MonthGrid> {
    (0..MONTHS_PER_YEAR)
        .map(|m| month_grid(year, m, language))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/grid.rs"]
mod tests;
