//! Locale tables: month names, weekday abbreviations, UI strings.

pub mod table;
