//! Month calendar arithmetic and status projection.
//!
//! # Responsibility
//! - Compute month geometry (length, first weekday, Monday-first weeks).
//! - Project status records onto a day-by-day month grid.
//!
//! # Invariants
//! - Everything here is pure; nothing reads the clock or mutates records.
//! - Weeks are Monday-first: weekday index 0 is Monday, 6 is Sunday.

mod month;
mod projector;

pub use month::{days_in_month, first_weekday, CalendarError, MonthCalendar, WEEKDAY_LABELS};
pub use projector::{project, DayStatus, MonthView};
