pub mod cell;
pub mod day_record;
pub mod duration;
pub mod employee;
pub mod table;
pub mod time;
pub mod timesheet;

pub use cell::RawCell;
pub use day_record::DayRecord;
pub use duration::{DurationOutcome, HoursRange, InvalidReason};
pub use employee::EmployeeResult;
pub use table::Table;
pub use time::ParsedTime;
pub use timesheet::TimesheetResult;
