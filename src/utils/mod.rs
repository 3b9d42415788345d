pub mod date;
pub mod formatting;
pub mod path;
pub mod pattern;
pub mod table;
pub mod time;
