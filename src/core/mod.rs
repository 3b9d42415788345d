pub mod archive;
pub mod calculator;
pub mod logic;
pub mod parser;
pub mod processor;
pub mod runlog;
