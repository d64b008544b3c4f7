pub mod calendar;
pub mod config;
pub mod fields;
pub mod flag;
pub mod merge;
pub mod normalize;
pub mod profiles;
