pub mod calendar;
mod html;
pub mod net;
pub mod profile;

pub use calendar::{CalendarParser, fetch_year};
pub use net::{Fetcher, PageSource};
pub use profile::{ProfileParser, fetch_profiles};
