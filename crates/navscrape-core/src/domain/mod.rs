pub mod date;
pub mod decimal;
pub mod nav;
pub mod timestamp;

pub use date::{month_number, CalendarDate, ITALIAN_MONTHS};
pub use decimal::parse_decimal;
pub use nav::{NavPoint, NavSeries};
pub use timestamp::GeneratedAt;
