//! Value objects - immutable types that represent domain concepts

pub mod clock_time;
mod ids;
pub mod week_days;

pub use clock_time::{ClockTime, ClockTimeError};
pub use ids::{AdId, GameId, IdParseError};
pub use week_days::{WeekDays, WeekDaysError};
