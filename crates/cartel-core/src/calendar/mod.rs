pub mod clock;
pub mod month;

pub use clock::{Clock, FixedClock, SystemClock};
pub use month::Month;
