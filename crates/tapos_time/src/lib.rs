mod microseconds;
pub use microseconds::{Microseconds, milliseconds, seconds};

mod time_point;
pub use time_point::TimePoint;

mod time_point_sec;
pub use time_point_sec::TimePointSec;

mod utc;
pub use utc::parse_head_block_time;
