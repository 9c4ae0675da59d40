pub mod presence;
pub mod timetable;
pub mod user;
pub mod weekday;

pub use presence::{PresenceData, PresenceRecord, Timetable};
pub use timetable::{read_timetable, timetable_from_json};
pub use user::User;
pub use weekday::{MeanStartEnd, StartEndBucket};
