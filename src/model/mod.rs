pub mod alert;
pub mod card;
pub mod global_error;

pub use alert::{AlertEvent, NotificationType, Severity};
pub use card::{ActionTarget, NotificationCard, PotentialAction};
pub use global_error::{AppError, ErrorCode};
