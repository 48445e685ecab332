mod session;
mod throttle;

pub use session::{ApiError, Session};
pub use throttle::Throttle;
