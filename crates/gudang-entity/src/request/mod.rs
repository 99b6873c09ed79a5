//! Stock request domain entities.

pub mod model;
pub mod priority;
pub mod status;

pub use model::{Request, RequestItem};
pub use priority::RequestPriority;
pub use status::RequestStatus;
