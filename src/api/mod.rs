//! HTTP API module for the split engine.
//!
//! This module exposes one split session over REST endpoints: reading the
//! snapshot, setting the total, resizing the roster and patching members.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PatchMemberRequest, ResizeRequest, SetTotalRequest, TimeRangeRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
