//! Stateless helpers: arithmetic, map filtering, list transform, and the
//! response envelope.

mod processor;
mod response;

pub use processor::{calculate_sum, process_data, DataProcessor, REQUIRED_KEYS};
pub use response::{format_response, ApiResponse, ResponseStatus, RESPONSE_TIMESTAMP};
