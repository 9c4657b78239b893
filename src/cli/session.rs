//! Request session over a single record store
//!
//! Each input line is one request:
//!
//! ```text
//! {"op":"add","id":1,"username":"testuser","email":"test@example.com"}
//! {"op":"get","id":1}
//! {"op":"delete","id":1}
//! {"op":"list"}
//! ```
//!
//! Each request gets exactly one response envelope. Undecodable lines get an
//! error envelope and the session continues, including lines that are not
//! UTF-8; read failures end it.

use std::io::{BufRead, Write};

use serde::Deserialize;
use serde_json::json;

use crate::data::{format_response, ApiResponse, ResponseStatus};
use crate::observability::Event;
use crate::store::{RecordId, RecordStore};

use super::errors::{CliError, CliResult};
use super::io::{read_lines, write_json_line};

/// A decoded session request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum SessionRequest {
    Add {
        id: RecordId,
        username: String,
        email: String,
    },
    Get {
        id: RecordId,
    },
    Delete {
        id: RecordId,
    },
    List,
}

impl SessionRequest {
    /// Decode one request line
    pub fn parse(line: &str) -> CliResult<Self> {
        serde_json::from_str(line).map_err(|e| CliError::bad_request(e.to_string()))
    }
}

/// Apply one request to the store
pub fn apply(store: &mut RecordStore, request: SessionRequest) -> ApiResponse {
    match request {
        SessionRequest::Add { id, username, email } => {
            if store.add(id, &username, &email) {
                format_response(ResponseStatus::Success, "Record added", record_json(store, id))
            } else {
                format_response(ResponseStatus::Error, "Record already exists", Some(json!({ "id": id })))
            }
        }
        SessionRequest::Get { id } => match record_json(store, id) {
            Some(record) => format_response(ResponseStatus::Success, "Record found", Some(record)),
            None => format_response(ResponseStatus::Error, "Record not found", Some(json!({ "id": id }))),
        },
        SessionRequest::Delete { id } => {
            if store.delete(id) {
                format_response(ResponseStatus::Success, "Record deleted", Some(json!({ "id": id })))
            } else {
                format_response(ResponseStatus::Error, "Record not found", Some(json!({ "id": id })))
            }
        }
        SessionRequest::List => format_response(
            ResponseStatus::Success,
            format!("{} record(s)", store.len()),
            Some(json!({ "ids": store.ids() })),
        ),
    }
}

fn record_json(store: &RecordStore, id: RecordId) -> Option<serde_json::Value> {
    store
        .get(id)
        .and_then(|record| serde_json::to_value(record).ok())
}

/// Read requests from `reader` until EOF, writing one response per request.
///
/// Returns the number of requests handled.
pub fn run_session<R: BufRead, W: Write>(
    store: &mut RecordStore,
    reader: R,
    writer: &mut W,
) -> CliResult<usize> {
    let logger = *store.logger();
    logger.event(Event::SessionStart, &[]);

    let mut handled = 0;
    for line in read_lines(reader) {
        let request = match line {
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => Err(e),
            Ok(line) => SessionRequest::parse(&line),
        };
        handled += 1;

        let response = match request {
            Ok(request) => apply(store, request),
            Err(e) => {
                logger.event(Event::RequestRejected, &[("reason", e.to_string().as_str())]);
                format_response(
                    ResponseStatus::Error,
                    e.to_string(),
                    Some(json!({ "code": e.code_str() })),
                )
            }
        };
        write_json_line(writer, &response)?;
    }

    logger.event(Event::SessionComplete, &[("requests", handled.to_string().as_str())]);
    Ok(handled)
}
