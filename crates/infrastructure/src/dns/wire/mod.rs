//! DNS wire format for single-question UDP messages.

mod answer;
mod errors;
mod header;
mod message;
mod question;

pub use answer::Answer;
pub use errors::WireError;
pub use header::{Header, HeaderFlags, HEADER_LEN};
pub use message::{compression_pointer, Message, MIN_QUERY_LEN};
pub use question::Question;
