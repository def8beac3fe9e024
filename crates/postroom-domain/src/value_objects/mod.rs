//! Value objects exchanged with messaging services
//!
//! Plain data carried across the port boundaries. The persistence shape of
//! threads and messages belongs to the storage driver and is deliberately
//! absent here; these types cover what the service traits need to talk about
//! composition results and thread listings.

mod message;
mod thread;

pub use message::{OutboundMessage, ReplyDraft, ThreadDraft};
pub use thread::ThreadSummary;
