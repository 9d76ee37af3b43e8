//! Game server client.
//!
//! The server speaks a line protocol: after a `MODE` line and an `INIT`
//! handshake every line carries a deadline in microseconds and a move in
//! wire encoding.

mod channel;
mod error;
mod session;

pub use channel::{LineChannel, StdioChannel, ThreadedChannel};
pub use error::ClientError;
pub use session::{deadline_from_micros, Mode, Session};
