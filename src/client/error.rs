//! Error type for the game session.

use std::fmt;
use std::io;

/// Error type for session failures
#[derive(Debug)]
pub enum ClientError {
    /// Reading from or writing to the transport failed
    Io(io::Error),
    /// The server's answer to the mode line was not `<deadline> <first>`
    Handshake { line: String },
    /// A server line was not `<deadline> <move>`
    Protocol { line: String },
    /// The server hung up before ending the game
    ChannelClosed,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Io(err) => write!(f, "Transport error: {err}"),
            ClientError::Handshake { line } => {
                write!(f, "Wrong response from server: '{line}'")
            }
            ClientError::Protocol { line } => {
                write!(f, "Malformed line from server: '{line}'")
            }
            ClientError::ChannelClosed => write!(f, "Server closed the connection"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            ClientError::ChannelClosed
        } else {
            ClientError::Io(err)
        }
    }
}
