use bytes::{Buf, BytesMut};
use serde::de::IgnoredAny;

const QUIT_COMMAND: &[u8] = b"\\q";
const CLIENTS_COMMAND: &[u8] = b"\\c";

/// Unterminated input beyond this size is handed over as-is so a peer
/// cannot grow the buffer without bound.
const MAX_PENDING_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// `\q`: end this connection.
    Quit,
    /// `\c`: dump the live client table.
    ClientList,
    Request(Vec<u8>),
}

/// Splits a byte stream into frames.
///
/// Frames are newline-delimited. A trailing chunk without a newline is
/// accepted once it is a control command or a complete JSON value, which
/// covers peers that send one JSON document per write.
#[derive(Debug, Default)]
pub struct RequestFramer {
    buffer: BytesMut,
}

impl RequestFramer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    pub fn next_frame(&mut self) -> Option<Frame> {
        loop {
            if let Some(newline) = self.buffer.iter().position(|b| *b == b'\n') {
                let line = self.buffer.split_to(newline + 1);
                let trimmed = line.trim_ascii();
                if trimmed.is_empty() {
                    continue;
                }
                return Some(classify(trimmed));
            }

            let trimmed = self.buffer.trim_ascii();
            if trimmed.is_empty() {
                self.buffer.clear();
                return None;
            }

            let complete = is_command(trimmed)
                || serde_json::from_slice::<IgnoredAny>(trimmed).is_ok()
                || self.buffer.len() > MAX_PENDING_BYTES;
            if !complete {
                return None;
            }

            let frame = classify(trimmed);
            self.buffer.advance(self.buffer.len());
            return Some(frame);
        }
    }
}

fn is_command(payload: &[u8]) -> bool {
    payload == QUIT_COMMAND || payload == CLIENTS_COMMAND
}

fn classify(payload: &[u8]) -> Frame {
    match payload {
        QUIT_COMMAND => Frame::Quit,
        CLIENTS_COMMAND => Frame::ClientList,
        other => Frame::Request(other.to_vec()),
    }
}
