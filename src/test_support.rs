use crate::ninja::Sink;
use std::io;

/// Sink that rejects every write.
pub(crate) struct FailingSink;

impl Sink for FailingSink {
    fn append(&mut self, _bytes: &[u8]) -> io::Result<()> {
        Err(io::Error::other("sink closed"))
    }
}
