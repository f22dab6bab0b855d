//! Output destinations for the writer.

use std::io;

/// An append-only byte destination.
///
/// This is the writer's only side effect. Statements are appended in the order
/// they are emitted and nothing is ever read back.
pub trait Sink {
    fn append(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl Sink for Vec<u8> {
    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl Sink for String {
    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        let text =
            std::str::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.push_str(text);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).append(bytes)
    }
}

/// Adapter that appends to any [`io::Write`] (files, stdout, sockets).
#[derive(Debug)]
pub struct IoSink<W: io::Write>(pub W);

impl<W: io::Write> IoSink<W> {
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.0.write_all(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_sink_accumulates() {
        let mut sink = String::new();
        sink.append(b"build ").unwrap();
        sink.append(b"out\n").unwrap();
        assert_eq!(sink, "build out\n");
    }

    #[test]
    fn string_sink_rejects_invalid_utf8() {
        let mut sink = String::new();
        let err = sink.append(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn io_sink_forwards_to_writer() {
        let mut sink = IoSink(Vec::new());
        sink.append(b"rule cc\n").unwrap();
        assert_eq!(sink.into_inner(), b"rule cc\n");
    }

    #[test]
    fn borrowed_sink_appends_to_owner() {
        let mut owner = Vec::new();
        {
            // `Vec::append` is inherent, so call through the trait.
            let mut borrowed: &mut Vec<u8> = &mut owner;
            Sink::append(&mut borrowed, b"x").unwrap();
        }
        assert_eq!(owner, b"x");
    }
}
