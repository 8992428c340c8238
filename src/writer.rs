use acl::{Reply, Result};

use std::io::Write;

use csv::Writer;

/// Streams reply rows as CSV, flushing after every row so output keeps pace with input
pub struct ReplyWriter<W: Write> {
    inner: Writer<W>,
}

impl<W: Write> ReplyWriter<W> {
    pub fn new(output: W) -> Self {
        return Self {
            inner: Writer::from_writer(output),
        };
    }

    pub fn write(&mut self, reply: &Reply) -> Result {
        self.inner.serialize(reply)?;
        self.inner.flush()?;

        return Ok(());
    }
}
