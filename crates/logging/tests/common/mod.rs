// crates/logging/tests/common/mod.rs
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt;

#[derive(Clone, Default)]
pub struct VecWriter(pub Arc<Mutex<Vec<u8>>>);

pub struct VecWriterGuard(Arc<Mutex<Vec<u8>>>);

impl Write for VecWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> fmt::writer::MakeWriter<'a> for VecWriter {
    type Writer = VecWriterGuard;
    fn make_writer(&'a self) -> Self::Writer {
        VecWriterGuard(self.0.clone())
    }
}

impl VecWriter {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}
