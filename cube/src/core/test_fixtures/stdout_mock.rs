// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, Mutex, MutexGuard, PoisonError}};
use strip_ansi_escapes::strip;

/// In memory [`Write`] sink. Clones share the same buffer, so one clone can be handed
/// to a writer (eg: a tracing subscriber) and the other used to inspect the output.
#[derive(Clone, Debug, Default)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let stripped = strip(self.lock().as_slice());
        String::from_utf8_lossy(&stripped).into_owned()
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_stdout_mock_shares_buffer_between_clones() {
        let mut stdout_mock = StdoutMock::default();
        let stdout_mock_clone = stdout_mock.clone();

        stdout_mock.write_all(b"hello world").unwrap();
        stdout_mock.flush().unwrap();

        assert_eq2!(stdout_mock_clone.get_copy_of_buffer_as_string(), "hello world");
    }

    #[test]
    fn test_stdout_mock_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();
        stdout_mock
            .write_all("\x1b[48;5;16mhello\x1b[0m world".as_bytes())
            .unwrap();

        assert_eq2!(
            stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
            "hello world"
        );
    }
}
