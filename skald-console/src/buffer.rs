use std::fmt;

/// A fixed-capacity text builder that truncates instead of failing.
///
/// Writes past the capacity are cut at the last full character and the
/// truncation is recorded, so callers can always tell a clipped rendering
/// from a complete one.
#[derive(Debug)]
pub struct BoundedBuf {
    buf: String,
    cap: usize,
    truncated: bool,
}

impl BoundedBuf {
    pub fn new(cap: usize) -> Self {
        Self {
            buf: String::with_capacity(cap.min(64)),
            cap,
            truncated: false,
        }
    }

    /// Append as much of `s` as fits, cutting on a character boundary.
    pub fn push_str(&mut self, s: &str) {
        let room = self.cap - self.buf.len();
        if s.len() <= room {
            self.buf.push_str(s);
            return;
        }
        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        if let Some(prefix) = s.get(..cut) {
            self.buf.push_str(prefix);
        }
        self.truncated = true;
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.cap - self.buf.len()
    }

    /// Whether any write so far was cut short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Write for BoundedBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
