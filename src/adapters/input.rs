use crate::domain::ports::TokenSource;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::BufRead;

/// Splits a buffered reader into whitespace-delimited tokens, one line at a time.
#[derive(Debug)]
pub struct LineTokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> LineTokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> TokenSource for LineTokenReader<R> {
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn unread(&mut self, token: String) {
        self.pending.push_front(token);
    }

    fn discard_line(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!("Discarding {} unread token(s)", self.pending.len());
        }
        self.pending.clear();
    }
}
