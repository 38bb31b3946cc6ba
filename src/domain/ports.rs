use crate::utils::error::Result;

/// Source of whitespace-delimited console tokens.
pub trait TokenSource {
    /// Next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> Result<Option<String>>;

    /// Puts `token` back so the next call to `next_token` returns it.
    fn unread(&mut self, token: String);

    /// Drop whatever is left of the line the last token came from.
    fn discard_line(&mut self);
}
