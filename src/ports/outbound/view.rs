//! Result presentation.
//!
//! Every entity renders itself to canonical text; a view displays that text
//! verbatim. The domain never prints.

pub trait SessionView {
    /// A titled section rule introducing a block of output.
    fn section(&self, title: &str);
    /// A multi-line entity rendering, displayed verbatim.
    fn block(&self, text: &str);
    /// A one-line progress or confirmation message.
    fn status(&self, msg: &str);
    /// A recoverable failure, presented without aborting the session.
    fn error(&self, err: anyhow::Error);
}
