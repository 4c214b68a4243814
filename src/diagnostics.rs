//! Logger interface, implemented over the `log` facade and initialized by
//! `simple_logger` in the binary.
//!
//! `report_error` logs the message (so it reaches the user exactly like
//! `log::error!` does everywhere else in this crate) and lets the caller
//! propagate the underlying `RuntimeError`/`ParseError`/`LexError` with `?` —
//! the process-exit-or-resume-prompt decision is made once, at the boundary
//! in `main.rs`/the REPL, not duplicated at every call site.

use crate::loc::Loc;

pub fn info(message: impl AsRef<str>) {
    log::info!("{}", message.as_ref());
}

pub fn debug(message: impl AsRef<str>) {
    log::debug!("{}", message.as_ref());
}

pub fn report_error(loc: &Loc, message: impl AsRef<str>) {
    log::error!("{}: {}", loc, message.as_ref());
}
