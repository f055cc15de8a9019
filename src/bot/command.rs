//! Two-phase command contract: `prepare` produces the immediate reply (a
//! final answer for instant commands, a prompt for pending ones), `handle`
//! consumes the query and produces the final reply.

use chrono::NaiveDate;

use crate::bot::event::InboundEvent;
use crate::errors::AppResult;
use crate::transport::ReplyOptions;

/// The payload a command's `handle` phase consumes: either a date already
/// resolved by the dispatcher (instant commands) or the follow-up message.
#[derive(Debug, Clone)]
pub enum Query {
    Date(NaiveDate),
    Message(InboundEvent),
}

pub trait Command: Send {
    /// Runs once, before any `handle`; sets the first reply text.
    fn prepare(&mut self) -> AppResult<()>;

    /// Consume the query. A recoverable bad input (unparseable date, wrong
    /// attachment) is a *handled* outcome: the reply text explains it and
    /// the call returns `Ok`. An `Err` means the command made no progress
    /// and stays consistent for a retry.
    fn handle(&mut self, query: Query) -> AppResult<()>;

    /// Latest human-readable reply text.
    fn response(&self) -> &str;

    /// Choices to offer alongside the prepared reply, if any.
    fn reply_options(&self) -> Option<ReplyOptions> {
        None
    }
}
