//! The render pass: fetched document in, cards out.
//!
//! The host (the browser client, or a test) does the I/O and hands the
//! result to [`render_document`]; [`finish_pass`] is the single place a
//! failure is logged.

use crate::config::RosterConfig;
use crate::error::{RosterError, RosterResult};
use crate::types::{decode_roster, Student};
use crate::view::Card;

/// Where cards end up. The browser implements this over a DOM element.
pub trait CardSink {
    fn append(&mut self, card: Card) -> RosterResult<()>;
}

impl CardSink for Vec<Card> {
    fn append(&mut self, card: Card) -> RosterResult<()> {
        self.push(card);
        Ok(())
    }
}

/// A response as seen by the pass: status plus the raw body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    pub status: u16,
    pub body: String,
}

impl FetchedDocument {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// How a pass ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    Rendered(usize),
    Failed(RosterError),
}

/// Append one card per student, in order. Returns the number appended.
pub fn render_cards<S: CardSink>(
    students: Vec<Student>,
    config: &RosterConfig,
    sink: &mut S,
) -> RosterResult<usize> {
    let mut count = 0;
    for student in students {
        sink.append(Card::build(student, config))?;
        count += 1;
    }
    Ok(count)
}

/// Check the status, decode the whole body, then render.
///
/// Nothing is appended unless the document decodes completely.
pub fn render_document<S: CardSink>(
    document: FetchedDocument,
    config: &RosterConfig,
    sink: &mut S,
) -> RosterResult<usize> {
    if !document.is_success() {
        return Err(RosterError::Status(document.status));
    }
    let students = decode_roster(&document.body)?;
    log::debug!("decoded {} students from {}", students.len(), config.data_url);
    render_cards(students, config, sink)
}

/// Close out a pass. A failure is logged exactly once and then dropped.
pub fn finish_pass(result: RosterResult<usize>) -> PassOutcome {
    match result {
        Ok(count) => {
            log::debug!("rendered {count} student cards");
            PassOutcome::Rendered(count)
        }
        Err(err) => {
            log::error!("failed to load student roster: {err}");
            PassOutcome::Failed(err)
        }
    }
}
