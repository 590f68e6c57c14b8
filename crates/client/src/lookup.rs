//! Debounced lookup of an existing reservation by code.
//!
//! [`LookupEngine`] is a plain state machine: it never sleeps or performs
//! I/O. The owner feeds it edits with the current time, asks for the
//! pending [`deadline`](LookupEngine::deadline), calls
//! [`fire_due`](LookupEngine::fire_due) when that deadline passes, performs
//! the fetch for the returned [`LookupTicket`] and hands the result back to
//! [`complete`](LookupEngine::complete).

use std::time::Duration;

use deportivos_core::reservation::is_lookup_code_input;
use deportivos_core::types::Code;
use tokio::time::Instant;

use crate::error::GatewayError;
use crate::model::ReservationRecord;

/// Where the lookup currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    /// Nothing typed, or the last input was cleared.
    Idle,
    /// A lookup for `code` fires at `deadline` unless another edit arrives.
    Pending { code: Code, deadline: Instant },
    /// A fetch is outstanding.
    InFlight(LookupTicket),
    /// A reservation was found and copied into the form.
    Locked { code: Code },
    /// The last lookup found nothing (or failed). Behaves like `Idle`.
    NotFound { code: Code },
}

/// Identifies one issued lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub code: Code,
    id: u64,
}

/// Result of feeding an edit to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeEdit {
    /// Contained something other than digits; the input was not changed.
    Rejected,
    Accepted,
    /// Accepted, and the previous match was released.
    Unlocked,
}

/// Result of a completed lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(ReservationRecord),
    Missing,
    Failed(GatewayError),
    /// The ticket is no longer current; the response must be ignored.
    Stale,
}

#[derive(Debug, Clone)]
pub struct LookupEngine {
    input: String,
    state: LookupState,
    debounce: Duration,
    next_id: u64,
}

impl LookupEngine {
    pub fn new(debounce: Duration) -> Self {
        Self {
            input: String::new(),
            state: LookupState::Idle,
            debounce,
            next_id: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, LookupState::Locked { .. })
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, LookupState::InFlight(_))
    }

    /// When the pending lookup should fire.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            LookupState::Pending { deadline, .. } => Some(deadline),
            _ => None,
        }
    }

    /// The user changed the code field to `raw`.
    ///
    /// Non-digit input is rejected. Otherwise the debounce timer is
    /// (re)armed for the new value, superseding any earlier timer and any
    /// in-flight lookup.
    pub fn edit(&mut self, raw: &str, now: Instant) -> CodeEdit {
        if !is_lookup_code_input(raw) {
            return CodeEdit::Rejected;
        }

        let was_locked = self.is_locked();
        self.input = raw.to_string();
        self.state = if self.input.is_empty() {
            LookupState::Idle
        } else {
            LookupState::Pending {
                code: Code::from(self.input.as_str()),
                deadline: now + self.debounce,
            }
        };

        if was_locked {
            CodeEdit::Unlocked
        } else {
            CodeEdit::Accepted
        }
    }

    /// Fire the pending lookup if its deadline has passed.
    pub fn fire_due(&mut self, now: Instant) -> Option<LookupTicket> {
        match &self.state {
            LookupState::Pending { code, deadline } if *deadline <= now => {
                let code = code.clone();
                Some(self.issue(code))
            }
            _ => None,
        }
    }

    /// Look up immediately, skipping the debounce window.
    ///
    /// Does nothing when the field is empty or a lookup is in flight.
    pub fn search_now(&mut self) -> Option<LookupTicket> {
        if self.input.is_empty() || self.is_in_flight() {
            return None;
        }
        Some(self.issue(Code::from(self.input.as_str())))
    }

    /// Feed back the result of the fetch for `ticket`.
    pub fn complete(
        &mut self,
        ticket: &LookupTicket,
        result: Result<Option<ReservationRecord>, GatewayError>,
    ) -> LookupOutcome {
        match &self.state {
            LookupState::InFlight(current) if current == ticket => {}
            _ => {
                tracing::debug!(code = %ticket.code, "Discarding stale lookup response");
                return LookupOutcome::Stale;
            }
        }

        let code = ticket.code.clone();
        match result {
            Ok(Some(record)) => {
                self.state = LookupState::Locked { code };
                LookupOutcome::Found(record)
            }
            Ok(None) => {
                tracing::debug!(code = %code, "No reservation with this code");
                self.state = LookupState::NotFound { code };
                LookupOutcome::Missing
            }
            Err(e) => {
                self.state = LookupState::NotFound { code };
                LookupOutcome::Failed(e)
            }
        }
    }

    /// Empty the field and return to `Idle`. Outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.input.clear();
        self.state = LookupState::Idle;
    }

    fn issue(&mut self, code: Code) -> LookupTicket {
        self.next_id += 1;
        let ticket = LookupTicket {
            code,
            id: self.next_id,
        };
        self.state = LookupState::InFlight(ticket.clone());
        ticket
    }
}

/// Confirmation shown after a successful lookup, e.g.
/// `Reservation #5 found: Ana Rojas - Coliseo Central`.
pub fn found_message(record: &ReservationRecord, fallback_code: &Code) -> String {
    let code = record.code().unwrap_or_else(|| fallback_code.clone());
    let mut message = format!("Reservation #{code} found");
    if let Some(client) = record.client_full_name() {
        message.push_str(&format!(": {client}"));
        if let Some(facility) = record.facility_name() {
            message.push_str(&format!(" - {facility}"));
        }
    }
    message
}
