//! One reservation form session.
//!
//! A [`FormSession`] owns the form, the cascade resolver and the lookup
//! engine inside a single spawned task. Input arrives as [`FormEvent`]s over
//! a channel; every gateway call runs as a future in the same task, so
//! state is only ever touched from one place. After each step the task
//! publishes a [`FormView`] snapshot on a `watch` channel.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use deportivos_core::fields::ReservationField;
use deportivos_core::types::Code;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::cascade::{CascadeResolver, DisciplineOutcome, DisciplineRequest};
use crate::error::GatewayError;
use crate::form::ReservationForm;
use crate::gateway::ReservationGateway;
use crate::lookup::{
    found_message, CodeEdit, LookupEngine, LookupOutcome, LookupState, LookupTicket,
};
use crate::model::{Court, Discipline, ReferenceData, ReservationRecord};
use crate::submit::{self, check_required, failure_message, success_message};

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

/// User input to a form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Any reservation field. Facility and court edits cascade.
    EditField(ReservationField, String),
    /// The reservation code search field.
    EditCode(String),
    /// Look up the current code without waiting for the debounce window.
    SearchNow,
    Submit,
    /// Reset every field, message and lookup state.
    Clear,
}

/// Coarse lookup status for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPhase {
    Idle,
    Pending,
    InFlight,
    Locked,
    NotFound,
}

impl From<&LookupState> for LookupPhase {
    fn from(state: &LookupState) -> Self {
        match state {
            LookupState::Idle => Self::Idle,
            LookupState::Pending { .. } => Self::Pending,
            LookupState::InFlight(_) => Self::InFlight,
            LookupState::Locked { .. } => Self::Locked,
            LookupState::NotFound { .. } => Self::NotFound,
        }
    }
}

/// Everything a renderer needs, as of the last processed step.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub form: ReservationForm,
    pub code_input: String,
    pub lookup: LookupPhase,
    pub reference: Arc<ReferenceData>,
    pub reference_loaded: bool,
    pub filtered_courts: Vec<Court>,
    pub disciplines: Vec<Discipline>,
    /// The selected facility has no courts.
    pub no_courts: bool,
    pub court_selectable: bool,
    pub discipline_selectable: bool,
    pub lookup_in_flight: bool,
    pub submitting: bool,
    pub success: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("Form session has stopped")]
pub struct SessionClosed;

/// Handle to a running form session. Dropping it stops the session.
pub struct FormSession {
    events: mpsc::UnboundedSender<FormEvent>,
    view: watch::Receiver<FormView>,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl FormSession {
    /// Start a session that dates new forms with the local calendar day.
    pub fn start(gateway: Arc<dyn ReservationGateway>, debounce: Duration) -> Self {
        Self::start_with_clock(gateway, debounce, local_today)
    }

    /// Start a session with an explicit source for "today".
    ///
    /// Reference data is requested immediately.
    pub fn start_with_clock(
        gateway: Arc<dyn ReservationGateway>,
        debounce: Duration,
        today: fn() -> NaiveDate,
    ) -> Self {
        let worker = SessionWorker::new(gateway, debounce, today);
        let (view_tx, view_rx) = watch::channel(worker.snapshot());
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(worker.run(events_rx, view_tx, cancel.clone()));

        Self {
            events: events_tx,
            view: view_rx,
            cancel,
            handle: Some(handle),
        }
    }

    pub fn send(&self, event: FormEvent) -> Result<(), SessionClosed> {
        self.events.send(event).map_err(|_| SessionClosed)
    }

    /// The latest published view.
    pub fn view(&self) -> FormView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormView> {
        self.view.clone()
    }

    /// Stop the session and wait for its task to finish. Pending timers
    /// and in-flight requests are dropped.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "Form session task failed");
            }
        }
    }
}

impl Drop for FormSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Worker
// ---------------------------------------------------------------------------

/// A finished gateway call, tagged with what it was for.
enum Completion {
    Reference(Result<ReferenceData, GatewayError>),
    Disciplines(DisciplineRequest, Result<Vec<Discipline>, GatewayError>),
    Lookup(LookupTicket, Result<Option<ReservationRecord>, GatewayError>),
    Submitted(Result<ReservationRecord, GatewayError>),
}

struct SessionWorker {
    gateway: Arc<dyn ReservationGateway>,
    today: fn() -> NaiveDate,
    form: ReservationForm,
    cascade: CascadeResolver,
    lookup: LookupEngine,
    reference_loaded: bool,
    submitting: bool,
    success: Option<String>,
    error: Option<String>,
    in_flight: FuturesUnordered<BoxFuture<'static, Completion>>,
}

impl SessionWorker {
    fn new(
        gateway: Arc<dyn ReservationGateway>,
        debounce: Duration,
        today: fn() -> NaiveDate,
    ) -> Self {
        Self {
            gateway,
            today,
            form: ReservationForm::with_defaults(today()),
            cascade: CascadeResolver::new(Arc::new(ReferenceData::default())),
            lookup: LookupEngine::new(debounce),
            reference_loaded: false,
            submitting: false,
            success: None,
            error: None,
            in_flight: FuturesUnordered::new(),
        }
    }

    async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<FormEvent>,
        view: watch::Sender<FormView>,
        cancel: CancellationToken,
    ) {
        self.load_reference();

        loop {
            let deadline = self.lookup.deadline();

            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Form session cancelled");
                    break;
                }
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => {
                        tracing::debug!("Form session handle dropped");
                        break;
                    }
                },
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)),
                    if deadline.is_some() => {
                    self.fire_lookup();
                }
                Some(done) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    self.handle_completion(done);
                }
            }

            view.send_replace(self.snapshot());
        }
    }

    // ---- events ----

    fn handle_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::EditField(field, value) => self.edit_field(field, value),
            FormEvent::EditCode(raw) => self.edit_code(&raw),
            FormEvent::SearchNow => {
                if let Some(ticket) = self.lookup.search_now() {
                    self.spawn_lookup(ticket);
                }
            }
            FormEvent::Submit => self.submit(),
            FormEvent::Clear => {
                self.reset_form();
                self.success = None;
                self.error = None;
            }
        }
    }

    fn edit_field(&mut self, field: ReservationField, value: String) {
        self.error = None;
        match field {
            ReservationField::Facility => {
                self.cascade.select_facility(&mut self.form, Code::from(value));
            }
            ReservationField::Court => {
                if let Some(request) = self.cascade.select_court(&mut self.form, Code::from(value))
                {
                    self.spawn_disciplines(request);
                }
            }
            ReservationField::Discipline => {
                self.cascade.select_discipline(&mut self.form, Code::from(value));
            }
            _ => self.form.set(field, value),
        }
    }

    fn edit_code(&mut self, raw: &str) {
        match self.lookup.edit(raw, Instant::now()) {
            CodeEdit::Rejected => tracing::debug!(input = raw, "Ignoring non-numeric code input"),
            CodeEdit::Unlocked => self.success = None,
            CodeEdit::Accepted => {}
        }
    }

    fn fire_lookup(&mut self) {
        if let Some(ticket) = self.lookup.fire_due(Instant::now()) {
            self.spawn_lookup(ticket);
        }
    }

    fn submit(&mut self) {
        if self.submitting {
            return;
        }
        if let Err(e) = check_required(&self.form) {
            self.error = Some(failure_message(&e));
            return;
        }

        self.submitting = true;
        self.error = None;
        let gateway = Arc::clone(&self.gateway);
        let form = self.form.clone();
        self.in_flight.push(
            async move { Completion::Submitted(submit::submit(gateway.as_ref(), &form).await) }
                .boxed(),
        );
    }

    fn reset_form(&mut self) {
        self.form = ReservationForm::with_defaults((self.today)());
        self.lookup.reset();
        self.cascade.reset();
    }

    // ---- gateway calls ----

    fn load_reference(&mut self) {
        let gateway = Arc::clone(&self.gateway);
        self.in_flight.push(
            async move { Completion::Reference(gateway.fetch_form_reference_data().await) }
                .boxed(),
        );
    }

    fn spawn_disciplines(&mut self, request: DisciplineRequest) {
        let gateway = Arc::clone(&self.gateway);
        self.in_flight.push(
            async move {
                let result = gateway.fetch_disciplines_for_court(&request.court).await;
                Completion::Disciplines(request, result)
            }
            .boxed(),
        );
    }

    fn spawn_lookup(&mut self, ticket: LookupTicket) {
        tracing::debug!(code = %ticket.code, "Looking up reservation");
        let gateway = Arc::clone(&self.gateway);
        self.in_flight.push(
            async move {
                let result = gateway.fetch_reservation_by_code(&ticket.code).await;
                Completion::Lookup(ticket, result)
            }
            .boxed(),
        );
    }

    // ---- completions ----

    fn handle_completion(&mut self, done: Completion) {
        match done {
            Completion::Reference(Ok(data)) => {
                tracing::info!(
                    clients = data.clients.len(),
                    facilities = data.facilities.len(),
                    courts = data.courts.len(),
                    "Reference data loaded"
                );
                self.cascade.set_reference(Arc::new(data), &mut self.form);
                self.reference_loaded = true;
            }
            Completion::Reference(Err(e)) => {
                tracing::error!(error = %e, "Could not load reference data");
                self.error = Some(format!("Could not load reference data: {e}"));
            }
            Completion::Disciplines(request, result) => {
                if let DisciplineOutcome::Failed(message) =
                    self.cascade.apply_disciplines(&mut self.form, &request, result)
                {
                    self.error = Some(message);
                }
            }
            Completion::Lookup(ticket, result) => match self.lookup.complete(&ticket, result) {
                LookupOutcome::Found(record) => {
                    self.form.apply_record(&record);
                    if let Some(request) = self.cascade.rebind(&mut self.form) {
                        self.spawn_disciplines(request);
                    }
                    self.success = Some(found_message(&record, &ticket.code));
                }
                LookupOutcome::Missing => self.success = None,
                LookupOutcome::Failed(e) => {
                    tracing::warn!(code = %ticket.code, error = %e, "Reservation lookup failed");
                    self.success = None;
                }
                LookupOutcome::Stale => {}
            },
            Completion::Submitted(result) => {
                self.submitting = false;
                match result {
                    Ok(record) => {
                        self.reset_form();
                        self.error = None;
                        self.success = Some(success_message(&record));
                    }
                    Err(e) => {
                        self.error = Some(failure_message(&e));
                    }
                }
            }
        }
    }

    fn snapshot(&self) -> FormView {
        FormView {
            form: self.form.clone(),
            code_input: self.lookup.input().to_string(),
            lookup: LookupPhase::from(self.lookup.state()),
            reference: Arc::clone(self.cascade.reference()),
            reference_loaded: self.reference_loaded,
            filtered_courts: self.cascade.filtered_courts().to_vec(),
            disciplines: self.cascade.disciplines().to_vec(),
            no_courts: self.cascade.no_courts(),
            court_selectable: self.cascade.court_selectable(&self.form),
            discipline_selectable: self.cascade.discipline_selectable(&self.form),
            lookup_in_flight: self.lookup.is_in_flight(),
            submitting: self.submitting,
            success: self.success.clone(),
            error: self.error.clone(),
        }
    }
}
