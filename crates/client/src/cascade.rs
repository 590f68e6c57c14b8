//! Facility -> court -> discipline selection.
//!
//! The resolver owns the derived lists (courts of the selected facility,
//! disciplines of the selected court) and writes selections through the
//! [`ReservationForm`]. Discipline lists arrive asynchronously; every court
//! change bumps a generation counter and a response is only applied when
//! its [`DisciplineRequest`] carries the current generation.

use std::sync::Arc;

use deportivos_core::fields::ReservationField;
use deportivos_core::types::Code;

use crate::error::GatewayError;
use crate::form::ReservationForm;
use crate::model::{Court, Discipline, ReferenceData};

/// A discipline fetch the caller must issue for `court`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisciplineRequest {
    pub court: Code,
    generation: u64,
}

/// What happened to a discipline response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisciplineOutcome {
    /// The list replaced the current options.
    Applied,
    /// The court changed since the request was issued; nothing was touched.
    Stale,
    /// The fetch failed; the options are now empty.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct CascadeResolver {
    reference: Arc<ReferenceData>,
    filtered_courts: Vec<Court>,
    disciplines: Vec<Discipline>,
    no_courts: bool,
    generation: u64,
}

impl CascadeResolver {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self {
            reference,
            filtered_courts: Vec::new(),
            disciplines: Vec::new(),
            no_courts: false,
            generation: 0,
        }
    }

    /// Install freshly loaded reference data and refilter for the current
    /// facility, if any.
    pub fn set_reference(&mut self, reference: Arc<ReferenceData>, form: &mut ReservationForm) {
        self.reference = reference;
        if !form.is_blank(ReservationField::Facility) {
            self.refilter(form);
        }
    }

    pub fn reference(&self) -> &Arc<ReferenceData> {
        &self.reference
    }

    pub fn filtered_courts(&self) -> &[Court] {
        &self.filtered_courts
    }

    pub fn disciplines(&self) -> &[Discipline] {
        &self.disciplines
    }

    /// A facility is selected but has no courts.
    pub fn no_courts(&self) -> bool {
        self.no_courts
    }

    pub fn court_selectable(&self, form: &ReservationForm) -> bool {
        !form.is_blank(ReservationField::Facility) && !self.filtered_courts.is_empty()
    }

    pub fn discipline_selectable(&self, form: &ReservationForm) -> bool {
        !form.is_blank(ReservationField::Court)
    }

    /// The user picked a facility (or cleared it).
    ///
    /// A court that does not belong to the new facility is cleared along
    /// with its discipline.
    pub fn select_facility(&mut self, form: &mut ReservationForm, facility: Code) {
        form.set(ReservationField::Facility, facility.as_str());

        if facility.is_empty() {
            self.filtered_courts.clear();
            self.no_courts = false;
            self.clear_court(form);
            return;
        }

        self.refilter(form);
    }

    /// The user picked a court (or cleared it). Any discipline selection is
    /// invalidated. Returns the discipline fetch to issue, if any.
    ///
    /// A court outside the selected facility's list is ignored; with no
    /// facility selected that list is empty.
    pub fn select_court(
        &mut self,
        form: &mut ReservationForm,
        court: Code,
    ) -> Option<DisciplineRequest> {
        if court.is_empty() {
            self.clear_court(form);
            return None;
        }

        if !self.filtered_courts.iter().any(|c| c.cod_cancha == court) {
            tracing::debug!(
                court = %court,
                facility = %form.code(ReservationField::Facility),
                "Ignoring court outside the selected facility"
            );
            return None;
        }

        form.set(ReservationField::Court, court.as_str());
        form.clear(ReservationField::Discipline);
        Some(self.request_disciplines(court))
    }

    /// The user picked a discipline (or cleared it).
    ///
    /// Only disciplines listed for the selected court are accepted. Returns
    /// whether the form changed.
    pub fn select_discipline(&mut self, form: &mut ReservationForm, discipline: Code) -> bool {
        if discipline.is_empty() {
            form.clear(ReservationField::Discipline);
            return true;
        }

        let court = form.code(ReservationField::Court);
        if court.is_empty() || !self.disciplines.iter().any(|d| d.cod_disciplina == discipline) {
            tracing::debug!(
                discipline = %discipline,
                court = %court,
                "Ignoring discipline not offered on the selected court"
            );
            return false;
        }

        form.set(ReservationField::Discipline, discipline.as_str());
        true
    }

    /// Re-derive lists after the whole form was overwritten (lookup
    /// autofill or reset). Selections that are still consistent are kept,
    /// including the discipline, which is rechecked when its list arrives.
    pub fn rebind(&mut self, form: &mut ReservationForm) -> Option<DisciplineRequest> {
        if form.is_blank(ReservationField::Facility) {
            self.filtered_courts.clear();
            self.no_courts = false;
        } else {
            self.refilter(form);
        }

        let court = form.code(ReservationField::Court);
        if court.is_empty() {
            self.clear_court(form);
            return None;
        }
        Some(self.request_disciplines(court))
    }

    /// Apply a discipline response. Stale responses are discarded.
    pub fn apply_disciplines(
        &mut self,
        form: &mut ReservationForm,
        request: &DisciplineRequest,
        result: Result<Vec<Discipline>, GatewayError>,
    ) -> DisciplineOutcome {
        if request.generation != self.generation {
            tracing::debug!(
                court = %request.court,
                generation = request.generation,
                current = self.generation,
                "Discarding stale discipline response"
            );
            return DisciplineOutcome::Stale;
        }

        match result {
            Ok(disciplines) => {
                let selected = form.code(ReservationField::Discipline);
                if !selected.is_empty() && !disciplines.iter().any(|d| d.cod_disciplina == selected)
                {
                    form.clear(ReservationField::Discipline);
                }
                self.disciplines = disciplines;
                DisciplineOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(court = %request.court, error = %e, "Could not load disciplines");
                self.disciplines.clear();
                DisciplineOutcome::Failed(
                    "Could not load the disciplines of the selected court".to_string(),
                )
            }
        }
    }

    /// Drop derived lists and invalidate outstanding discipline fetches.
    /// Reference data is kept.
    pub fn reset(&mut self) {
        self.filtered_courts.clear();
        self.disciplines.clear();
        self.no_courts = false;
        self.generation += 1;
    }

    // ---- private helpers ----

    fn refilter(&mut self, form: &mut ReservationForm) {
        let facility = form.code(ReservationField::Facility);
        self.filtered_courts = self.reference.courts_of(&facility);
        self.no_courts = self.filtered_courts.is_empty();
        if self.no_courts {
            tracing::debug!(facility = %facility, "Facility has no courts");
        }

        let court = form.code(ReservationField::Court);
        if !court.is_empty() && !self.filtered_courts.iter().any(|c| c.cod_cancha == court) {
            self.clear_court(form);
        }
    }

    fn clear_court(&mut self, form: &mut ReservationForm) {
        form.clear(ReservationField::Court);
        form.clear(ReservationField::Discipline);
        self.disciplines.clear();
        self.generation += 1;
    }

    fn request_disciplines(&mut self, court: Code) -> DisciplineRequest {
        self.generation += 1;
        self.disciplines.clear();
        DisciplineRequest {
            court,
            generation: self.generation,
        }
    }
}
