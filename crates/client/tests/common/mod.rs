#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use deportivos_client::model::{
    Court, Discipline, Facility, FacilitySummary, Payload, PersonOption, ReferenceData,
    ReservationRecord,
};
use deportivos_client::session::{FormSession, FormView};
use deportivos_client::{GatewayError, ReservationGateway};
use deportivos_core::types::Code;
use serde_json::json;

/// Fixed calendar day for session tests.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn person(id: &str, nombre: &str, apellido: &str) -> PersonOption {
    PersonOption {
        id: id.into(),
        nombre: nombre.into(),
        apellido_p: Some(apellido.into()),
    }
}

pub fn facility(code: &str, nombre: &str) -> Facility {
    Facility {
        cod_espacio: code.into(),
        nombre: nombre.into(),
        ubicacion: None,
        capacidad: None,
        estado: Some("ACTIVO".into()),
        descripcion: None,
    }
}

pub fn court(code: &str, facility: &str) -> Court {
    Court {
        cod_cancha: code.into(),
        cod_espacio: facility.into(),
        tipo_superficie: Some("Parquet".into()),
        techado: Some("SI".into()),
    }
}

pub fn discipline(code: &str, nombre: &str) -> Discipline {
    Discipline {
        cod_disciplina: code.into(),
        nombre: nombre.into(),
    }
}

/// Two facilities: `1` with courts `1` and `2`, `2` with court `3`.
pub fn reference_data() -> ReferenceData {
    ReferenceData {
        clients: vec![person("10", "Ana", "Rojas"), person("11", "Luis", "Mendez")],
        employees: vec![person("20", "Carla", "Quispe")],
        facilities: vec![facility("1", "Coliseo Central"), facility("2", "Complejo Norte")],
        courts: vec![court("1", "1"), court("2", "1"), court("3", "2")],
        disciplines: vec![
            discipline("1", "Basquet"),
            discipline("2", "Voleibol"),
            discipline("3", "Futbol"),
        ],
    }
}

/// Reservation 5 as the backend's lookup returns it.
pub fn reservation_five() -> ReservationRecord {
    serde_json::from_value(json!({
        "cod_reserva": 5,
        "ci_cliente": 10,
        "ci_empleado": 20,
        "cod_espacio": 1,
        "cod_cancha": 1,
        "cod_disciplina": 2,
        "fecha": "2025-03-20",
        "hora_inicio": "18:00:00",
        "hora_fin": "20:00:00",
        "monto_total": "150.50",
        "estado_reserva": "CONFIRMADA",
        "cliente_nombre": "Ana",
        "cliente_apellido": "Rojas",
        "espacio_nombre": "Coliseo Central",
        "disciplina_nombre": "Voleibol",
    }))
    .unwrap()
}

// ---------------------------------------------------------------------------
// Fake gateway
// ---------------------------------------------------------------------------

/// In-memory gateway recording every call it receives.
pub struct FakeGateway {
    reference: Result<ReferenceData, GatewayError>,
    reservations: HashMap<String, ReservationRecord>,
    disciplines: HashMap<String, Vec<Discipline>>,
    discipline_delays: HashMap<String, Duration>,
    lookup_delay: Duration,
    create_result: Mutex<Result<ReservationRecord, GatewayError>>,
    pub lookups: Mutex<Vec<String>>,
    pub discipline_calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<Payload>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        let mut disciplines = HashMap::new();
        disciplines.insert(
            "1".to_string(),
            vec![discipline("1", "Basquet"), discipline("2", "Voleibol")],
        );
        disciplines.insert("2".to_string(), vec![discipline("1", "Basquet")]);
        disciplines.insert("3".to_string(), vec![discipline("3", "Futbol")]);

        let mut reservations = HashMap::new();
        reservations.insert("5".to_string(), reservation_five());

        Self {
            reference: Ok(reference_data()),
            reservations,
            disciplines,
            discipline_delays: HashMap::new(),
            lookup_delay: Duration::ZERO,
            create_result: Mutex::new(Ok(
                serde_json::from_value(json!({"cod_reserva": 7})).unwrap()
            )),
            lookups: Mutex::new(Vec::new()),
            discipline_calls: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reference(mut self, reference: Result<ReferenceData, GatewayError>) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_discipline_delay(mut self, court: &str, delay: Duration) -> Self {
        self.discipline_delays.insert(court.to_string(), delay);
        self
    }

    pub fn with_lookup_delay(mut self, delay: Duration) -> Self {
        self.lookup_delay = delay;
        self
    }

    pub fn with_create_result(self, result: Result<ReservationRecord, GatewayError>) -> Self {
        *self.create_result.lock().unwrap() = result;
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<Payload> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReservationGateway for FakeGateway {
    async fn fetch_facility(&self, code: &Code) -> Result<FacilitySummary, GatewayError> {
        let facility = self
            .reference
            .as_ref()
            .ok()
            .and_then(|r| r.facility(code).cloned())
            .ok_or(GatewayError::NotFound)?;
        Ok(FacilitySummary {
            cod_espacio: facility.cod_espacio,
            nombre: facility.nombre,
            nro_canchas: 0,
            nro_reservas: 0,
            total_pago: Default::default(),
        })
    }

    async fn fetch_form_reference_data(&self) -> Result<ReferenceData, GatewayError> {
        self.reference.clone()
    }

    async fn fetch_disciplines_for_court(
        &self,
        court: &Code,
    ) -> Result<Vec<Discipline>, GatewayError> {
        self.discipline_calls
            .lock()
            .unwrap()
            .push(court.as_str().to_string());
        if let Some(delay) = self.discipline_delays.get(court.as_str()) {
            tokio::time::sleep(*delay).await;
        }
        Ok(self
            .disciplines
            .get(court.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_reservation_by_code(
        &self,
        code: &Code,
    ) -> Result<Option<ReservationRecord>, GatewayError> {
        self.lookups.lock().unwrap().push(code.as_str().to_string());
        if !self.lookup_delay.is_zero() {
            tokio::time::sleep(self.lookup_delay).await;
        }
        Ok(self.reservations.get(code.as_str()).cloned())
    }

    async fn create_reservation(
        &self,
        payload: &Payload,
    ) -> Result<ReservationRecord, GatewayError> {
        self.created.lock().unwrap().push(payload.clone());
        self.create_result.lock().unwrap().clone()
    }

    async fn list_reservations(&self) -> Result<Vec<ReservationRecord>, GatewayError> {
        Ok(self.reservations.values().cloned().collect())
    }

    async fn list_facilities(&self) -> Result<Vec<Facility>, GatewayError> {
        Ok(self
            .reference
            .as_ref()
            .map(|r| r.facilities.clone())
            .unwrap_or_default())
    }

    async fn create_facility(&self, _payload: &Payload) -> Result<Facility, GatewayError> {
        Err(GatewayError::Transport("not supported by the fake".into()))
    }

    async fn fetch_courts_for_facility(&self, facility: &Code) -> Vec<Court> {
        self.reference
            .as_ref()
            .map(|r| r.courts_of(facility))
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Session helpers
// ---------------------------------------------------------------------------

/// Wait (in virtual time) until the session publishes a view matching `pred`.
pub async fn wait_for_view<F>(session: &FormSession, pred: F) -> FormView
where
    F: FnMut(&FormView) -> bool,
{
    let mut rx = session.subscribe();
    let view = tokio::time::timeout(Duration::from_secs(30), rx.wait_for(pred))
        .await
        .expect("view condition not reached")
        .expect("session stopped");
    view.clone()
}
