//! Wire types returned by the reservation backend.
//!
//! Identifiers are carried as [`Code`] so that form fields, selections and
//! comparisons all use the same text representation regardless of whether
//! the backend sent a number or a string.

use chrono::NaiveDate;
use deportivos_core::types::Code;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A persistence-shaped payload, keyed by column name.
pub type Payload = Map<String, Value>;

/// A selectable client or employee.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PersonOption {
    pub id: Code,
    pub nombre: String,
    #[serde(default)]
    pub apellido_p: Option<String>,
}

/// A sports facility.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Facility {
    pub cod_espacio: Code,
    pub nombre: String,
    #[serde(default)]
    pub ubicacion: Option<String>,
    #[serde(default)]
    pub capacidad: Option<i64>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
}

/// Aggregate figures for one facility.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FacilitySummary {
    pub cod_espacio: Code,
    pub nombre: String,
    pub nro_canchas: i64,
    pub nro_reservas: i64,
    pub total_pago: Decimal,
}

/// A court and the facility it belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Court {
    pub cod_cancha: Code,
    pub cod_espacio: Code,
    #[serde(default)]
    pub tipo_superficie: Option<String>,
    #[serde(default)]
    pub techado: Option<String>,
}

/// A discipline offered on a court.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Discipline {
    pub cod_disciplina: Code,
    pub nombre: String,
}

/// Everything loaded once when a form session starts.
///
/// Read-only for the lifetime of the session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReferenceData {
    #[serde(rename = "clientes", default)]
    pub clients: Vec<PersonOption>,
    #[serde(rename = "empleados", default)]
    pub employees: Vec<PersonOption>,
    #[serde(rename = "espacios", default)]
    pub facilities: Vec<Facility>,
    #[serde(rename = "canchas", default)]
    pub courts: Vec<Court>,
    #[serde(rename = "disciplinas", default)]
    pub disciplines: Vec<Discipline>,
}

impl ReferenceData {
    pub fn facility(&self, code: &Code) -> Option<&Facility> {
        self.facilities.iter().find(|f| &f.cod_espacio == code)
    }

    /// Courts whose facility reference equals `facility`, in catalogue order.
    pub fn courts_of(&self, facility: &Code) -> Vec<Court> {
        self.courts
            .iter()
            .filter(|c| &c.cod_espacio == facility)
            .cloned()
            .collect()
    }
}

/// A reservation as returned by the backend.
///
/// Identifiers are [`Code`]s. Every field is optional: creation returns
/// the bare row, while lookups and listings add the display columns
/// (`cliente_nombre`, `espacio_nombre`, ...) from joined reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ReservationRecord {
    pub cod_reserva: Option<Code>,
    pub ci_cliente: Option<Code>,
    pub ci_empleado: Option<Code>,
    pub cod_espacio: Option<Code>,
    pub cod_cancha: Option<Code>,
    pub cod_disciplina: Option<Code>,
    pub fecha: Option<NaiveDate>,
    pub hora_inicio: Option<String>,
    pub hora_fin: Option<String>,
    pub monto_total: Option<Decimal>,
    pub estado_reserva: Option<String>,
    pub cliente_nombre: Option<String>,
    pub cliente_apellido: Option<String>,
    pub espacio_nombre: Option<String>,
    pub disciplina_nombre: Option<String>,
}

impl ReservationRecord {
    /// The record keyed by persistence column, for the field mapping in
    /// `deportivos_core::fields`. Absent values are `null`.
    pub fn fields(&self) -> Payload {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Payload::new(),
        }
    }

    /// The reservation's own code.
    pub fn code(&self) -> Option<Code> {
        self.cod_reserva.clone()
    }

    /// `"<nombre> <apellido>"`, or just the name when there is no surname.
    pub fn client_full_name(&self) -> Option<String> {
        let name = self.cliente_nombre.as_deref()?;
        Some(match self.cliente_apellido.as_deref() {
            Some(surname) if !surname.is_empty() => format!("{name} {surname}"),
            _ => name.to_string(),
        })
    }

    pub fn facility_name(&self) -> Option<String> {
        self.espacio_nombre.clone()
    }
}

/// `{ "encontrada": bool, "reserva": {...} }` from the code lookup.
#[derive(Debug, Deserialize)]
pub(crate) struct LookupEnvelope {
    #[serde(default)]
    pub encontrada: bool,
    #[serde(default)]
    pub reserva: Option<ReservationRecord>,
}

/// `{ "mensaje": ..., "reserva": {...} }` from reservation creation.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedEnvelope {
    pub reserva: ReservationRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reference_data_accepts_numeric_and_text_codes() {
        let data: ReferenceData = serde_json::from_value(json!({
            "clientes": [{"id": 10, "nombre": "Ana", "apellido_p": "Rojas"}],
            "empleados": [],
            "espacios": [{"cod_espacio": "1", "nombre": "Coliseo Central"}],
            "canchas": [
                {"cod_cancha": 1, "cod_espacio": 1, "techado": "SI"},
                {"cod_cancha": 2, "cod_espacio": "2", "techado": "NO"}
            ],
            "disciplinas": [{"cod_disciplina": 3, "nombre": "Futbol"}]
        }))
        .unwrap();

        assert_eq!(data.clients[0].id, "10");
        let courts = data.courts_of(&Code::from("1"));
        assert_eq!(courts.len(), 1);
        assert_eq!(courts[0].cod_cancha, "1");
        assert_eq!(
            data.facility(&Code::from(1)).map(|f| f.nombre.as_str()),
            Some("Coliseo Central")
        );
    }

    #[test]
    fn record_exposes_display_columns() {
        let record: ReservationRecord = serde_json::from_value(json!({
            "cod_reserva": 5,
            "cliente_nombre": "Ana",
            "cliente_apellido": "Rojas",
            "espacio_nombre": "Coliseo Central",
        }))
        .unwrap();

        assert_eq!(record.code(), Some(Code::from("5")));
        assert_eq!(record.ci_cliente, None);
        assert_eq!(record.client_full_name().as_deref(), Some("Ana Rojas"));
        assert_eq!(record.facility_name().as_deref(), Some("Coliseo Central"));
    }

    #[test]
    fn full_name_without_surname() {
        let record: ReservationRecord =
            serde_json::from_value(json!({"cliente_nombre": "Ana", "cliente_apellido": null}))
                .unwrap();
        assert_eq!(record.client_full_name().as_deref(), Some("Ana"));
    }

    #[test]
    fn record_is_typed_and_maps_back_to_columns() {
        let record: ReservationRecord = serde_json::from_value(json!({
            "cod_reserva": 5,
            "ci_cliente": "10",
            "fecha": "2025-03-20",
            "monto_total": "150.50",
            "hora_inicio": "18:00:00",
        }))
        .unwrap();

        assert_eq!(record.ci_cliente, Some(Code::from(10)));
        assert_eq!(record.fecha, NaiveDate::from_ymd_opt(2025, 3, 20));
        assert_eq!(record.monto_total.map(|m| m.to_string()).as_deref(), Some("150.50"));

        let fields = record.fields();
        assert_eq!(fields["cod_reserva"], "5");
        assert_eq!(fields["fecha"], "2025-03-20");
        assert_eq!(fields["monto_total"], "150.50");
        assert_eq!(fields["cod_cancha"], Value::Null);
    }
}
