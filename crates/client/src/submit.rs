//! Reservation submission.

use deportivos_core::error::CoreError;
use deportivos_core::fields::ReservationField;
use deportivos_core::reservation::{ensure_required, RequiredField};

use crate::error::GatewayError;
use crate::form::ReservationForm;
use crate::gateway::ReservationGateway;
use crate::model::ReservationRecord;

/// Shown when the backend gave no usable detail.
pub const GENERIC_FAILURE: &str = "Could not create the reservation";

/// Client, employee, court and discipline must all be selected.
pub fn check_required(form: &ReservationForm) -> Result<(), GatewayError> {
    ensure_required([
        (RequiredField::Client, !form.is_blank(ReservationField::Client)),
        (RequiredField::Employee, !form.is_blank(ReservationField::Employee)),
        (RequiredField::Court, !form.is_blank(ReservationField::Court)),
        (RequiredField::Discipline, !form.is_blank(ReservationField::Discipline)),
    ])
    .map_err(|e| match e {
        CoreError::Validation(detail) => GatewayError::Validation(detail),
        other => GatewayError::Validation(other.to_string()),
    })
}

/// Validate the form and create the reservation.
///
/// The gateway is not called when a required selection is missing.
pub async fn submit<G>(
    gateway: &G,
    form: &ReservationForm,
) -> Result<ReservationRecord, GatewayError>
where
    G: ReservationGateway + ?Sized,
{
    check_required(form)?;
    let payload = form.to_payload();
    let record = gateway.create_reservation(&payload).await?;
    let code = record.code().unwrap_or_default();
    tracing::info!(cod_reserva = %code, "Reservation created");
    Ok(record)
}

/// Success text naming the new reservation's code.
pub fn success_message(record: &ReservationRecord) -> String {
    match record.code() {
        Some(code) => format!("Reservation #{code} created successfully"),
        None => "Reservation created successfully".to_string(),
    }
}

/// User-facing text for a failed submission: the validation detail when
/// there is one, the generic message otherwise.
pub fn failure_message(err: &GatewayError) -> String {
    match err {
        GatewayError::Validation(detail) if !detail.is_empty() => detail.clone(),
        _ => GENERIC_FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn form() -> ReservationForm {
        ReservationForm::with_defaults(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    #[test]
    fn missing_selections_are_named() {
        let mut form = form();
        form.set(ReservationField::Client, "10");
        form.set(ReservationField::Court, "1");

        let err = check_required(&form).unwrap_err();
        assert_eq!(
            err,
            GatewayError::Validation(
                "Required fields missing: employee, discipline".into()
            )
        );
    }

    #[test]
    fn complete_selection_passes() {
        let mut form = form();
        for (field, value) in [
            (ReservationField::Client, "10"),
            (ReservationField::Employee, "20"),
            (ReservationField::Court, "1"),
            (ReservationField::Discipline, "2"),
        ] {
            form.set(field, value);
        }
        assert!(check_required(&form).is_ok());
    }

    #[test]
    fn failure_prefers_server_detail() {
        let err = GatewayError::Validation("Discipline 3 is not offered on court 2".into());
        assert_eq!(failure_message(&err), "Discipline 3 is not offered on court 2");
        assert_eq!(
            failure_message(&GatewayError::Transport("connection refused".into())),
            GENERIC_FAILURE
        );
        assert_eq!(failure_message(&GatewayError::Validation(String::new())), GENERIC_FAILURE);
    }

    #[test]
    fn success_names_code() {
        let record: ReservationRecord =
            serde_json::from_value(json!({"cod_reserva": 7})).unwrap();
        assert_eq!(success_message(&record), "Reservation #7 created successfully");
    }
}
