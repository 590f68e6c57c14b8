//! Integration tests for the repository layer.
//!
//! Exercises every repository against a real database seeded from the
//! `fixtures/` scripts:
//! - Client create/update/delete across `persona` and `cliente`
//! - Court and discipline reference lookups
//! - Facility summary aggregates
//! - Reservation insert with and without an explicit code

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime};
use deportivos_core::reservation::ReservationStatus;
use deportivos_db::models::client::{CreateClient, UpdateClient};
use deportivos_db::models::facility::CreateFacility;
use deportivos_db::models::reservation::NewReservation;
use deportivos_db::repositories::{
    ClientRepo, CourtRepo, DisciplineRepo, EmployeeRepo, FacilityRepo, ReservationRepo,
};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_client(ci: i64, nombre: &str) -> CreateClient {
    CreateClient {
        ci,
        nombre: nombre.to_string(),
        apellido: Some("Vargas".to_string()),
        telefono: None,
        fechanaci: None,
        sexo: Some("F".to_string()),
        nacionalidad: None,
        categoria: Some("NUEVO".to_string()),
        email: Some(format!("{nombre}@example.com").to_lowercase()),
    }
}

fn new_reservation(cod_reserva: Option<i64>) -> NewReservation {
    NewReservation {
        cod_reserva,
        ci_cliente: 10,
        ci_empleado: 20,
        cod_cancha: 2,
        cod_disciplina: 1,
        fecha: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        hora_inicio: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        hora_fin: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        monto_total: Decimal::new(12000, 2),
        estado_reserva: ReservationStatus::Confirmada,
    }
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn list_clients_ordered_by_ci(pool: PgPool) {
    let clients = ClientRepo::list(&pool).await.unwrap();
    let cis: Vec<i64> = clients.iter().map(|c| c.ci).collect();
    assert_eq!(cis, vec![10, 11]);
    assert_eq!(clients[0].email.as_deref(), Some("ana@example.com"));
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn create_client_writes_person_and_client(pool: PgPool) {
    let created = ClientRepo::create(&pool, &new_client(30, "Maria")).await.unwrap();
    assert_eq!(created.ci, 30);
    assert_eq!(created.categoria.as_deref(), Some("NUEVO"));
    assert_eq!(created.fechanaci, None);

    let (persons,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM persona WHERE ci = 30")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(persons, 1);
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn duplicate_client_leaves_no_partial_rows(pool: PgPool) {
    let err = ClientRepo::create(&pool, &new_client(10, "Dup")).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));

    let client = ClientRepo::find_by_ci(&pool, 10).await.unwrap().unwrap();
    assert_eq!(client.nombre, "Ana");
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn update_client_changes_both_relations(pool: PgPool) {
    let input = UpdateClient {
        nombre: "Ana Maria".to_string(),
        apellido: Some("Rojas".to_string()),
        telefono: Some("71111111".to_string()),
        fechanaci: NaiveDate::from_ymd_opt(1995, 4, 2),
        sexo: Some("F".to_string()),
        nacionalidad: Some("Boliviana".to_string()),
        categoria: Some("VIP".to_string()),
        email: Some("ana.maria@example.com".to_string()),
    };
    let updated = ClientRepo::update(&pool, 10, &input).await.unwrap().unwrap();
    assert_eq!(updated.nombre, "Ana Maria");
    assert_eq!(updated.categoria.as_deref(), Some("VIP"));
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn update_employee_as_client_returns_none(pool: PgPool) {
    let input = UpdateClient {
        nombre: "Carla".to_string(),
        apellido: None,
        telefono: None,
        fechanaci: None,
        sexo: None,
        nacionalidad: None,
        categoria: None,
        email: None,
    };
    assert!(ClientRepo::update(&pool, 20, &input).await.unwrap().is_none());
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn delete_client_removes_client_then_person(pool: PgPool) {
    ClientRepo::create(&pool, &new_client(31, "Temp")).await.unwrap();
    assert!(ClientRepo::delete(&pool, 31).await.unwrap());

    assert!(ClientRepo::find_by_ci(&pool, 31).await.unwrap().is_none());
    let (persons,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM persona WHERE ci = 31")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(persons, 0);
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn delete_missing_client_returns_false(pool: PgPool) {
    assert!(!ClientRepo::delete(&pool, 999).await.unwrap());
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn person_options_split_clients_and_employees(pool: PgPool) {
    let clients = ClientRepo::list_options(&pool).await.unwrap();
    let employees = EmployeeRepo::list_options(&pool).await.unwrap();
    assert_eq!(clients.len(), 2);
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, 20);
    assert_eq!(employees[0].apellido_p.as_deref(), Some("Quispe"));
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn courts_filter_by_facility(pool: PgPool) {
    let all = CourtRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 3);

    let central = CourtRepo::list_by_facility(&pool, 1).await.unwrap();
    let codes: Vec<i64> = central.iter().map(|c| c.cod_cancha).collect();
    assert_eq!(codes, vec![1, 2]);

    assert!(CourtRepo::list_by_facility(&pool, 3).await.unwrap().is_empty());
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn disciplines_resolve_per_court(pool: PgPool) {
    let court_one = DisciplineRepo::list_by_court(&pool, 1).await.unwrap();
    let names: Vec<&str> = court_one.iter().map(|d| d.nombre.as_str()).collect();
    assert_eq!(names, vec!["Basquet", "Voleibol"]);

    assert!(DisciplineRepo::is_valid_for_court(&pool, 3, 3).await.unwrap());
    assert!(!DisciplineRepo::is_valid_for_court(&pool, 3, 1).await.unwrap());
    assert_eq!(DisciplineRepo::list(&pool).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn create_and_list_facilities(pool: PgPool) {
    let input = CreateFacility {
        cod_espacio: 9,
        nombre: "Alberca Municipal".to_string(),
        ubicacion: None,
        capacidad: Some(80),
        estado: None,
        descripcion: None,
    };
    let created = FacilityRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.estado.as_deref(), Some("ACTIVO"));

    let all = FacilityRepo::list(&pool).await.unwrap();
    assert!(all.iter().any(|f| f.cod_espacio == 9));
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn facility_summary_aggregates_courts_and_payments(pool: PgPool) {
    let summary = FacilityRepo::summary(&pool, 1).await.unwrap().unwrap();
    assert_eq!(summary.nro_canchas, 2);
    assert_eq!(summary.nro_reservas, 1);
    assert_eq!(summary.total_pago, Decimal::new(15050, 2));

    let empty = FacilityRepo::summary(&pool, 3).await.unwrap().unwrap();
    assert_eq!(empty.nro_canchas, 0);
    assert_eq!(empty.total_pago, Decimal::ZERO);

    assert!(FacilityRepo::summary(&pool, 404).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Reservations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn find_reservation_detail_joins_names(pool: PgPool) {
    let detail = ReservationRepo::find_detail(&pool, 5).await.unwrap().unwrap();
    assert_eq!(detail.ci_cliente, 10);
    assert_eq!(detail.cliente_nombre, "Ana");
    assert_eq!(detail.cod_espacio, 1);
    assert_eq!(detail.espacio_nombre, "Coliseo Central");
    assert_eq!(detail.disciplina_nombre, "Voleibol");

    assert!(ReservationRepo::find_detail(&pool, 999).await.unwrap().is_none());
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn reservation_exists_by_code(pool: PgPool) {
    assert!(ReservationRepo::exists(&pool, 5).await.unwrap());
    assert!(!ReservationRepo::exists(&pool, 999).await.unwrap());
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn create_reservation_assigns_next_code(pool: PgPool) {
    let created = ReservationRepo::create(&pool, &new_reservation(None)).await.unwrap();
    assert_eq!(created.cod_reserva, 7);
    assert_eq!(created.estado_reserva, "CONFIRMADA");
    assert_eq!(created.monto_total, Decimal::new(12000, 2));
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn create_reservation_with_explicit_code(pool: PgPool) {
    let created = ReservationRepo::create(&pool, &new_reservation(Some(42))).await.unwrap();
    assert_eq!(created.cod_reserva, 42);

    let listed = ReservationRepo::list_detail(&pool).await.unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].cod_reserva, 42);
}

#[sqlx::test(migrations = false, fixtures(path = "fixtures", scripts("schema", "seed")))]
async fn reservation_with_invalid_discipline_is_rejected(pool: PgPool) {
    let mut input = new_reservation(None);
    input.cod_disciplina = 3;
    let err = ReservationRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23503"));
}
