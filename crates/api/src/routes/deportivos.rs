//! Route definitions for the sports reservation resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{facilities, form_data, reservations};
use crate::state::AppState;

/// Sports routes mounted at `/deportivos`.
///
/// ```text
/// GET    /reservas                   -> reservations::list
/// POST   /reservas                   -> reservations::create
/// GET    /reservas/{codigo}          -> reservations::get_by_code
/// GET    /espacios                   -> facilities::list
/// POST   /espacios                   -> facilities::create
/// GET    /espacios/{codigo}          -> facilities::summary
/// GET    /datos-formulario           -> form_data::get
/// GET    /canchas/{cod_espacio}      -> form_data::courts_for_facility
/// GET    /disciplinas/{cod_cancha}   -> form_data::disciplines_for_court
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/reservas",
            get(reservations::list).post(reservations::create),
        )
        .route("/reservas/{codigo}", get(reservations::get_by_code))
        .route("/espacios", get(facilities::list).post(facilities::create))
        .route("/espacios/{codigo}", get(facilities::summary))
        .route("/datos-formulario", get(form_data::get))
        .route("/canchas/{cod_espacio}", get(form_data::courts_for_facility))
        .route(
            "/disciplinas/{cod_cancha}",
            get(form_data::disciplines_for_court),
        )
}
