pub mod clients;
pub mod deportivos;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /deportivos/reservas                       list, create
/// /deportivos/reservas/{codigo}              lookup by code (404 when absent)
/// /deportivos/espacios                       list, create
/// /deportivos/espacios/{codigo}              facility summary
/// /deportivos/datos-formulario               reservation form reference data
/// /deportivos/canchas/{cod_espacio}          courts of a facility
/// /deportivos/disciplinas/{cod_cancha}       disciplines valid for a court
///
/// /clientes                                  list, create
/// /clientes/{ci}                             update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/deportivos", deportivos::router())
        .nest("/clientes", clients::router())
}
