//! Routes under `/api/users`.

mod me;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/users";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/me", get().to(me::process))
}
