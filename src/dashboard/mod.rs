use crate::state::AppState;
use axum::Router;

mod dto;
mod handlers;

pub fn router() -> Router<AppState> {
    handlers::router()
}
