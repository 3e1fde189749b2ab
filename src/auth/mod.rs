use crate::state::AppState;
use axum::Router;

mod dto;
pub mod extractor;
mod handlers;
pub mod jwt;
pub mod password;

pub fn router() -> Router<AppState> {
    handlers::router()
}
