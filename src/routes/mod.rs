use axum::Router;

use crate::state::SharedState;

pub mod admin;
pub mod docs;
pub mod genre;
pub mod health;
pub mod leaderboard;
pub mod log;
pub mod session;
pub mod song;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(leaderboard::router())
        .merge(song::router())
        .merge(session::router())
        .merge(admin::router())
        .merge(genre::router())
        .merge(log::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
