use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};

use crate::storage::UserStore;

mod error;
mod handlers;
mod models;

pub use error::ApiError;
pub use models::{CreatedResponse, UserResponse};
use handlers::{
    create_user, delete_user, get_user, health, not_found, search_users, update_user,
};

#[derive(Clone)]
pub struct AppState<S: UserStore> {
    pub storage: S,
    pub started_at: std::time::SystemTime,
}

pub fn router<S: UserStore + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health::<S>))
        .route("/users", post(create_user::<S>))
        .route("/users/search", get(search_users::<S>))
        .route(
            "/users/:id",
            get(get_user::<S>)
                .put(update_user::<S>)
                .delete(delete_user::<S>),
        )
        .fallback(not_found)
        .with_state(state)
}

pub async fn serve<S: UserStore + Clone + Send + Sync + 'static>(
    addr: SocketAddr,
    storage: S,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    let state = AppState {
        storage,
        started_at: std::time::SystemTime::now(),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("🌐 REST listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 REST shutdown requested");
        })
        .await?;
    log::info!("👋 REST server exited");
    Ok(())
}
