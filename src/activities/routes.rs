use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    response::Redirect,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    service::{AppPath, AppQuery, AppResult, Message},
    state::APIState,
};

use super::{Activity, ActivityStore, Catalog};

pub fn routes(state: APIState) -> Router<APIState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/activities", get(list_activities))
        .route("/activities/{name}", get(get_activity))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", delete(unregister))
        .with_state(state)
}

#[derive(Debug, Deserialize, Validate)]
pub struct EmailQuery {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub activities: usize,
}

async fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

async fn health(State(store): State<ActivityStore>) -> Json<Health> {
    Json(Health {
        status: "ok".into(),
        activities: store.len().await,
    })
}

async fn list_activities(State(store): State<ActivityStore>) -> Json<Catalog> {
    Json(store.get_all().await)
}

async fn get_activity(
    State(store): State<ActivityStore>,
    AppPath(name): AppPath<String>,
) -> AppResult<Activity> {
    store.get(&name).await.map(Json)
}

#[tracing::instrument(skip(store, client, query), fields(client = %client, email = %query.email))]
async fn signup(
    State(store): State<ActivityStore>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    AppPath(name): AppPath<String>,
    AppQuery(query): AppQuery<EmailQuery>,
) -> AppResult<Message> {
    // Unknown activities are reported before a malformed email.
    store.get(&name).await?;
    query.validate()?;
    store.add_participant(&name, &query.email).await?;
    Message::response(format!("Signed up {} for {}", query.email, name))
}

#[tracing::instrument(skip(store, client, query), fields(client = %client, email = %query.email))]
async fn unregister(
    State(store): State<ActivityStore>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    AppPath(name): AppPath<String>,
    AppQuery(query): AppQuery<EmailQuery>,
) -> AppResult<Message> {
    store.remove_participant(&name, &query.email).await?;
    Message::response(format!("Unregistered {} from {}", query.email, name))
}
