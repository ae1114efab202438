use crate::aggregate::aggregate;
use crate::errors::AppError;
use crate::interval::Interval;
use crate::models::{Bucket, BucketsQuery, DashboardView, SelectRequest};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.view().await;
    Html(render_index(&view))
}

pub async fn get_view(State(state): State<AppState>) -> Json<DashboardView> {
    Json(state.view().await)
}

pub async fn select_interval(
    State(state): State<AppState>,
    Json(payload): Json<SelectRequest>,
) -> Result<Json<DashboardView>, AppError> {
    let interval: Interval = payload.interval.parse()?;
    Ok(Json(state.select(interval).await))
}

pub async fn select_interval_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Redirect, AppError> {
    let interval: Interval = name.parse()?;
    state.select(interval).await;
    Ok(Redirect::to("/"))
}

/// Stateless variant: fetch and bucket without touching the dashboard.
pub async fn get_buckets(
    State(state): State<AppState>,
    Query(query): Query<BucketsQuery>,
) -> Result<Json<Vec<Bucket>>, AppError> {
    let interval = match query.interval.as_deref() {
        Some(name) => name.parse::<Interval>()?,
        None => Interval::default(),
    };
    let records = state.client.fetch_daily().await?;
    Ok(Json(aggregate(&records, interval)))
}

pub async fn health() -> &'static str {
    "ok"
}
