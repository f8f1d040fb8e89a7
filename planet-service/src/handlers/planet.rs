use crate::dtos::PlanetRequest;
use crate::models::Planet;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

pub async fn get_planet(
    State(state): State<AppState>,
    Json(req): Json<PlanetRequest>,
) -> Result<Json<Planet>, AppError> {
    let planet = state.lookup.find(req.id).await?;

    Ok(Json(planet))
}
