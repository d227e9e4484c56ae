//! Handlers for the singleton resources: About, Hero, ContactInfo.
//!
//! GETs are public and lazily create the default document. PUTs require
//! the admin gate and merge partial payloads.

use axum::{Json, extract::State};

use super::{ApiError, SharedState};
use crate::auth::AdminClaims;
use crate::store::models::{
    About, AboutPayload, ContactInfo, ContactInfoPayload, Hero, HeroPayload,
};

pub async fn get_about(State(state): State<SharedState>) -> Result<Json<About>, ApiError> {
    let about = state.db()?.call(|db| db.get_or_create_about()).await?;
    Ok(Json(about))
}

pub async fn update_about(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Json(payload): Json<AboutPayload>,
) -> Result<Json<About>, ApiError> {
    let about = state.db()?.call(move |db| db.upsert_about(payload)).await?;
    Ok(Json(about))
}

pub async fn get_hero(State(state): State<SharedState>) -> Result<Json<Hero>, ApiError> {
    let hero = state.db()?.call(|db| db.get_or_create_hero()).await?;
    Ok(Json(hero))
}

pub async fn update_hero(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Json(payload): Json<HeroPayload>,
) -> Result<Json<Hero>, ApiError> {
    let hero = state.db()?.call(move |db| db.upsert_hero(payload)).await?;
    Ok(Json(hero))
}

pub async fn get_contact_info(
    State(state): State<SharedState>,
) -> Result<Json<ContactInfo>, ApiError> {
    let info = state
        .db()?
        .call(|db| db.get_or_create_contact_info())
        .await?;
    Ok(Json(info))
}

pub async fn update_contact_info(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Json(payload): Json<ContactInfoPayload>,
) -> Result<Json<ContactInfo>, ApiError> {
    let info = state
        .db()?
        .call(move |db| db.upsert_contact_info(payload))
        .await?;
    Ok(Json(info))
}
