//! Handlers for the collection resources: Project, Skill, Social,
//! Testimonial. Reads are public; create/update/delete require the admin
//! gate.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::{ApiError, SharedState};
use crate::auth::AdminClaims;
use crate::store::models::{
    Project, ProjectPayload, Skill, SkillPayload, Social, SocialPayload, Testimonial,
    TestimonialPayload,
};

fn deleted(kind: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": format!("{kind} deleted successfully")}))
}

// ── Projects ──────────────────────────────────────────────────────────

pub async fn list_projects(State(state): State<SharedState>) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.db()?.call(|db| db.list_projects()).await?;
    Ok(Json(projects))
}

pub async fn create_project(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Json(payload): Json<ProjectPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let project = state.db()?.call(move |db| db.create_project(payload)).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update_project(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Path(id): Path<i64>,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<Project>, ApiError> {
    let project = state
        .db()?
        .call(move |db| db.update_project(id, payload))
        .await?;
    Ok(Json(project))
}

pub async fn delete_project(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db()?.call(move |db| db.delete_project(id)).await?;
    Ok(deleted("Project"))
}

// ── Skills ────────────────────────────────────────────────────────────

pub async fn list_skills(State(state): State<SharedState>) -> Result<Json<Vec<Skill>>, ApiError> {
    let skills = state.db()?.call(|db| db.list_skills()).await?;
    Ok(Json(skills))
}

pub async fn list_skills_by_category(
    State(state): State<SharedState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Skill>>, ApiError> {
    let skills = state
        .db()?
        .call(move |db| db.list_skills_by_category(&category))
        .await?;
    Ok(Json(skills))
}

pub async fn create_skill(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Json(payload): Json<SkillPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let skill = state.db()?.call(move |db| db.create_skill(payload)).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

pub async fn update_skill(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Path(id): Path<i64>,
    Json(payload): Json<SkillPayload>,
) -> Result<Json<Skill>, ApiError> {
    let skill = state
        .db()?
        .call(move |db| db.update_skill(id, payload))
        .await?;
    Ok(Json(skill))
}

pub async fn delete_skill(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db()?.call(move |db| db.delete_skill(id)).await?;
    Ok(deleted("Skill"))
}

// ── Socials ───────────────────────────────────────────────────────────

pub async fn list_socials(State(state): State<SharedState>) -> Result<Json<Vec<Social>>, ApiError> {
    let socials = state.db()?.call(|db| db.list_active_socials()).await?;
    Ok(Json(socials))
}

pub async fn create_social(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Json(payload): Json<SocialPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let social = state.db()?.call(move |db| db.create_social(payload)).await?;
    Ok((StatusCode::CREATED, Json(social)))
}

pub async fn update_social(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Path(id): Path<i64>,
    Json(payload): Json<SocialPayload>,
) -> Result<Json<Social>, ApiError> {
    let social = state
        .db()?
        .call(move |db| db.update_social(id, payload))
        .await?;
    Ok(Json(social))
}

pub async fn delete_social(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db()?.call(move |db| db.delete_social(id)).await?;
    Ok(deleted("Social"))
}

// ── Testimonials ──────────────────────────────────────────────────────

pub async fn list_testimonials(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let testimonials = state.db()?.call(|db| db.list_testimonials()).await?;
    Ok(Json(testimonials))
}

pub async fn list_featured_testimonials(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let testimonials = state
        .db()?
        .call(|db| db.list_featured_testimonials())
        .await?;
    Ok(Json(testimonials))
}

pub async fn create_testimonial(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Json(payload): Json<TestimonialPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let testimonial = state
        .db()?
        .call(move |db| db.create_testimonial(payload))
        .await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

pub async fn update_testimonial(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Path(id): Path<i64>,
    Json(payload): Json<TestimonialPayload>,
) -> Result<Json<Testimonial>, ApiError> {
    let testimonial = state
        .db()?
        .call(move |db| db.update_testimonial(id, payload))
        .await?;
    Ok(Json(testimonial))
}

pub async fn delete_testimonial(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db()?.call(move |db| db.delete_testimonial(id)).await?;
    Ok(deleted("Testimonial"))
}
