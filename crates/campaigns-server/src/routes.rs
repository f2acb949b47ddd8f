use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use campaigns_core::analysis::{analyze, AnalysisQuery, CrossTab};
use campaigns_core::chart::BarChart;
use campaigns_core::classify::resolve_draft;
use campaigns_core::schema::{Campaign, CampaignPatch, Field};
use campaigns_core::validate::Duration;
use campaigns_core::CampaignError;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CampaignsResponse {
    pub campaigns: Vec<Campaign>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct AnalysisParams {
    pub dimensions: Option<String>,
    pub fields: Option<String>,
    pub duration: Option<String>,
}

impl AnalysisParams {
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = AnalysisParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "dimensions" => &mut params.dimensions,
                "fields" => &mut params.fields,
                "duration" => &mut params.duration,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub x: Field,
    pub y: Field,
    pub duration: Duration,
    pub x_axis: Vec<String>,
    pub table: IndexMap<String, IndexMap<String, u64>>,
    pub graph_data: String,
    pub campaigns: Vec<Map<String, Value>>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/campaigns", get(list_campaigns).post(create_campaign))
        .route("/api/campaigns/analysis", get(campaign_analysis))
        .route(
            "/api/campaigns/{id}",
            axum::routing::put(update_campaign).delete(delete_campaign),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn invalid_body(rejection: JsonRejection) -> CampaignError {
    CampaignError::InvalidBody {
        reason: rejection.body_text(),
    }
}

fn parse_position(path: Result<Path<usize>, PathRejection>) -> Result<usize, CampaignError> {
    path.map(|Path(id)| id).map_err(|_| CampaignError::NotFound)
}

async fn snapshot(state: &AppState) -> Vec<Campaign> {
    state.store.lock().await.list().to_vec()
}

async fn list_campaigns(State(state): State<AppState>) -> Json<CampaignsResponse> {
    Json(CampaignsResponse {
        campaigns: snapshot(&state).await,
    })
}

async fn create_campaign(
    State(state): State<AppState>,
    body: Result<Json<CampaignPatch>, JsonRejection>,
) -> Result<(StatusCode, Json<CampaignsResponse>), ApiError> {
    let Json(patch) = body.map_err(invalid_body)?;

    // Classify before locking so the store is never held across network I/O.
    let draft = resolve_draft(patch, state.classifier.as_ref(), &state.classifier_target_url).await?;

    let mut store = state.store.lock().await;
    let campaign = store.insert(draft)?;
    tracing::info!(uri = %campaign.uri, "campaign created");

    Ok((
        StatusCode::CREATED,
        Json(CampaignsResponse {
            campaigns: store.list().to_vec(),
        }),
    ))
}

async fn update_campaign(
    State(state): State<AppState>,
    path: Result<Path<usize>, PathRejection>,
    body: Result<Json<CampaignPatch>, JsonRejection>,
) -> Result<Json<CampaignsResponse>, ApiError> {
    let position = parse_position(path)?;
    let mut store = state.store.lock().await;

    // An unknown campaign wins over a bad body.
    store.get(position)?;

    let Json(patch) = body.map_err(invalid_body)?;
    if patch.is_empty() {
        return Err(CampaignError::InvalidBody {
            reason: "no campaign fields supplied".to_string(),
        }
        .into());
    }

    let campaign = store.update(position, patch)?;
    tracing::info!(position, uri = %campaign.uri, "campaign updated");

    Ok(Json(CampaignsResponse {
        campaigns: store.list().to_vec(),
    }))
}

async fn delete_campaign(
    State(state): State<AppState>,
    path: Result<Path<usize>, PathRejection>,
) -> Result<Json<CampaignsResponse>, ApiError> {
    let position = parse_position(path)?;
    let mut store = state.store.lock().await;

    let removed = store.delete(position)?;
    tracing::info!(position, uri = %removed.uri, "campaign deleted");

    Ok(Json(CampaignsResponse {
        campaigns: store.list().to_vec(),
    }))
}

async fn campaign_analysis(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Query(pairs) = query.map_err(|rejection| CampaignError::InvalidQueryParameter {
        param: "query",
        reason: rejection.body_text(),
    })?;
    let params = AnalysisParams::from_pairs(pairs);

    let campaigns = snapshot(&state).await;
    let query = AnalysisQuery {
        dimensions: params.dimensions,
        fields: params.fields,
        duration: params.duration,
    };

    let analysis = analyze(&campaigns, &query)?;
    let chart = BarChart::from_cross_tab(&analysis.cross_tab, analysis.dimensions);
    let graph_data = state.renderer.render(&chart)?;

    let CrossTab { x_axis, table } = analysis.cross_tab;
    Ok(Json(AnalysisResponse {
        x: analysis.dimensions.x,
        y: analysis.dimensions.y,
        duration: analysis.duration,
        x_axis,
        table,
        graph_data,
        campaigns: analysis.campaigns,
    }))
}
