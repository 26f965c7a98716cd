use std::sync::Arc;

use axum::{
    Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::Json,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::{
    TravelGuideError,
    currency::{self, Conversion, Currency},
    models::{
        Attraction, AttractionCategory, CreateTripPlan, Destination, Hotel, Phrase, TransportKind,
        Transportation, TripPlan,
    },
    planner::TripPlanner,
    store::TravelStore,
};

mod error;

pub use error::{ApiError, ErrorBody};

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TravelStore>,
    pub planner: Arc<TripPlanner>,
}

impl AppState {
    pub fn new(store: Arc<dyn TravelStore>, planner: TripPlanner) -> Self {
        Self {
            store,
            planner: Arc::new(planner),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct HotelQuery {
    /// Highest nightly price to include; an empty value means no limit
    #[serde(default, deserialize_with = "empty_as_none")]
    pub budget: Option<f64>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Serialize)]
pub struct ApiHotel {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub amenity_list: Vec<String>,
}

impl From<Hotel> for ApiHotel {
    fn from(hotel: Hotel) -> Self {
        Self {
            amenity_list: hotel.amenity_list(),
            hotel,
        }
    }
}

#[derive(Serialize)]
pub struct ApiAttraction {
    #[serde(flatten)]
    pub attraction: Attraction,
    pub category_kind: AttractionCategory,
    pub is_free: bool,
}

impl From<Attraction> for ApiAttraction {
    fn from(attraction: Attraction) -> Self {
        Self {
            category_kind: attraction.category_kind(),
            is_free: attraction.is_free(),
            attraction,
        }
    }
}

#[derive(Serialize)]
pub struct ApiTransportation {
    #[serde(flatten)]
    pub transportation: Transportation,
    pub kind: TransportKind,
}

impl From<Transportation> for ApiTransportation {
    fn from(transportation: Transportation) -> Self {
        Self {
            kind: transportation.kind(),
            transportation,
        }
    }
}

/// Trip plan as sent to clients: `itinerary` is the JSON array as text
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiTripPlan {
    pub id: i64,
    pub destination_id: i64,
    pub budget: f64,
    pub duration_days: u32,
    pub total_estimated_cost: f64,
    pub itinerary: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TripPlan> for ApiTripPlan {
    type Error = TravelGuideError;

    fn try_from(plan: TripPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            itinerary: plan.itinerary_json()?,
            id: plan.id,
            destination_id: plan.destination_id,
            budget: plan.budget,
            duration_days: plan.duration_days,
            total_estimated_cost: plan.total_estimated_cost,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/destinations", get(list_destinations))
        .route("/destinations/{id}", get(get_destination))
        .route("/destinations/{id}/hotels", get(list_hotels))
        .route("/destinations/{id}/attractions", get(list_attractions))
        .route("/destinations/{id}/transportation", get(list_transportation))
        .route("/destinations/{id}/phrases", get(list_phrases))
        .route("/trip-plans", post(create_trip_plan))
        .route("/trip-plans/{id}", get(get_trip_plan))
        .route("/currencies", get(list_currencies))
        .route("/currency/{from}/{to}/{amount}", get(convert_currency))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

async fn list_destinations(State(state): State<AppState>) -> ApiResult<Vec<Destination>> {
    Ok(Json(state.store.destinations().await?))
}

async fn get_destination(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Destination> {
    let Path(id) = id?;
    let destination = state
        .store
        .destination(id)
        .await?
        .ok_or_else(|| TravelGuideError::not_found("Destination"))?;
    Ok(Json(destination))
}

async fn list_hotels(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<HotelQuery>, QueryRejection>,
) -> ApiResult<Vec<ApiHotel>> {
    let Path(id) = id?;
    let Query(query) = query?;
    debug!("Listing hotels for destination {} (budget {:?})", id, query.budget);

    let hotels = state.store.hotels(id, query.budget).await?;
    Ok(Json(hotels.into_iter().map(ApiHotel::from).collect()))
}

async fn list_attractions(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Vec<ApiAttraction>> {
    let Path(id) = id?;
    let attractions = state.store.attractions(id).await?;
    Ok(Json(attractions.into_iter().map(ApiAttraction::from).collect()))
}

async fn list_transportation(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Vec<ApiTransportation>> {
    let Path(id) = id?;
    let transportation = state.store.transportation(id).await?;
    Ok(Json(
        transportation.into_iter().map(ApiTransportation::from).collect(),
    ))
}

async fn list_phrases(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Vec<Phrase>> {
    let Path(id) = id?;
    Ok(Json(state.store.phrases(id).await?))
}

async fn create_trip_plan(
    State(state): State<AppState>,
    payload: Result<Json<CreateTripPlan>, JsonRejection>,
) -> ApiResult<ApiTripPlan> {
    let Json(request) = payload?;
    let plan = state.planner.create_trip_plan(request).await?;
    Ok(Json(ApiTripPlan::try_from(plan)?))
}

async fn get_trip_plan(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<ApiTripPlan> {
    let Path(id) = id?;
    let plan = state
        .store
        .trip_plan(id)
        .await?
        .ok_or_else(|| TravelGuideError::not_found("Trip plan"))?;
    Ok(Json(ApiTripPlan::try_from(plan)?))
}

async fn list_currencies() -> Json<Vec<Currency>> {
    Json(Currency::ALL.to_vec())
}

async fn convert_currency(
    params: Result<Path<(String, String, String)>, PathRejection>,
) -> ApiResult<Conversion> {
    let Path((from, to, amount)) = params?;
    let amount = amount
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite())
        .ok_or_else(|| {
            ApiError::bad_request(format!("Invalid input: amount '{amount}' is not a number"))
        })?;

    Ok(Json(currency::convert(&from, &to, amount)))
}
