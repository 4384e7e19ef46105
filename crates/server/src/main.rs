// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use nac_tco_api::{
    ApiError, CalculateRequest, ListVendorsResponse, RecommendRequest, RecommendResponse,
    ResultCache, SensitivityRequest, SensitivityResponse, SummaryResponse, VendorInfo,
    cached_lookup, calculate_params, export_csv, export_sensitivity_csv, get_vendor,
    list_vendors, parse_calculate_request, recommend, sensitivity, store_result, summarize,
};
use nac_tco_domain::{CalculationParams, CalculationResults, VendorCatalog};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// NAC TCO Server - HTTP server for the NAC TCO engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Path to a JSON vendor catalog. If not provided, uses the built-in catalog.
    #[arg(short, long)]
    catalog: Option<String>,

    /// Lifetime of cached calculation results in seconds. 0 disables caching.
    #[arg(long, default_value_t = 300)]
    cache_ttl_secs: u64,
}

/// Application state shared across handlers.
///
/// The catalog is read-only. The result cache is the only mutable state and
/// its lock is never held while the engine runs.
#[derive(Clone)]
struct AppState {
    /// The vendor catalog.
    catalog: Arc<VendorCatalog>,
    /// The result cache, absent when caching is disabled.
    cache: Option<Arc<Mutex<ResultCache>>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Runs a calculation, going through the result cache when one is configured.
///
/// The cache lock is taken for the lookup and the store only.
async fn run_calculation(
    app_state: &AppState,
    req: &CalculateRequest,
    now: OffsetDateTime,
) -> Result<CalculationResults, HttpError> {
    let params: CalculationParams = parse_calculate_request(req)?;

    let Some(cache) = &app_state.cache else {
        return Ok(calculate_params(&app_state.catalog, &params)?);
    };

    let cached: Option<CalculationResults> = cached_lookup(&*cache.lock().await, &params, now)?;
    if let Some(results) = cached {
        return Ok(results);
    }

    let results: CalculationResults = calculate_params(&app_state.catalog, &params)?;
    store_result(&mut *cache.lock().await, &params, &results, now)?;

    Ok(results)
}

/// Handler for GET `/vendors` endpoint.
async fn handle_list_vendors(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListVendorsResponse> {
    info!("Handling list_vendors request");
    Json(list_vendors(&app_state.catalog))
}

/// Handler for GET `/vendors/{vendor_id}` endpoint.
async fn handle_get_vendor(
    AxumState(app_state): AxumState<AppState>,
    Path(vendor_id): Path<String>,
) -> Result<Json<VendorInfo>, HttpError> {
    info!(vendor_id = %vendor_id, "Handling get_vendor request");
    Ok(Json(get_vendor(&app_state.catalog, &vendor_id)?))
}

/// Handler for POST `/calculate` endpoint.
///
/// Returns per-vendor results, comparisons and the executive summary.
async fn handle_calculate(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<CalculationResults>, HttpError> {
    info!(
        vendors = req.selected_vendors.len(),
        device_count = req.device_count,
        years = req.years_to_project,
        industry = %req.industry,
        "Handling calculate request"
    );

    let results: CalculationResults =
        run_calculation(&app_state, &req, OffsetDateTime::now_utc()).await?;
    Ok(Json(results))
}

/// Handler for POST `/summary` endpoint.
///
/// Returns the plain-text narrative alongside the executive summary.
async fn handle_summary(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<SummaryResponse>, HttpError> {
    info!(industry = %req.industry, "Handling summary request");

    let results: CalculationResults =
        run_calculation(&app_state, &req, OffsetDateTime::now_utc()).await?;
    Ok(Json(summarize(results)))
}

/// Handler for POST `/recommendations` endpoint.
async fn handle_recommendations(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, HttpError> {
    info!(
        industry = %req.industry,
        priorities = ?req.priorities,
        "Handling recommendations request"
    );
    Ok(Json(recommend(&app_state.catalog, &req)?))
}

/// Handler for POST `/sensitivity` endpoint.
///
/// Sweeps one input and returns per-vendor totals at each step.
async fn handle_sensitivity(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SensitivityRequest>,
) -> Result<Json<SensitivityResponse>, HttpError> {
    info!(
        variable = %req.variable,
        steps = req.steps,
        "Handling sensitivity request"
    );
    Ok(Json(sensitivity(&app_state.catalog, &req)?))
}

/// Handler for POST `/export/sensitivity/csv` endpoint.
async fn handle_export_sensitivity_csv(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SensitivityRequest>,
) -> Result<Response, HttpError> {
    info!(variable = %req.variable, "Handling export_sensitivity_csv request");

    let response: SensitivityResponse = sensitivity(&app_state.catalog, &req)?;
    let csv: String = export_sensitivity_csv(&response)?;

    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv).into_response())
}

/// Handler for POST `/export/csv` endpoint.
///
/// Returns one CSV row per vendor.
async fn handle_export_csv(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CalculateRequest>,
) -> Result<Response, HttpError> {
    info!(
        vendors = req.selected_vendors.len(),
        "Handling export_csv request"
    );

    let results: CalculationResults =
        run_calculation(&app_state, &req, OffsetDateTime::now_utc()).await?;
    let csv: String = export_csv(&results)?;

    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv).into_response())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/vendors", get(handle_list_vendors))
        .route("/vendors/{vendor_id}", get(handle_get_vendor))
        .route("/calculate", post(handle_calculate))
        .route("/summary", post(handle_summary))
        .route("/recommendations", post(handle_recommendations))
        .route("/sensitivity", post(handle_sensitivity))
        .route("/export/csv", post(handle_export_csv))
        .route("/export/sensitivity/csv", post(handle_export_sensitivity_csv))
        .with_state(app_state)
}

/// Loads the catalog from `path`, or the built-in catalog when no path is given.
fn load_catalog(path: Option<&str>) -> Result<VendorCatalog, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            info!("Loading vendor catalog from: {}", path);
            let json: String = std::fs::read_to_string(path)?;
            Ok(VendorCatalog::from_json_str(&json)?)
        }
        None => {
            info!("Using built-in vendor catalog");
            Ok(VendorCatalog::builtin()?)
        }
    }
}

/// Periodically drops expired cache entries.
fn spawn_cache_purger(cache: Arc<Mutex<ResultCache>>, every: std::time::Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let purged: usize = cache
                .lock()
                .await
                .purge_expired(OffsetDateTime::now_utc());
            if purged > 0 {
                debug!(purged = purged, "Purged expired cache entries");
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing NAC TCO Server");

    let catalog: VendorCatalog = load_catalog(args.catalog.as_deref())?;
    info!(vendors = catalog.len(), "Vendor catalog loaded");

    let cache: Option<Arc<Mutex<ResultCache>>> = if args.cache_ttl_secs == 0 {
        info!("Result caching disabled");
        None
    } else {
        let ttl: std::time::Duration = std::time::Duration::from_secs(args.cache_ttl_secs);
        info!(ttl_secs = args.cache_ttl_secs, "Result caching enabled");
        let cache: Arc<Mutex<ResultCache>> =
            Arc::new(Mutex::new(ResultCache::new(time::Duration::try_from(ttl)?)));
        spawn_cache_purger(Arc::clone(&cache), ttl);
        Some(cache)
    };

    let app_state: AppState = AppState {
        catalog: Arc::new(catalog),
        cache,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
