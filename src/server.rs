use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing::post};
use itertools::Itertools;
use log::{error, info};

use crate::config::ServerConfig;
use crate::data::{ExportRequest, SchedulingInput, SchedulingOutput};
use crate::error::SchedulerError;
use crate::export;
use crate::intake;
use crate::solver::{Engine, StrategyKind};

type ApiError = (StatusCode, String);

/// Intake and solve, off the async runtime: the exhaustive strategy can run for a long time.
/// Exhaustive requests are refused unless the engine carries a node budget.
async fn run_engine(engine: Engine, input: SchedulingInput) -> Result<SchedulingOutput, ApiError> {
    if input.strategy == StrategyKind::Exhaustive && engine.search_options().node_budget.is_none() {
        return Err(rejection(SchedulerError::UnboundedSearch));
    }

    let outcome = tokio::task::spawn_blocking(move || {
        let dataset = intake::build_dataset(&input)?;
        let solution = engine.solve(&dataset, input.strategy)?;
        Ok::<_, SchedulerError>(SchedulingOutput::from_solution(&dataset, solution))
    })
    .await
    .map_err(|e| {
        error!("Solver task failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Error processing data".to_string())
    })?;

    outcome.map_err(rejection)
}

fn rejection(err: SchedulerError) -> ApiError {
    info!("Rejected request: {}", err);
    let body = match &err {
        SchedulerError::EmptySchedule { steps } => {
            std::iter::once(err.to_string()).chain(steps.iter().cloned()).join("\n")
        }
        _ => err.to_string(),
    };
    (StatusCode::BAD_REQUEST, body)
}

async fn solve_handler(
    State(engine): State<Engine>,
    Json(input): Json<SchedulingInput>,
) -> Result<Json<SchedulingOutput>, ApiError> {
    run_engine(engine, input).await.map(Json)
}

async fn sample_handler(State(engine): State<Engine>) -> Result<Json<SchedulingOutput>, ApiError> {
    info!("Processing bundled sample survey");
    run_engine(engine, SchedulingInput::sample()).await.map(Json)
}

async fn export_handler(Json(request): Json<ExportRequest>) -> Result<impl IntoResponse, ApiError> {
    if request.assignments.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "No schedule data available".to_string(),
        ));
    }
    let body = export::to_csv(&request.assignments).map_err(|e| {
        error!("Error generating CSV: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error generating CSV: {}", e),
        )
    })?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"schedule.csv\"",
            ),
        ],
        body,
    ))
}

/// Routes served by the engine. Exhaustive requests need `engine` to carry a node budget.
pub fn router(engine: Engine) -> Router {
    Router::new()
        .route("/v1/schedule/solve", post(solve_handler))
        .route("/v1/schedule/sample", post(sample_handler))
        .route("/v1/schedule/export", post(export_handler))
        .with_state(engine)
}

pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let engine = Engine::new().with_search_options(config.search);
    let app = router(engine);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await
}
