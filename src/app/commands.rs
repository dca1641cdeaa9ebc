use crate::api::{ApiResponse, Links};
use crate::config::Command;
use crate::core::service::BlueprintService;
use crate::core::{BlueprintStore, Point};
use crate::utils::error::Result;
use serde_json::Value;

/// Runs one command against the service and wraps the outcome in an
/// envelope. Domain errors become error envelopes; only infrastructure
/// failures are returned as `Err`.
pub async fn execute<S: BlueprintStore>(
    service: &BlueprintService<S>,
    command: Command,
) -> Result<ApiResponse<Value>> {
    match dispatch(service, command).await {
        Ok(response) => Ok(response),
        Err(e) if e.status_code() < 500 => {
            tracing::debug!("Request rejected: {}", e);
            Ok(ApiResponse::from_error(&e))
        }
        Err(e) => Err(e),
    }
}

async fn dispatch<S: BlueprintStore>(
    service: &BlueprintService<S>,
    command: Command,
) -> Result<ApiResponse<Value>> {
    match command {
        Command::Create {
            author,
            name,
            points,
        } => {
            let points = points.0.into_iter().map(Point::from).collect();
            let bp = service.create_blueprint(&author, &name, points).await?;
            Ok(ApiResponse::created(serde_json::to_value(&bp)?)
                .with_links(Links::for_blueprint(&author, &name)))
        }
        Command::Get { author, name } => {
            let bp = service.get_blueprint(&author, &name).await?;
            Ok(ApiResponse::ok(serde_json::to_value(&bp)?)
                .with_links(Links::for_blueprint(&author, &name)))
        }
        Command::ByAuthor { author } => {
            let bps = service.get_blueprints_by_author(&author).await?;
            Ok(ApiResponse::ok(serde_json::to_value(&bps)?).with_links(Links::for_author(&author)))
        }
        Command::List => {
            let bps = service.get_all_blueprints().await?;
            Ok(ApiResponse::ok(serde_json::to_value(&bps)?).with_links(Links::for_all()))
        }
        Command::AddPoint { author, name, x, y } => {
            service.add_point(&author, &name, x, y).await?;
            Ok(ApiResponse::accepted(None).with_links(Links::for_point_update(&author, &name)))
        }
    }
}
