use super::types::ApiError;
use crate::grid::{slashings_grid, GridRequest};
use crate::rpc::RpcState;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use chrono::Datelike;
use std::collections::HashMap;
use tracing::{debug, error};

/// GET /validators/slashings/data
///
/// Serves one page of the slashings grid as JSON.
pub async fn handle_slashings_data(
    State(state): State<RpcState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let request = GridRequest::from_query(&params).map_err(|e| {
        error!("error parsing datatables parameters for {} route: {}", uri, e);
        ApiError
    })?;
    debug!(
        "slashings page request: draw={}, start={}, length={}",
        request.draw, request.start, request.length
    );

    let store = state.store.clone();
    let chain = state.config.chain;
    let grid = tokio::task::spawn_blocking(move || slashings_grid(store.as_ref(), &request, &chain))
        .await
        .map_err(|e| {
            error!("slashings query task failed for {} route: {}", uri, e);
            ApiError
        })?
        .map_err(|e| {
            error!("error retrieving slashings for {} route: {}", uri, e);
            ApiError
        })?;

    let body = serde_json::to_vec(&grid).map_err(|e| {
        error!("error encoding json response for {} route: {}", uri, e);
        ApiError
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// GET /validators/slashings
///
/// Static grid shell; rows are loaded from the data endpoint.
/// Chain timing is exposed on `<body>` for client-side slot/epoch math.
pub async fn handle_slashings_page(State(state): State<RpcState>) -> Html<String> {
    let chain = state.config.chain;
    let title = format!(
        "{} - Validator Slashings - {}",
        state.config.frontend.site_name,
        chrono::Utc::now().year()
    );
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body data-genesis-timestamp="{genesis}" data-seconds-per-slot="{seconds_per_slot}" data-slots-per-epoch="{slots_per_epoch}">
  <h1>Validator Slashings</h1>
  <table id="slashings" class="table" data-source="/validators/slashings/data">
    <thead>
      <tr>
        <th>Slashed Validator(s)</th>
        <th>Proposer</th>
        <th>Time</th>
        <th>Type</th>
        <th>Slot</th>
        <th>Epoch</th>
      </tr>
    </thead>
  </table>
</body>
</html>
"#,
        title = title,
        genesis = chain.genesis_timestamp,
        seconds_per_slot = chain.seconds_per_slot,
        slots_per_epoch = chain.slots_per_epoch
    ))
}

#[cfg(test)]
mod tests {
    use crate::config::ExplorerConfig;
    use crate::format::{format_slashed_validator, format_validator};
    use crate::rpc::types::INTERNAL_ERROR_BODY;
    use crate::rpc::{router, RpcState};
    use crate::slashing::{AttesterSlashingEntry, BlockSummary, ProposerSlashingEntry};
    use crate::storage::tests::temp_storage;
    use crate::storage::Storage;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn seeded_app() -> (Router, std::path::PathBuf) {
        let (storage, path) = temp_storage();
        seed(&storage);
        drop(storage);
        let reader = Storage::open_read_only(&path.to_string_lossy()).unwrap();
        let state = RpcState {
            store: Arc::new(reader),
            config: Arc::new(ExplorerConfig::default()),
        };
        (router(state), path)
    }

    fn seed(storage: &Storage) {
        for slot in 0..120u64 {
            storage
                .save_block(&BlockSummary { slot, epoch: slot / 32, proposer: 1000 + slot })
                .unwrap();
            storage
                .save_attester_slashing(&AttesterSlashingEntry {
                    block_slot: slot,
                    block_index: 0,
                    attestation1_indices: Some(vec![1, 2, 3]),
                    attestation2_indices: Some(vec![2, 3, 4]),
                })
                .unwrap();
        }
        storage.save_block(&BlockSummary { slot: 200, epoch: 6, proposer: 7 }).unwrap();
        storage
            .save_proposer_slashing(&ProposerSlashingEntry {
                block_slot: 200,
                block_index: 0,
                proposer_index: 42,
            })
            .unwrap();
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
        (status, content_type, body)
    }

    #[tokio::test]
    async fn test_data_endpoint_clamps_and_orders() {
        let (app, path) = seeded_app();
        let (status, content_type, body) =
            get(app, "/validators/slashings/data?draw=4&start=0&length=150").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["draw"], 4);
        assert_eq!(json["recordsTotal"], 121);
        assert_eq!(json["recordsFiltered"], 121);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 100);
        assert!(data.iter().all(|row| row.as_array().map(|r| r.len()) == Some(6)));

        // slot 200 proposer violation first
        assert_eq!(data[0][0], format_slashed_validator(42));
        assert_eq!(data[0][1], format_validator(7));
        assert_eq!(data[0][3], "Proposer Violation");
        assert_eq!(data[1][4], "<a href=\"/block/119\">119</a>");
        assert_eq!(data[1][3], "Attestation Violation");

        let _ = std::fs::remove_dir_all(path);
    }

    #[tokio::test]
    async fn test_identical_requests_identical_responses() {
        let (app, path) = seeded_app();
        let uri = "/validators/slashings/data?draw=1&start=30&length=10";
        let (_, _, first) = get(app.clone(), uri).await;
        let (_, _, second) = get(app, uri).await;
        assert_eq!(first, second);
        let _ = std::fs::remove_dir_all(path);
    }

    #[tokio::test]
    async fn test_missing_draw_is_internal_error() {
        let (app, path) = seeded_app();
        let (status, _, body) = get(app, "/validators/slashings/data?start=0&length=10").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let text = String::from_utf8(body).unwrap();
        assert_eq!(text, INTERNAL_ERROR_BODY);
        assert!(!text.contains("data"));
        let _ = std::fs::remove_dir_all(path);
    }

    #[tokio::test]
    async fn test_non_numeric_length_is_internal_error() {
        let (app, path) = seeded_app();
        let (status, _, _) = get(app, "/validators/slashings/data?draw=1&start=0&length=all").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let _ = std::fs::remove_dir_all(path);
    }

    #[tokio::test]
    async fn test_page_shell_lists_columns() {
        let (app, path) = seeded_app();
        let (status, _, body) = get(app, "/validators/slashings").await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Beacon Explorer - Validator Slashings"));
        assert!(html.contains("data-source=\"/validators/slashings/data\""));
        assert!(html.contains("data-genesis-timestamp=\"1606824023\""));
        assert!(html.contains("data-seconds-per-slot=\"12\""));
        assert!(html.contains("data-slots-per-epoch=\"32\""));
        let proposer = html.find("<th>Proposer</th>").unwrap();
        let epoch = html.find("<th>Epoch</th>").unwrap();
        assert!(proposer < epoch);
        let _ = std::fs::remove_dir_all(path);
    }
}
