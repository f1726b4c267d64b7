//! Upload, preview and download over HTTP.
//!
//! | Route          | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `GET /`        | upload form                                    |
//! | `POST /preview`| show the uploaded table and the generate form  |
//! | `POST /deck`   | build the deck and return it as a download     |
//! | `GET /health`  | liveness check                                 |
//!
//! Each request runs the synchronous loader and builder on its own data; the
//! only shared state is the read-only option set.

pub mod pages;

use crate::config::AppConfig;
use crate::deck::{DeckOptions, LayoutStrategy, render_deck};
use crate::ooxml::pptx::PPTX_MIME_TYPE;
use crate::sheet::{LoaderOptions, load_csv, read_table};
use axum::{
    Router,
    extract::{Multipart, State, multipart::MultipartError},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// File name offered for the generated deck.
pub const DOWNLOAD_FILENAME: &str = "scenario_overview.pptx";

/// Options shared by every request.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    deck: Arc<DeckOptions>,
    loader: Arc<LoaderOptions>,
}

impl AppState {
    /// Creates state from explicit option sets.
    pub fn new(deck: DeckOptions, loader: LoaderOptions) -> Self {
        Self {
            deck: Arc::new(deck),
            loader: Arc::new(loader),
        }
    }

    /// Creates state from a loaded configuration file.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.deck_options(), config.loader_options())
    }
}

/// Creates the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/preview", post(preview))
        .route("/deck", post(deck))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Serve the application on `listener` until the process stops.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "listening");
    }
    axum::serve(listener, create_router(state)).await
}

/// Fields of the upload and generate forms.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<Vec<u8>>,
    csv: Option<String>,
    layout: Option<String>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => form.file = Some(field.bytes().await?.to_vec()),
                "csv" => form.csv = Some(field.text().await?),
                "layout" => form.layout = Some(field.text().await?),
                _ => {}
            }
        }
        Ok(form)
    }

    /// The CSV bytes: an uploaded file wins over carried text. Browsers send
    /// an empty file part when nothing was chosen.
    fn data(self) -> Option<Vec<u8>> {
        match (self.file, self.csv) {
            (Some(file), _) if !file.is_empty() => Some(file),
            (_, Some(csv)) if !csv.is_empty() => Some(csv.into_bytes()),
            _ => None,
        }
    }
}

fn page(status: StatusCode, html: String) -> Response {
    (status, Html(html)).into_response()
}

fn missing_upload() -> Response {
    page(
        StatusCode::BAD_REQUEST,
        pages::error_page("Please upload a CSV file."),
    )
}

async fn index() -> Html<String> {
    Html(pages::index_page())
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn preview(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match UploadForm::read(multipart).await {
        Ok(form) => form,
        Err(err) => return err.into_response(),
    };
    let Some(data) = form.data() else {
        return missing_upload();
    };

    let raw = match read_table(&data, &state.loader.text) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(kind = ?err.kind(), %err, "rejected upload");
            return page(
                StatusCode::UNPROCESSABLE_ENTITY,
                pages::error_page(&err.to_string()),
            );
        },
    };

    let html = match raw.validate(&state.loader) {
        Ok(_) => {
            let csv = String::from_utf8_lossy(&data);
            pages::preview_page(&raw, Some(csv.as_ref()), None, state.deck.layout)
        },
        Err(err) => {
            warn!(kind = ?err.kind(), %err, "upload failed validation");
            pages::preview_page(&raw, None, Some(&err.to_string()), state.deck.layout)
        },
    };
    info!(rows = raw.len(), "served preview");
    page(StatusCode::OK, html)
}

async fn deck(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match UploadForm::read(multipart).await {
        Ok(form) => form,
        Err(err) => return err.into_response(),
    };

    let mut options = (*state.deck).clone();
    if let Some(layout) = form.layout.as_deref().filter(|l| !l.trim().is_empty()) {
        match layout.parse::<LayoutStrategy>() {
            Ok(layout) => options.layout = layout,
            Err(message) => return page(StatusCode::BAD_REQUEST, pages::error_page(&message)),
        }
    }
    let Some(data) = form.data() else {
        return missing_upload();
    };

    let table = match load_csv(&data, &state.loader) {
        Ok(table) => table,
        Err(err) => {
            warn!(kind = ?err.kind(), %err, "rejected deck request");
            return page(
                StatusCode::UNPROCESSABLE_ENTITY,
                pages::error_page(&err.to_string()),
            );
        },
    };

    match render_deck(&table, &options) {
        Ok(bytes) => {
            info!(layout = %options.layout, rows = table.len(), "served deck");
            (
                [
                    (header::CONTENT_TYPE, PPTX_MIME_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        },
        Err(err) => {
            error!(%err, "failed to render deck");
            page(
                StatusCode::INTERNAL_SERVER_ERROR,
                pages::error_page("The presentation could not be created."),
            )
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::io::{Cursor, Read};
    use tower::ServiceExt;

    const BOUNDARY: &str = "scenario-deck-test-boundary";

    fn multipart_body(fields: &[(&str, &str)]) -> String {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            if *name == "file" {
                body.push_str(
                    "Content-Disposition: form-data; name=\"file\"; filename=\"scenario.csv\"\r\n\
                     Content-Type: text/csv\r\n\r\n",
                );
            } else {
                body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                ));
            }
            body.push_str(value);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body
    }

    fn post(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(fields)))
            .unwrap()
    }

    async fn send(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = create_router(AppState::default())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, body.to_vec())
    }

    fn slide_names(bytes: &[u8]) -> Vec<String> {
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut names: Vec<String> = archive
            .file_names()
            .filter(|n| n.starts_with("ppt/slides/slide"))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    const GOOD_CSV: &str = "Field,Details\nscenario,River flood\nroles,**Mayor**_x000D_\n";

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, _, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_index_serves_upload_form() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, _, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains(r#"name="file""#));
    }

    #[tokio::test]
    async fn test_preview_valid_upload_offers_generation() {
        let (status, _, body) = send(post("/preview", &[("file", GOOD_CSV)])).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("<td>River flood</td>"));
        assert!(html.contains("Create PowerPoint Slide"));
    }

    #[tokio::test]
    async fn test_preview_missing_column_shows_message() {
        let (status, _, body) = send(post("/preview", &[("file", "Field,Notes\na,b\n")])).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("CSV must contain &apos;Field&apos; and &apos;Details&apos; columns."));
        assert!(!html.contains("Create PowerPoint Slide"));
    }

    #[tokio::test]
    async fn test_preview_bad_quoting_is_unprocessable() {
        let (status, _, body) =
            send(post("/preview", &[("file", "Field,Details\nroles,\"unterminated\n")])).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(String::from_utf8(body).unwrap().contains("badly formatted"));
    }

    #[tokio::test]
    async fn test_preview_without_file_is_bad_request() {
        let (status, _, _) = send(post("/preview", &[("file", "")])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_deck_download() {
        let (status, headers, body) = send(post("/deck", &[("file", GOOD_CSV)])).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], PPTX_MIME_TYPE);
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"scenario_overview.pptx\""
        );
        assert_eq!(slide_names(&body), vec!["ppt/slides/slide1.xml"]);
    }

    #[tokio::test]
    async fn test_deck_from_carried_csv_with_layout() {
        let (status, _, body) = send(post(
            "/deck",
            &[("csv", GOOD_CSV), ("layout", "per-row")],
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(slide_names(&body).len(), 3);

        let mut archive = zip::ZipArchive::new(Cursor::new(body)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("ppt/slides/slide3.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        assert!(xml.contains("MAYOR"));
        assert!(!xml.contains("_x000D_"));
    }

    #[tokio::test]
    async fn test_deck_validation_failure_is_unprocessable() {
        let (status, headers, body) = send(post("/deck", &[("csv", "Field,Notes\na,b\n")])).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
        assert!(String::from_utf8(body).unwrap().contains("CSV must contain"));
    }

    #[tokio::test]
    async fn test_deck_unknown_layout_is_bad_request() {
        let (status, _, body) =
            send(post("/deck", &[("csv", GOOD_CSV), ("layout", "grid")])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8(body).unwrap().contains("unknown layout"));
    }
}
