//! Static file serving with an SSR fallback

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
};
use leptos::*;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::App;
use crate::config::SiteConfig;

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> AxumResponse {
    let root = options.site_root.clone();
    let res = get_static_file(uri.clone(), &root).await;

    match res {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        _ => {
            let handler = leptos_axum::render_app_to_stream_with_context(
                options.to_owned(),
                move || {
                    // Already validated at startup; the same build env is
                    // visible here.
                    if let Ok(config) = SiteConfig::from_build_env() {
                        provide_context(config);
                    }
                },
                App,
            );
            handler(req).await.into_response()
        }
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response<Body>, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri.clone())
        .body(Body::empty())
        .unwrap();

    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("error serving static file: {}", err),
        )),
    }
}
