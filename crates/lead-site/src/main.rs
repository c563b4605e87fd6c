//! Lead Capture Landing Site server
//!
//! SSR entrypoint: renders the landing page through axum and serves the
//! hydration bundle and static assets.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use lead_site::app::App;
    use lead_site::config::SiteConfig;
    use lead_site::fileserv::file_and_error_handler;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lead_site=info,tower_http=info".into()),
        )
        .init();

    // Refuse to serve a page whose form cannot reach a relay.
    let config = match SiteConfig::from_build_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("refusing to start: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!("Relaying leads to {}", config.relay.endpoint());
    if let Some(timeout) = config.relay.timeout() {
        tracing::info!("Relay timeout configured at {:?}", timeout);
    }

    let conf = get_configuration(None).await.unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(config.clone()),
            App,
        )
        .fallback(file_and_error_handler)
        .nest_service("/assets", ServeDir::new("assets"))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Landing site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client entry is `hydrate()` in lib.rs; nothing to run natively.
}
