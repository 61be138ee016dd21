use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use jobboard::application::ports::store_health::StoreHealthPort;
use jobboard::application::services::session::SessionTokens;
use jobboard::bootstrap::app_context::{AppContext, AppServices};
use jobboard::bootstrap::config::Config;
use jobboard::infrastructure::db::repositories::job_application_repository_sqlx::SqlxJobApplicationRepository;
use jobboard::infrastructure::db::repositories::posting_repository_sqlx::SqlxPostingRepository;
use jobboard::infrastructure::db::repositories::store_health_sqlx::SqlxStoreHealth;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            jobboard::presentation::http::health::liveness,
            jobboard::presentation::http::health::health,
            jobboard::presentation::http::auth::issue_token,
            jobboard::presentation::http::auth::logout,
            jobboard::presentation::http::jobs::list_jobs,
            jobboard::presentation::http::jobs::get_job,
            jobboard::presentation::http::jobs::create_job,
            jobboard::presentation::http::jobs::update_job,
            jobboard::presentation::http::jobs::delete_job,
            jobboard::presentation::http::job_applications::submit_application,
            jobboard::presentation::http::job_applications::list_my_applications,
        ),
        components(schemas(
            jobboard::presentation::http::health::HealthResp,
            jobboard::presentation::http::auth::SuccessResponse,
            jobboard::presentation::http::jobs::InsertResponse,
            jobboard::presentation::http::jobs::UpdateResponse,
            jobboard::presentation::http::jobs::DeleteResponse,
            jobboard::presentation::http::error::ErrorBody,
        )),
        tags(
            (name = "Auth", description = "Session cookie issue and logout"),
            (name = "Jobs", description = "Job postings"),
            (name = "Applications", description = "Job applications"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "jobboard=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        api_port = cfg.api_port,
        is_production = cfg.is_production,
        frontend_urls = ?cfg.frontend_urls,
        "Starting job board backend"
    );

    // Database
    let pool =
        jobboard::infrastructure::db::connect_pool(&cfg.database_url, cfg.db_max_connections)
            .await?;
    jobboard::infrastructure::db::migrate(&pool).await?;

    let store_health = Arc::new(SqlxStoreHealth::new(pool.clone()));
    store_health.ping().await?;
    info!("Pinged the document store; connection is healthy");

    let services = AppServices::new(
        Arc::new(SqlxPostingRepository::new(pool.clone())),
        Arc::new(SqlxJobApplicationRepository::new(pool.clone())),
        store_health,
        SessionTokens::new(&cfg.jwt_secret, cfg.jwt_expires_secs),
    );
    let ctx = AppContext::new(cfg.clone(), services);

    let app = jobboard::presentation::http::router(ctx)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(build_cors(&cfg))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    info!(%api_addr, "server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down; closing database pool");
    pool.close().await;
    Ok(())
}

fn build_cors(cfg: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .frontend_urls
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    let allow_origin = if origins.is_empty() {
        // Nothing usable configured: deny cross-origin requests
        AllowOrigin::exact(HeaderValue::from_static("http://invalid"))
    } else {
        AllowOrigin::list(origins)
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_credentials(true)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
