use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, StatusCode},
    routing::get,
    Router,
};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::error::AppError;
use crate::core::middleware;
use crate::features::categories::{
    routes as categories_routes, CategoryRepository, CategoryService,
};
use crate::features::questions::{
    routes as questions_routes, QuestionRepository, QuestionService,
};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};

/// Services behind the HTTP routes, all sharing the same repositories
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
    pub quizzes: Arc<QuizService>,
}

impl AppServices {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(Arc::clone(&categories))),
            questions: Arc::new(QuestionService::new(Arc::clone(&questions), categories)),
            quizzes: Arc::new(QuizService::new(questions)),
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> AppError {
    AppError::NotFound("No route matches the request".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Assemble the application router: feature routes, health check, JSON
/// fallbacks, CORS, request ids and request tracing.
///
/// `docs` is merged in front of the API routes and shares its layers.
pub fn build_router(
    services: AppServices,
    cors_allowed_origins: Vec<String>,
    docs: Router,
) -> Router {
    let api = Router::new()
        .merge(categories_routes::routes(services.categories))
        .merge(questions_routes::routes(services.questions))
        .merge(quizzes_routes::routes(services.quizzes))
        .route("/health", get(health_check))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found);

    Router::new()
        .merge(docs)
        .merge(api)
        .layer(middleware::cors_layer(cors_allowed_origins))
        // Preflight answers already carry these; plain responses get them here
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(middleware::CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(middleware::CORS_ALLOW_HEADERS),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
