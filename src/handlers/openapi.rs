//! OpenAPI specification generation and app factory.

use crate::{
    config::MetricsConfig,
    handlers::{get_metrics, health, login, register},
    middleware::{MetricsMiddleware, RequestIdMiddleware},
    state::AppState,
};
use actix_cors::Cors;
use actix_web::{App, HttpRequest, error::JsonPayloadError};
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the OpenAPI specification served at `/api/spec/v2`
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "PAM Gateway".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Login and registration gateway for pre-provisioned users.\n\n\
                Both endpoints answer `200 OK` with either `{\"data\": ...}` or \
                `{\"error\": \"...\"}`. Accepted registrations are relayed to the \
                tracker service at `PAM_ENDPOINT` on a best-effort basis."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Body parse failures surface as a plain 500, with no JSON payload.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejecting unparsable request body");
    actix_web::error::ErrorInternalServerError(err)
}

/// Creates the application with all routes and middleware.
///
/// Used by `main` for every worker and by the integration tests.
pub fn create_app(
    state: AppState,
    metrics_config: MetricsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let metrics = state.metrics.clone();
    let json_config = actix_web::web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler);

    App::new()
        .wrap(Cors::permissive())
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(json_config)
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(metrics))
        .app_data(web::Data::new(metrics_config))
        .service(web::resource("/").route(web::get().to(health)))
        .service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/register").route(web::post().to(register)))
        .service(web::resource("/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
