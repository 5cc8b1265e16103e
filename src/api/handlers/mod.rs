use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;

use crate::api::fpl_client::FplClient;
use crate::api::models::ErrorResponse;
use crate::api::presenter::{PhotoLinker, Presenter};
use crate::config::settings::AppConfig;
use crate::domain::Snapshot;

pub mod admin;
pub mod photos;
pub mod recommendations;
pub mod team;

pub struct AppState {
    pub client: FplClient,
    pub config: AppConfig,
    pub presenter: Presenter,
}

impl AppState {
    pub fn new(client: FplClient, config: AppConfig) -> Self {
        let presenter = Presenter::new(PhotoLinker::new(&config.server.public_base_url));
        Self {
            client,
            config,
            presenter,
        }
    }

    async fn load_snapshot(&self, manager_id: u64) -> Result<Snapshot, ApiError> {
        Ok(self.client.load_snapshot(manager_id).await?)
    }
}

/// Any failure while serving a request; rendered as a 500 with an error body
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {:#}", self.0);
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub type ApiResult = Result<Response, ApiError>;
