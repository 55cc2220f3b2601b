//! JSON REST handlers for the service catalog.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use shutterbook_app::ports::{PaymentGateway, ServiceCatalog};
use shutterbook_domain::error::ShutterError;
use shutterbook_domain::id::ServiceId;
use shutterbook_domain::service::ServiceRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<ServiceRecord>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<ServiceRecord>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/services`
pub async fn list<C, G>(State(state): State<AppState<C, G>>) -> Result<ListResponse, ApiError>
where
    C: ServiceCatalog + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    let services = state.catalog_service.list_services().await?;
    Ok(ListResponse::Ok(Json(services)))
}

/// `GET /api/services/{id}`
pub async fn get<C, G>(
    State(state): State<AppState<C, G>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    C: ServiceCatalog + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    let service_id = ServiceId::new(id).map_err(ShutterError::from)?;
    let service = state.catalog_service.get_service(&service_id).await?;
    Ok(GetResponse::Ok(Json(service)))
}
