//! Request handlers and error mapping for the HTTP surface.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fiatramp_types::{GatewayError, PartnerAck, PartnerId, UserId, constants};

use crate::state::AppState;

/// Build the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/onramp", post(onramp))
        .route("/health", get(health))
        .with_state(state)
}

/// `POST /onramp` request body.
#[derive(Debug, Deserialize)]
pub struct OnrampRequest {
    /// The settling user's id.
    pub user_id: String,
    /// Fiat amount in NGN.
    pub amount: Decimal,
    /// The licensed partner to notify.
    pub vasp_id: String,
}

/// `POST /onramp` success body.
#[derive(Debug, Serialize)]
pub struct OnrampResponse {
    pub transaction_id: String,
    pub status: String,
    pub vasp_response: PartnerAck,
}

/// Error body for 4xx/5xx responses: a stable code plus a message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// `GET /health` body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub gateway: &'static str,
    pub version: &'static str,
}

/// GET /health - liveness probe.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        gateway: constants::GATEWAY_NAME,
        version: constants::VERSION,
    })
}

/// POST /onramp - settle one fiat-to-crypto on-ramp request.
async fn onramp(State(state): State<AppState>, Json(req): Json<OnrampRequest>) -> Response {
    // An unparseable id cannot name a user; same surface as an unknown one.
    let Ok(user_id) = req.user_id.parse::<UserId>() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                code: "NOT_FOUND".into(),
                message: format!("user not found: {}", req.user_id),
            }),
        )
            .into_response();
    };

    let Ok(mut core) = state.core.lock() else {
        tracing::error!("gateway core lock poisoned");
        return error_response(&GatewayError::Internal("state unavailable".into()));
    };

    let user = match core.users.get(user_id) {
        Some(user) => user.clone(),
        None => return error_response(&GatewayError::UserNotFound(user_id)),
    };

    let partner_id = PartnerId::new(req.vasp_id);
    match core.engine.settle(&user, &partner_id, req.amount) {
        Ok(outcome) => (
            StatusCode::OK,
            Json(OnrampResponse {
                transaction_id: outcome.transaction_id.to_string(),
                status: outcome.status.to_string(),
                vasp_response: outcome.acknowledgement,
            }),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// The HTTP status a gateway error maps to.
#[must_use]
pub fn status_for(err: &GatewayError) -> StatusCode {
    if err.is_rejection() {
        StatusCode::BAD_REQUEST
    } else if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn error_response(err: &GatewayError) -> Response {
    let status = status_for(err);
    let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
        // Log the cause, erase the external surface.
        tracing::error!(error = %err, "settlement failed unexpectedly");
        ErrorBody {
            code: "INTERNAL".into(),
            message: "internal error".into(),
        }
    } else {
        ErrorBody {
            code: err.code().into(),
            message: err.to_string(),
        }
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use fiatramp_types::PartnerId;

    use super::*;

    #[test]
    fn rejections_map_to_400() {
        let errors = [
            GatewayError::InvalidAmount {
                amount: Decimal::ZERO,
            },
            GatewayError::UnlicensedPartner(PartnerId::new("vasp_777")),
            GatewayError::LimitExceeded {
                amount: Decimal::new(20_000_000, 0),
                limit: Decimal::new(10_000_000, 0),
            },
            GatewayError::AmlRisk {
                score: 0.9,
                threshold: 0.7,
            },
            GatewayError::InsufficientFunds {
                needed: Decimal::ONE,
                available: Decimal::ZERO,
            },
        ];
        for err in errors {
            assert_eq!(status_for(&err), StatusCode::BAD_REQUEST, "{err}");
        }
    }

    #[test]
    fn lookups_map_to_404() {
        let user = UserId::new();
        assert_eq!(
            status_for(&GatewayError::UserNotFound(user)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&GatewayError::WalletNotFound(user)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn everything_else_maps_to_500() {
        assert_eq!(
            status_for(&GatewayError::PartnerUnavailable {
                reason: "down".into()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&GatewayError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn request_body_deserializes() {
        let req: OnrampRequest = serde_json::from_str(
            r#"{ "user_id": "0191c6a0-0000-7000-8000-000000000000",
                 "amount": 5000000,
                 "vasp_id": "vasp_001" }"#,
        )
        .unwrap();
        assert_eq!(req.amount, Decimal::new(5_000_000, 0));
        assert_eq!(req.vasp_id, "vasp_001");
    }
}
