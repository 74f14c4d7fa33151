//! Request/response payloads for the remote API

use serde::{Deserialize, Serialize};
use shared::models::cuadre::EstadoCuadre;
use shared::models::cuenta::{EstatusCuenta, TipoCuenta};

/// Default expiry for presigned read URLs (seconds)
pub const DEFAULT_READ_EXPIRY_SECS: u64 = 3600;
/// Default expiry for presigned write URLs (seconds)
pub const DEFAULT_WRITE_EXPIRY_SECS: u64 = 600;

/// Body of `PATCH /cuadres/{farmacia}/{cuadre}/estado`
#[derive(Debug, Clone, Serialize)]
pub struct EstadoUpdate {
    pub estado: EstadoCuadre,
}

/// Body of `PATCH /cuentas-por-pagar/{id}/estatus`
#[derive(Debug, Clone, Serialize)]
pub struct EstatusUpdate {
    pub estatus: EstatusCuenta,
}

/// Body of `PATCH /cuentas-por-pagar/{id}/tipo`
#[derive(Debug, Clone, Serialize)]
pub struct TipoUpdate {
    pub tipo: TipoCuenta,
}

/// Operation a presigned URL is issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresignedOperation {
    PutObject,
    GetObject,
}

/// Body of `POST /presigned-url`
#[derive(Debug, Clone, Serialize)]
pub struct PresignedRequest {
    pub object_name: String,
    pub operation: PresignedOperation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

impl PresignedRequest {
    /// Presign an upload; writes get the short default expiry
    pub fn put(object_name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            operation: PresignedOperation::PutObject,
            content_type: Some(content_type.into()),
            expires_in: Some(DEFAULT_WRITE_EXPIRY_SECS),
        }
    }

    /// Presign a download; reads get the long default expiry
    pub fn get(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            operation: PresignedOperation::GetObject,
            content_type: None,
            expires_in: Some(DEFAULT_READ_EXPIRY_SECS),
        }
    }
}

/// Response of `POST /presigned-url`
#[derive(Debug, Clone, Deserialize)]
pub struct PresignedResponse {
    pub url: String,
    #[serde(default)]
    pub object_name: Option<String>,
}
