//! Async REST client for the remote pharmacy API
//!
//! Thin typed wrapper over the dashboard's HTTP boundary: cuadre
//! submission and review, accounts-payable transitions, payment
//! recording (single and batch), price-list ingestion and
//! presigned-URL object storage. Failures surface once per call with
//! no retry-with-backoff; callers keep form state and let the user
//! retry.

mod almacen;
mod config;
mod cuadres;
mod cuentas;
mod error;
mod gastos;
mod http;
mod listas;
mod pagos;
mod types;

pub use almacen::{content_type_de, nombre_objeto};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use listas::{
    EstrategiaImportacion, FILAS_POR_LOTE, ImportacionResumen, UMBRAL_EXCEL_BYTES,
    estrategia_importacion,
};
pub use types::{
    DEFAULT_READ_EXPIRY_SECS, DEFAULT_WRITE_EXPIRY_SECS, PresignedOperation, PresignedRequest,
    PresignedResponse,
};
