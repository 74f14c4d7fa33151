//! Price-list ingestion endpoints
//!
//! Spreadsheets are parsed client-side into `ListaComparativa` rows
//! before upload. Small files go up whole as multipart; large files go
//! through the batch endpoint in chunks of at most 300 rows. The file
//! size selects the strategy.

use serde::Deserialize;
use shared::models::lista::ListaComparativa;

use crate::{ClientError, ClientResult, HttpClient};

/// File-size threshold selecting the import strategy (10 MB)
pub const UMBRAL_EXCEL_BYTES: u64 = 10 * 1024 * 1024;

/// Maximum rows per chunk for the batch endpoint
pub const FILAS_POR_LOTE: usize = 300;

/// Import strategy chosen for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstrategiaImportacion {
    /// Whole file, multipart upload
    Excel,
    /// Parsed rows in chunked JSON batches
    Lotes,
}

/// Pick the upload strategy for a file of the given size
pub fn estrategia_importacion(tamano_bytes: u64) -> EstrategiaImportacion {
    if tamano_bytes <= UMBRAL_EXCEL_BYTES {
        EstrategiaImportacion::Excel
    } else {
        EstrategiaImportacion::Lotes
    }
}

/// Outcome of a completed import
#[derive(Debug, Clone, Deserialize)]
pub struct ImportacionResumen {
    /// Rows the server accepted
    pub filas: u32,
}

impl HttpClient {
    /// Import a whole spreadsheet as multipart (small files)
    pub async fn importar_lista_excel(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<ImportacionResumen> {
        let parte = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")?;
        let form = reqwest::multipart::Form::new().part("file", parte);

        self.post_multipart("/listas-comparativas/excel", form).await
    }

    /// Import parsed rows through the chunked batch endpoint (large files)
    ///
    /// Chunks are submitted sequentially; a failure partway reports how
    /// many rows had already been accepted, and nothing is rolled back.
    pub async fn importar_lista_lotes(
        &self,
        filas: &[ListaComparativa],
    ) -> ClientResult<ImportacionResumen> {
        let mut enviadas: u32 = 0;
        for lote in filas.chunks(FILAS_POR_LOTE) {
            match self
                .post::<ImportacionResumen, _>("/listas-comparativas/batch", &lote)
                .await
            {
                Ok(_resumen) => enviadas += lote.len() as u32,
                Err(err) => {
                    return Err(match err {
                        ClientError::PartialFailure { .. } => err,
                        other => ClientError::PartialFailure {
                            procesados: enviadas,
                            message: other.to_string(),
                        },
                    });
                }
            }
        }
        Ok(ImportacionResumen { filas: enviadas })
    }

    /// Import a price list, choosing the strategy by file size
    pub async fn importar_lista(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        filas: &[ListaComparativa],
    ) -> ClientResult<ImportacionResumen> {
        match estrategia_importacion(bytes.len() as u64) {
            EstrategiaImportacion::Excel => self.importar_lista_excel(file_name, bytes).await,
            EstrategiaImportacion::Lotes => self.importar_lista_lotes(filas).await,
        }
    }

    /// Current comparative price lists
    pub async fn listas_comparativas(&self) -> ClientResult<Vec<ListaComparativa>> {
        self.get("/listas-comparativas").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila(codigo: &str) -> ListaComparativa {
        ListaComparativa {
            id: None,
            codigo: codigo.into(),
            descripcion: "Loratadina 10mg".into(),
            precio_neto: 0.85,
            proveedor_id: "p1".into(),
            proveedor: None,
            laboratorio: None,
        }
    }

    #[test]
    fn strategy_flips_at_ten_megabytes() {
        assert_eq!(estrategia_importacion(0), EstrategiaImportacion::Excel);
        assert_eq!(
            estrategia_importacion(UMBRAL_EXCEL_BYTES),
            EstrategiaImportacion::Excel
        );
        assert_eq!(
            estrategia_importacion(UMBRAL_EXCEL_BYTES + 1),
            EstrategiaImportacion::Lotes
        );
    }

    #[test]
    fn chunks_cap_at_three_hundred_rows() {
        let filas: Vec<ListaComparativa> = (0..301).map(|i| fila(&format!("C{i}"))).collect();
        let lotes: Vec<_> = filas.chunks(FILAS_POR_LOTE).collect();
        assert_eq!(lotes.len(), 2);
        assert_eq!(lotes[0].len(), 300);
        assert_eq!(lotes[1].len(), 1);
    }

    #[test]
    fn exact_multiple_has_no_empty_tail_chunk() {
        let filas: Vec<ListaComparativa> = (0..600).map(|i| fila(&format!("C{i}"))).collect();
        let lotes: Vec<_> = filas.chunks(FILAS_POR_LOTE).collect();
        assert_eq!(lotes.len(), 2);
        assert!(lotes.iter().all(|l| l.len() == 300));
    }
}
