use thiserror::Error;

/// Everything that can go wrong between clicking a report action and
/// showing its result. Messages are the user-facing toast texts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("El endpoint del reporte no fue encontrado")]
    NotFound,

    #[error("Error interno del servidor al generar el reporte")]
    ServerError,

    #[error("Parámetros inválidos para generar el reporte")]
    BadParameters,

    #[error("Error {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("El reporte generado está vacío")]
    EmptyPayload,

    #[error("Error al procesar el archivo: {0}")]
    Decode(String),

    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),

    #[error("El servidor no respondió a tiempo")]
    Timeout,

    #[error("Error del navegador: {0}")]
    ObjectUrl(String),
}

impl ReportError {
    /// Maps a non-2xx HTTP status to its error kind
    pub fn from_status(status: u16, status_text: &str) -> Self {
        match status {
            404 => ReportError::NotFound,
            500 => ReportError::ServerError,
            400 => ReportError::BadParameters,
            _ => ReportError::Http {
                status,
                status_text: status_text.to_string(),
            },
        }
    }
}
