//! User-facing messages for backend failures.

/// Shown when the backend cannot be reached at all.
pub const NETWORK_MESSAGE: &str =
    "No se pudo conectar con el servidor. Verifique su conexión a internet";

const SESSION_EXPIRED: &str = "Su sesión ha expirado. Por favor, inicie sesión nuevamente";
const SERVER_ERROR: &str = "Error en el servidor. Intente nuevamente más tarde";
const UNAVAILABLE: &str = "El servicio no está disponible en este momento. Intente nuevamente más tarde";

/// The operation that failed; messages differ per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAction {
    SubmitDocument,
    ListDocuments,
    CancelDocument,
}

impl ApiAction {
    fn fallback(&self) -> &'static str {
        match self {
            Self::SubmitDocument => {
                "No se pudo generar la factura. Verifique los datos e intente nuevamente"
            }
            Self::ListDocuments => "No se pudieron cargar los documentos. Intente nuevamente",
            Self::CancelDocument => "No se pudo cancelar el documento. Intente nuevamente",
        }
    }
}

/// Message for an HTTP failure of `action`.
///
/// `detail` is the `message` field of the backend's error body, when it had
/// one. It is appended for validation failures and used as-is for statuses
/// with no specific message.
pub fn friendly_message(status: u16, action: ApiAction, detail: Option<&str>) -> String {
    let detail = detail.map(str::trim).filter(|d| !d.is_empty());

    let specific: Option<String> = match (status, action) {
        (400, ApiAction::SubmitDocument) => Some(format!(
            "Datos de factura inválidos:\n{}",
            detail.unwrap_or_default()
        )),
        (400, ApiAction::CancelDocument) => Some(format!(
            "El documento no puede ser cancelado: {}",
            detail.unwrap_or("datos inválidos")
        )),
        (401, _) => Some(SESSION_EXPIRED.into()),
        (403, ApiAction::SubmitDocument) => Some("No tiene permisos para generar facturas".into()),
        (403, ApiAction::ListDocuments) => Some("No tiene permisos para ver los documentos".into()),
        (403, ApiAction::CancelDocument) => {
            Some("No tiene permisos para cancelar documentos".into())
        }
        (404, ApiAction::CancelDocument) => {
            Some("No se encontró el documento con el CDC proporcionado".into())
        }
        (409, ApiAction::CancelDocument) => {
            Some("El documento ya fue cancelado anteriormente".into())
        }
        (409, ApiAction::SubmitDocument) => {
            Some("Ya existe un documento con ese número".into())
        }
        (422, ApiAction::SubmitDocument) => Some(format!(
            "Error en los datos de la factura:\n{}",
            detail.unwrap_or_default()
        )),
        (500, ApiAction::SubmitDocument) => {
            Some("Error en el servidor al procesar la factura. Intente nuevamente".into())
        }
        (500, _) => Some(SERVER_ERROR.into()),
        (503, _) => Some(UNAVAILABLE.into()),
        _ => None,
    };

    specific
        .or_else(|| detail.map(str::to_string))
        .unwrap_or_else(|| action.fallback().to_string())
}
