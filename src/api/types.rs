//! Request and response shapes of the document endpoints.

use serde::{Deserialize, Serialize};

/// Processing state of an issued document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentStatus {
    Pendiente,
    Enviado,
    Aprobado,
    Rechazado,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Enviado => "ENVIADO",
            Self::Aprobado => "APROBADO",
            Self::Rechazado => "RECHAZADO",
        }
    }

    /// Whether the document is in a final state.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Aprobado | Self::Rechazado)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Filters and paging for the document listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDocumentsParams {
    pub status: Option<DocumentStatus>,
    pub document_number: Option<String>,
    pub cdc: Option<String>,
    /// 1-based page.
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl ListDocumentsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: DocumentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn document_number(mut self, number: impl Into<String>) -> Self {
        self.document_number = Some(number.into());
        self
    }

    pub fn cdc(mut self, cdc: impl Into<String>) -> Self {
        self.cdc = Some(cdc.into());
        self
    }

    pub fn page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = Some(order);
        self
    }

    /// Query string pairs in backend order. Blank strings and zero paging
    /// values are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        fn text(v: &Option<String>) -> Option<&str> {
            v.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }
        let positive = |v: Option<u32>| v.filter(|n| *n > 0);

        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("estado", status.as_str().to_string()));
        }
        if let Some(number) = text(&self.document_number) {
            pairs.push(("numeroDocumento", number.to_string()));
        }
        if let Some(cdc) = text(&self.cdc) {
            pairs.push(("cdc", cdc.to_string()));
        }
        if let Some(page) = positive(self.page) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = positive(self.limit) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(field) = text(&self.sort_by) {
            pairs.push(("sortBy", field.to_string()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.as_str().to_string()));
        }
        pairs
    }
}

/// Submission batch (lote) a document was sent in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub id: u64,
    #[serde(rename = "numeroLote")]
    pub batch_number: String,
    #[serde(rename = "estado")]
    pub status: String,
}

/// One row of the document listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentItem {
    pub id: u64,
    #[serde(rename = "numeroDocumento")]
    pub document_number: String,
    #[serde(rename = "estado")]
    pub status: DocumentStatus,
    /// Código de control (44-digit document key).
    pub cdc: String,
    #[serde(rename = "fechaCreacion")]
    pub created_at: String,
    #[serde(rename = "fechaActualizacion")]
    pub updated_at: String,
    #[serde(rename = "lote")]
    pub batch: Batch,
    /// Signed XML, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDocumentsResponse {
    #[serde(rename = "documentos")]
    pub documents: Vec<DocumentItem>,
    #[serde(rename = "paginacion")]
    pub pagination: Pagination,
}

/// Document created by a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedDocument {
    pub id: u64,
    #[serde(rename = "numeroDocumento")]
    pub document_number: String,
    pub cdc: String,
    #[serde(rename = "estado")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDocumentResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "documento", default, skip_serializing_if = "Option::is_none")]
    pub document: Option<CreatedDocument>,
}

/// Acknowledgement of a cancellation event request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelDocumentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Error body returned by the backend on failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
