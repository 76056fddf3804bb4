//! Product submissions awaiting admin approval

use crate::core::export::Exportable;
use crate::core::mutation::{AuditEntry, BulkAction};
use crate::core::record::{Filterable, Moderated};
use crate::impl_record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Review status shared by submissions and seller applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    /// Status resulting from an approval action, if it is one
    pub fn from_action(action: BulkAction) -> Option<Self> {
        match action {
            BulkAction::Approve => Some(ApprovalStatus::Approved),
            BulkAction::Reject => Some(ApprovalStatus::Rejected),
            BulkAction::Block | BulkAction::Unblock => None,
        }
    }
}

/// Supporting file attached by the seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSubmission {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub seller: String,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub description: String,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub audit_log: Vec<AuditEntry>,
}

impl ProductSubmission {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        seller: impl Into<String>,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            seller: seller.into(),
            status: ApprovalStatus::Pending,
            description: String::new(),
            created_at,
            documents: Vec::new(),
            audit_log: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = status;
        self
    }
}

impl Filterable for ProductSubmission {
    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.seller.as_str(), self.category.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn range_value(&self) -> Option<f64> {
        Some(self.price)
    }
}

impl_record!(
    ProductSubmission,
    resource: "submissions",
    id: String => id,
    fields: {
        "id" => |s| &s.id,
        "name" => |s| &s.name,
        "category" => |s| &s.category,
        "price" => |s| s.price,
        "seller" => |s| &s.seller,
        "status" => |s| s.status.as_str(),
        "createdAt" => |s| s.created_at,
    }
);

impl Moderated for ProductSubmission {
    fn supports(action: BulkAction) -> bool {
        ApprovalStatus::from_action(action).is_some()
    }

    fn apply_action(&mut self, action: BulkAction) {
        if let Some(status) = ApprovalStatus::from_action(action) {
            self.status = status;
        }
    }

    fn status_label(&self) -> &str {
        self.status.as_str()
    }

    fn record_audit(&mut self, entry: &AuditEntry) {
        self.audit_log.push(entry.clone());
    }
}

impl Exportable for ProductSubmission {
    fn csv_headers() -> &'static [&'static str] {
        &["Name", "Category", "Price", "Seller", "Status", "Created At"]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.category.clone(),
            self.price.to_string(),
            self.seller.clone(),
            self.status.as_str().to_string(),
            self.created_at.to_string(),
        ]
    }

    fn csv_file_name() -> &'static str {
        "products.csv"
    }
}
