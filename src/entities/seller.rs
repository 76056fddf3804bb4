//! Seller applications reviewed by admins

use crate::core::mutation::{AuditEntry, BulkAction};
use crate::core::record::{Filterable, Moderated};
use crate::entities::submission::{ApprovalStatus, Document};
use crate::impl_record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerApplication {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub store_name: String,
    pub location: String,
    pub registration_date: NaiveDate,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub audit_log: Vec<AuditEntry>,
}

impl SellerApplication {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        store_name: impl Into<String>,
        location: impl Into<String>,
        registration_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            store_name: store_name.into(),
            location: location.into(),
            registration_date,
            status: ApprovalStatus::Pending,
            description: String::new(),
            documents: Vec::new(),
            audit_log: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = status;
        self
    }
}

impl Filterable for SellerApplication {
    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.store_name.as_str(), self.email.as_str()]
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn location(&self) -> Option<&str> {
        Some(self.location.as_str())
    }
}

impl_record!(
    SellerApplication,
    resource: "sellers",
    id: String => id,
    fields: {
        "id" => |s| &s.id,
        "name" => |s| &s.name,
        "storeName" => |s| &s.store_name,
        "email" => |s| &s.email,
        "location" => |s| &s.location,
        "registrationDate" => |s| s.registration_date,
        "status" => |s| s.status.as_str(),
    }
);

impl Moderated for SellerApplication {
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
