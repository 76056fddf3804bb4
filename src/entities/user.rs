//! Platform accounts managed from the admin console

use crate::core::record::{Filterable, Moderated};
use crate::core::mutation::BulkAction;
use crate::impl_record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Buyer,
    Seller,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Buyer => "buyer",
            UserType::Seller => "seller",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Blocked => "blocked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub status: UserStatus,
    pub registered_at: NaiveDate,
}

impl PlatformUser {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        user_type: UserType,
        registered_at: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            user_type,
            status: UserStatus::Active,
            registered_at,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.status == UserStatus::Blocked
    }
}

// The account type is searchable too, so "seller" finds every seller.
impl Filterable for PlatformUser {
    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.user_type.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.user_type.as_str())
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl_record!(
    PlatformUser,
    resource: "users",
    id: String => id,
    fields: {
        "id" => |u| &u.id,
        "name" => |u| &u.name,
        "email" => |u| &u.email,
        "type" => |u| u.user_type.as_str(),
        "status" => |u| u.status.as_str(),
        "registeredAt" => |u| u.registered_at,
    }
);

impl Moderated for PlatformUser {
    fn supports(action: BulkAction) -> bool {
        matches!(action, BulkAction::Block | BulkAction::Unblock)
    }

    fn apply_action(&mut self, action: BulkAction) {
        match action {
            BulkAction::Block => self.status = UserStatus::Blocked,
            BulkAction::Unblock => self.status = UserStatus::Active,
            BulkAction::Approve | BulkAction::Reject => {}
        }
    }

    fn status_label(&self) -> &str {
        self.status.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> PlatformUser {
        PlatformUser::new(
            "u-1",
            "Eric Mugisha",
            "eric@example.rw",
            UserType::Seller,
            NaiveDate::from_ymd_opt(2023, 11, 4).unwrap(),
        )
    }

    #[test]
    fn test_block_unblock() {
        let mut u = user();
        u.apply_action(BulkAction::Block);
        assert!(u.is_blocked());
        u.apply_action(BulkAction::Unblock);
        assert_eq!(u.status_label(), "active");
    }

    #[test]
    fn test_rejects_approval_actions() {
        assert!(!PlatformUser::supports(BulkAction::Approve));
        assert!(PlatformUser::supports(BulkAction::Block));
    }

    #[test]
    fn test_type_serializes_as_type() {
        let json = serde_json::to_value(user()).unwrap();
        assert_eq!(json["type"], "seller");
        assert_eq!(json["registeredAt"], "2023-11-04");
    }
}
