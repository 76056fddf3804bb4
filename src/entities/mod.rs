//! Record types served by the catalog

#[macro_use]
pub mod macros;

pub mod order;
pub mod product;
pub mod seller;
pub mod submission;
pub mod user;

pub use order::{Customer, Order, OrderStatus};
pub use product::Product;
pub use seller::SellerApplication;
pub use submission::{ApprovalStatus, Document, ProductSubmission};
pub use user::{PlatformUser, UserStatus, UserType};
