pub mod activity_outcome;
pub mod activity_type;
pub mod payment_status;
pub mod scheme_kind;

pub use activity_outcome::ActivityOutcome;
pub use activity_type::ActivityType;
pub use payment_status::PaymentStatus;
pub use scheme_kind::{DiscountType, SchemeStatus, SchemeType};
