//! Entity and category API services
//!
//! Stateless mappings from a domain operation to exactly one HTTP call.
//! Services never catch: transport failures propagate unchanged, and a
//! non-2xx envelope status inside an HTTP 200 is handed back to the
//! caller wherever the backend is known to produce one.

pub mod category;
pub mod class;
pub mod event;
pub mod goods;
pub mod member;
pub mod purchase;
pub mod staff;

pub use category::{
    ClassTypeRequest, ClassTypeService, GoodsTypeRequest, GoodsTypeService, MemberStatusRequest,
    MemberStatusService, PurposeRequest, PurposeService, StaffGradeRequest, StaffGradeService,
    VisitPathRequest, VisitPathService,
};
pub use class::ClassService;
pub use event::EventService;
pub use goods::GoodsService;
pub use member::MemberService;
pub use purchase::PurchaseService;
pub use staff::StaffService;

use crate::{ClientError, ClientResult};
use shared::ApiResponse;

/// Unwrap the envelope `data`, failing when the backend omitted it
pub(crate) fn take_data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
    response
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what} data")))
}
