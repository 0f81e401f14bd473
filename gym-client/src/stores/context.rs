//! Store context
//!
//! The application-wide bundle of stores, built once over a shared
//! `HttpClient` and passed down by reference. There is no global
//! instance; tests and the UI shell each own their context.

use crate::services::{
    ClassService, ClassTypeService, EventService, GoodsService, GoodsTypeService,
    MemberService, MemberStatusService, PurchaseService, PurposeService, StaffGradeService,
    StaffService, VisitPathService,
};
use crate::{ClientConfig, HttpClient, Session};

use super::category::{CategoryServices, CategoryStore};
use super::class::ClassStore;
use super::event::EventStore;
use super::goods::GoodsStore;
use super::member::MemberStore;
use super::purchase::PurchaseStore;
use super::staff::StaffStore;

/// Every store of the data layer, sharing one HTTP client and session
#[derive(Debug)]
pub struct StoreContext {
    pub members: MemberStore,
    pub staff: StaffStore,
    pub goods: GoodsStore,
    pub classes: ClassStore,
    pub purchases: PurchaseStore,
    pub events: EventStore,
    pub categories: CategoryStore,
}

impl StoreContext {
    pub fn new(http: HttpClient) -> Self {
        // The delegating category services share the owning entity's
        // service instance
        let staff_service = StaffService::new(http.clone());
        let goods_service = GoodsService::new(http.clone());
        let class_service = ClassService::new(http.clone());

        let categories = CategoryServices {
            purpose: PurposeService::new(http.clone()),
            visit_path: VisitPathService::new(http.clone()),
            member_status: MemberStatusService::new(http.clone()),
            staff_grade: StaffGradeService::new(http.clone(), staff_service.clone()),
            goods_type: GoodsTypeService::new(http.clone(), goods_service.clone()),
            class_type: ClassTypeService::new(http.clone(), class_service.clone()),
        };

        Self {
            members: MemberStore::new(MemberService::new(http.clone())),
            staff: StaffStore::new(staff_service),
            goods: GoodsStore::new(goods_service),
            classes: ClassStore::new(class_service),
            purchases: PurchaseStore::new(PurchaseService::new(http.clone())),
            events: EventStore::new(EventService::new(http)),
            categories: CategoryStore::new(categories),
        }
    }

    pub fn from_config(config: &ClientConfig, session: Session) -> Self {
        Self::new(HttpClient::new(config, session))
    }
}
