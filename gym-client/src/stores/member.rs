//! Member store

use shared::models::{Member, MemberRequest};

use crate::services::MemberService;

use super::state::{ActionResult, Reconcile, StoreState};

/// Owns the canonical member list, the current selection and the
/// loading/error/filter state
#[derive(Debug)]
pub struct MemberStore {
    service: MemberService,
    pub state: StoreState<Member>,
    pub reconcile: Reconcile,
}

impl MemberStore {
    pub fn new(service: MemberService) -> Self {
        Self {
            service,
            state: StoreState::new(),
            reconcile: Reconcile::Local,
        }
    }

    /// Fetch the full member list
    pub async fn fetch_all(&mut self) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_all(), |s, members| s.items = members)
            .await
    }

    /// Fetch one member into the current selection
    pub async fn fetch_by_id(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_by_id(idx), |s, member| s.current = Some(member))
            .await
    }

    /// Replace the list with a keyword search result
    pub async fn search(&mut self, keyword: &str) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.search(keyword), |s, members| s.items = members)
            .await
    }

    /// Create a member and reconcile the collection
    pub async fn create(&mut self, request: &MemberRequest) -> ActionResult<Member> {
        let reconcile = self.reconcile;
        let result = {
            let Self { service, state, .. } = self;
            state
                .run(service.create(request), move |s, member| {
                    if reconcile == Reconcile::Local {
                        s.items.push(member.clone());
                    }
                })
                .await
        };
        if reconcile == Reconcile::Refetch && result.success {
            self.fetch_all().await;
        }
        result
    }

    /// Update a member and reconcile the collection
    pub async fn update(&mut self, idx: i64, request: &MemberRequest) -> ActionResult<Member> {
        let reconcile = self.reconcile;
        let result = {
            let Self { service, state, .. } = self;
            state
                .run(service.update(idx, request), move |s, member| {
                    if reconcile == Reconcile::Local {
                        s.replace(idx, member.clone());
                    }
                })
                .await
        };
        if reconcile == Reconcile::Refetch && result.success {
            self.fetch_all().await;
        }
        result
    }

    /// Delete a member; the local copy is removed only after the call
    /// resolves without error
    pub async fn delete(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.delete(idx), move |s, _| s.remove(idx))
            .await
    }

    /// Reset the current selection to a blank draft for the new-member
    /// form; purely local
    pub fn init_new(&mut self) {
        self.state.current = Some(Member::default());
    }

    /// Members matching the free-text filter (case-insensitive
    /// substring over name, phone and consultant name)
    pub fn filtered_members(&self) -> Vec<&Member> {
        if self.state.filter.is_empty() {
            return self.state.items.iter().collect();
        }

        let keyword = self.state.filter.to_lowercase();
        self.state
            .items
            .iter()
            .filter(|member| {
                member.user_name.to_lowercase().contains(&keyword)
                    || member.phone.contains(&keyword)
                    || member
                        .consultant_name
                        .as_ref()
                        .is_some_and(|name| name.to_lowercase().contains(&keyword))
            })
            .collect()
    }

    /// Members in the active status
    pub fn active_members(&self) -> Vec<&Member> {
        self.state
            .items
            .iter()
            .filter(|member| member.status == Some(1))
            .collect()
    }

    /// Members expiring within seven days
    pub fn expiring_members(&self) -> Vec<&Member> {
        self.state
            .items
            .iter()
            .filter(|member| member.day_num.is_some_and(|days| days > 0 && days <= 7))
            .collect()
    }
}
