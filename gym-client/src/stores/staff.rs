//! Staff store

use shared::models::{Staff, StaffGrade, StaffRequest};

use crate::services::StaffService;

use super::state::{ActionResult, Reconcile, StoreState};

/// Owns the canonical staff list plus the grade lookup list
#[derive(Debug)]
pub struct StaffStore {
    service: StaffService,
    pub state: StoreState<Staff>,
    pub grades: Vec<StaffGrade>,
    pub reconcile: Reconcile,
}

impl StaffStore {
    pub fn new(service: StaffService) -> Self {
        Self {
            service,
            state: StoreState::new(),
            grades: Vec::new(),
            reconcile: Reconcile::Local,
        }
    }

    /// Fetch the full staff list
    pub async fn fetch_all(&mut self) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_all(), |s, staff| s.items = staff)
            .await
    }

    /// Fetch one staff member into the current selection
    pub async fn fetch_by_id(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_by_id(idx), |s, staff| s.current = Some(staff))
            .await
    }

    /// Fetch the grade lookup list
    pub async fn fetch_grades(&mut self) -> ActionResult<()> {
        let Self {
            service,
            state,
            grades,
            ..
        } = self;
        state
            .run_unit(service.get_grade_list(), |_, list| *grades = list)
            .await
    }

    /// Replace the list with a keyword search result
    pub async fn search(&mut self, keyword: &str) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.search(keyword), |s, staff| s.items = staff)
            .await
    }

    /// Create a staff member and reconcile the collection
    pub async fn create(&mut self, request: &StaffRequest) -> ActionResult<Staff> {
        let reconcile = self.reconcile;
        let result = {
            let Self { service, state, .. } = self;
            state
                .run(service.create(request), move |s, staff| {
                    if reconcile == Reconcile::Local {
                        s.items.push(staff.clone());
                    }
                })
                .await
        };
        if reconcile == Reconcile::Refetch && result.success {
            self.fetch_all().await;
        }
        result
    }

    /// Update a staff member and reconcile the collection
    pub async fn update(&mut self, idx: i64, request: &StaffRequest) -> ActionResult<Staff> {
        let reconcile = self.reconcile;
        let result = {
            let Self { service, state, .. } = self;
            state
                .run(service.update(idx, request), move |s, staff| {
                    if reconcile == Reconcile::Local {
                        s.replace(idx, staff.clone());
                    }
                })
                .await
        };
        if reconcile == Reconcile::Refetch && result.success {
            self.fetch_all().await;
        }
        result
    }

    /// Delete a staff member
    pub async fn delete(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.delete(idx), move |s, _| s.remove(idx))
            .await
    }

    /// Reset the current selection to a blank draft; purely local
    pub fn init_new(&mut self) {
        self.state.current = Some(Staff::default());
    }

    /// Staff matching the free-text filter (name or grade name)
    pub fn filtered_staff(&self) -> Vec<&Staff> {
        if self.state.filter.is_empty() {
            return self.state.items.iter().collect();
        }

        let keyword = self.state.filter.to_lowercase();
        self.state
            .items
            .iter()
            .filter(|staff| {
                staff.name.to_lowercase().contains(&keyword)
                    || staff.grade_name.to_lowercase().contains(&keyword)
            })
            .collect()
    }
}
