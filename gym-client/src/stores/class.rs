//! Class store
//!
//! Writes are envelope-checked and reconciled by refetch, mirroring
//! the goods store: this backend pair shares the unreliable
//! write-response behavior.

use shared::ApiResponse;
use shared::models::{Class, ClassRequest, ClassType};

use crate::services::ClassService;
use crate::ClientResult;

use super::state::{ActionResult, Reconcile, StoreState};

/// Owns the canonical class list plus the type lookup list
#[derive(Debug)]
pub struct ClassStore {
    service: ClassService,
    pub state: StoreState<Class>,
    pub types: Vec<ClassType>,
    pub reconcile: Reconcile,
}

impl ClassStore {
    pub fn new(service: ClassService) -> Self {
        Self {
            service,
            state: StoreState::new(),
            types: Vec::new(),
            reconcile: Reconcile::Refetch,
        }
    }

    /// Fetch the full class list
    pub async fn fetch_all(&mut self) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_all(), |s, classes| s.items = classes)
            .await
    }

    /// Fetch one class into the current selection
    pub async fn fetch_by_id(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_by_id(idx), |s, class| s.current = Some(class))
            .await
    }

    /// Fetch the type lookup list
    pub async fn fetch_types(&mut self) -> ActionResult<()> {
        let Self {
            service,
            state,
            types,
            ..
        } = self;
        state
            .run_unit(service.get_class_types(), |_, list| *types = list)
            .await
    }

    /// Create a class (envelope-checked write)
    pub async fn create(&mut self, request: &ClassRequest) -> ActionResult<Class> {
        self.state.begin();
        let outcome = self.service.create(request).await;
        let result = self
            .settle_write(outcome, "Failed to create class", |state, class| {
                state.items.push(class)
            })
            .await;
        self.state.loading = false;
        result
    }

    /// Update a class (envelope-checked write)
    pub async fn update(&mut self, idx: i64, request: &ClassRequest) -> ActionResult<Class> {
        self.state.begin();
        let outcome = self.service.update(idx, request).await;
        let result = self
            .settle_write(outcome, "Failed to update class", move |state, class| {
                state.replace(idx, class)
            })
            .await;
        self.state.loading = false;
        result
    }

    async fn settle_write(
        &mut self,
        outcome: ClientResult<ApiResponse<Class>>,
        fallback: &str,
        splice: impl FnOnce(&mut StoreState<Class>, Class),
    ) -> ActionResult<Class> {
        match outcome {
            Ok(response) => {
                if !response.is_success() {
                    let message = response.message_or(fallback);
                    self.state.error = Some(message.clone());
                    return ActionResult::failed(message);
                }

                let message = response.message;
                match (self.reconcile, response.data) {
                    (Reconcile::Local, Some(class)) => {
                        splice(&mut self.state, class.clone());
                        ActionResult::ok_with_message(class, message)
                    }
                    _ => {
                        self.fetch_all().await;
                        ActionResult::done_with_message(message)
                    }
                }
            }
            Err(err) => self.state.fail(&err),
        }
    }

    /// Delete a class; always a local splice
    pub async fn delete(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.delete(idx), move |s, _| s.remove(idx))
            .await
    }

    /// Reset the current selection to a blank draft; purely local
    pub fn init_new(&mut self) {
        self.state.current = Some(Class::default());
    }

    /// Classes matching the free-text filter (name or description)
    pub fn filtered_classes(&self) -> Vec<&Class> {
        if self.state.filter.is_empty() {
            return self.state.items.iter().collect();
        }

        let keyword = self.state.filter.to_lowercase();
        self.state
            .items
            .iter()
            .filter(|class| {
                class.class_name.to_lowercase().contains(&keyword)
                    || class
                        .description
                        .as_ref()
                        .is_some_and(|text| text.to_lowercase().contains(&keyword))
            })
            .collect()
    }

    /// Classes of a given type
    pub fn classes_by_type(&self, class_type: i64) -> Vec<&Class> {
        self.state
            .items
            .iter()
            .filter(|class| class.class_type == class_type)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientConfig, HttpClient, Session};

    fn store_with(items: Vec<Class>) -> ClassStore {
        let http = HttpClient::new(&ClientConfig::new("http://127.0.0.1:9"), Session::new());
        let mut store = ClassStore::new(ClassService::new(http));
        store.state.items = items;
        store
    }

    fn class(idx: i64, name: &str, class_type: i64) -> Class {
        Class {
            idx,
            class_name: name.to_string(),
            class_type,
            ..Class::default()
        }
    }

    #[test]
    fn test_filter_matches_name_and_description() {
        let mut with_description = class(3, "Spin", 2);
        with_description.description = Some("High intensity".to_string());

        let mut store = store_with(vec![class(1, "Yoga", 1), class(2, "Pilates", 1), with_description]);

        store.state.filter = "yoga".to_string();
        let hits: Vec<i64> = store.filtered_classes().iter().map(|c| c.idx).collect();
        assert_eq!(hits, vec![1]);

        store.state.filter = "intensity".to_string();
        let hits: Vec<i64> = store.filtered_classes().iter().map(|c| c.idx).collect();
        assert_eq!(hits, vec![3]);
    }

    #[test]
    fn test_classes_by_type() {
        let store = store_with(vec![class(1, "Yoga", 1), class(2, "Pilates", 1), class(3, "Spin", 2)]);
        let group: Vec<i64> = store.classes_by_type(1).iter().map(|c| c.idx).collect();
        assert_eq!(group, vec![1, 2]);
    }
}
