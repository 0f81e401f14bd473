//! Goods store
//!
//! Create and update reconcile by refetch: the backend's write
//! responses for goods are unreliable carriers of the written row, so
//! success is judged on the envelope status and the full list is
//! fetched again. An envelope status outside [200,300) is a domain
//! failure even on an HTTP-successful call, and must not refetch.

use shared::ApiResponse;
use shared::models::{Goods, GoodsRequest, GoodsType};

use crate::services::GoodsService;
use crate::ClientResult;

use super::state::{ActionResult, Reconcile, StoreState};

/// Owns the canonical goods list plus the type lookup list
#[derive(Debug)]
pub struct GoodsStore {
    service: GoodsService,
    pub state: StoreState<Goods>,
    pub types: Vec<GoodsType>,
    pub reconcile: Reconcile,
}

impl GoodsStore {
    pub fn new(service: GoodsService) -> Self {
        Self {
            service,
            state: StoreState::new(),
            types: Vec::new(),
            reconcile: Reconcile::Refetch,
        }
    }

    /// Fetch the full goods list
    pub async fn fetch_all(&mut self) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_all(), |s, goods| s.items = goods)
            .await
    }

    /// Fetch one goods row into the current selection
    pub async fn fetch_by_id(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_by_id(idx), |s, goods| s.current = Some(goods))
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
            .run_unit(service.get_goods_types(), |_, list| *types = list)
            .await
    }

    /// Create goods (envelope-checked write)
    pub async fn create(&mut self, request: &GoodsRequest) -> ActionResult<Goods> {
        self.state.begin();
        let outcome = self.service.create(request).await;
        let result = self
            .settle_write(outcome, "Failed to create goods", |state, goods| {
                state.items.push(goods)
            })
            .await;
        self.state.loading = false;
        result
    }

    /// Update goods (envelope-checked write)
    pub async fn update(&mut self, idx: i64, request: &GoodsRequest) -> ActionResult<Goods> {
        self.state.begin();
        let outcome = self.service.update(idx, request).await;
        let result = self
            .settle_write(outcome, "Failed to update goods", move |state, goods| {
                state.replace(idx, goods)
            })
            .await;
        self.state.loading = false;
        result
    }

    /// Settle an envelope-checked write: judge `status`, then
    /// reconcile. `Local` splices when the backend did echo the row
    /// and falls back to a refetch on the documented null-data quirk.
    async fn settle_write(
        &mut self,
        outcome: ClientResult<ApiResponse<Goods>>,
        fallback: &str,
        splice: impl FnOnce(&mut StoreState<Goods>, Goods),
    ) -> ActionResult<Goods> {
        match outcome {
            Ok(response) => {
                if !response.is_success() {
                    let message = response.message_or(fallback);
                    self.state.error = Some(message.clone());
                    return ActionResult::failed(message);
                }

                let message = response.message;
                match (self.reconcile, response.data) {
                    (Reconcile::Local, Some(goods)) => {
                        splice(&mut self.state, goods.clone());
                        ActionResult::ok_with_message(goods, message)
                    }
                    _ => {
                        // Stale until this resolves; a failed refetch
                        // surfaces on the error flag only
                        self.fetch_all().await;
                        ActionResult::done_with_message(message)
                    }
                }
            }
            Err(err) => self.state.fail(&err),
        }
    }

    /// Delete goods; always a local splice
    pub async fn delete(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.delete(idx), move |s, _| s.remove(idx))
            .await
    }

    /// Reset the current selection to a blank draft; purely local
    pub fn init_new(&mut self) {
        self.state.current = Some(Goods::default());
    }

    /// Goods matching the free-text filter (name or description)
    pub fn filtered_goods(&self) -> Vec<&Goods> {
        if self.state.filter.is_empty() {
            return self.state.items.iter().collect();
        }

        let keyword = self.state.filter.to_lowercase();
        self.state
            .items
            .iter()
            .filter(|goods| {
                goods.goods_name.to_lowercase().contains(&keyword)
                    || goods
                        .description
                        .as_ref()
                        .is_some_and(|text| text.to_lowercase().contains(&keyword))
            })
            .collect()
    }

    /// Goods of a given type
    pub fn goods_by_type(&self, goods_type: i64) -> Vec<&Goods> {
        self.state
            .items
            .iter()
            .filter(|goods| goods.goods_type == goods_type)
            .collect()
    }
}
