//! Purchase store

use shared::models::{Purchase, PurchaseRequest};

use crate::services::PurchaseService;

use super::state::{ActionResult, Reconcile, StoreState};

/// Owns the canonical purchase list
#[derive(Debug)]
pub struct PurchaseStore {
    service: PurchaseService,
    pub state: StoreState<Purchase>,
    pub reconcile: Reconcile,
}

impl PurchaseStore {
    pub fn new(service: PurchaseService) -> Self {
        Self {
            service,
            state: StoreState::new(),
            reconcile: Reconcile::Local,
        }
    }

    /// Fetch the full purchase list
    pub async fn fetch_all(&mut self) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_all(), |s, purchases| s.items = purchases)
            .await
    }

    /// Fetch one purchase into the current selection
    pub async fn fetch_by_id(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_by_id(idx), |s, purchase| {
                s.current = Some(purchase)
            })
            .await
    }

    /// Create a single purchase and reconcile the collection
    pub async fn create(&mut self, request: &PurchaseRequest) -> ActionResult<Purchase> {
        let reconcile = self.reconcile;
        let result = {
            let Self { service, state, .. } = self;
            state
                .run(service.create(request), move |s, purchase| {
                    if reconcile == Reconcile::Local {
                        s.items.push(purchase.clone());
                    }
                })
                .await
        };
        if reconcile == Reconcile::Refetch && result.success {
            self.fetch_all().await;
        }
        result
    }

    /// Create several purchases in one request and reconcile
    pub async fn create_bulk(
        &mut self,
        requests: &[PurchaseRequest],
    ) -> ActionResult<Vec<Purchase>> {
        let reconcile = self.reconcile;
        let result = {
            let Self { service, state, .. } = self;
            state
                .run(service.create_bulk(requests), move |s, purchases| {
                    if reconcile == Reconcile::Local {
                        s.items.extend(purchases.iter().cloned());
                    }
                })
                .await
        };
        if reconcile == Reconcile::Refetch && result.success {
            self.fetch_all().await;
        }
        result
    }

    /// Update a purchase and reconcile the collection
    pub async fn update(&mut self, idx: i64, request: &PurchaseRequest) -> ActionResult<Purchase> {
        let reconcile = self.reconcile;
        let result = {
            let Self { service, state, .. } = self;
            state
                .run(service.update(idx, request), move |s, purchase| {
                    if reconcile == Reconcile::Local {
                        s.replace(idx, purchase.clone());
                    }
                })
                .await
        };
        if reconcile == Reconcile::Refetch && result.success {
            self.fetch_all().await;
        }
        result
    }

    /// Delete a purchase; always a local splice
    pub async fn delete(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.delete(idx), move |s, _| s.remove(idx))
            .await
    }

    /// Reset the current selection to a blank draft; purely local
    pub fn init_new(&mut self) {
        self.state.current = Some(Purchase::default());
    }

    /// Purchases matching the free-text filter
    ///
    /// Matches item name, buyer, phone or the type label.
    pub fn filtered_purchases(&self) -> Vec<&Purchase> {
        if self.state.filter.is_empty() {
            return self.state.items.iter().collect();
        }

        let keyword = self.state.filter.to_lowercase();
        self.state
            .items
            .iter()
            .filter(|purchase| {
                purchase.name.to_lowercase().contains(&keyword)
                    || purchase.buyer.to_lowercase().contains(&keyword)
                    || purchase.phone.contains(&keyword)
                    || purchase.purchase_type.to_lowercase().contains(&keyword)
            })
            .collect()
    }

    /// Purchases paid with a given method
    pub fn purchases_by_payment_method(&self, method: &str) -> Vec<&Purchase> {
        self.state
            .items
            .iter()
            .filter(|purchase| purchase.payment_method == method)
            .collect()
    }

    /// Purchases in a given status
    pub fn purchases_by_status(&self, status: i64) -> Vec<&Purchase> {
        self.state
            .items
            .iter()
            .filter(|purchase| purchase.status == status)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientConfig, HttpClient, Session};

    fn store_with(items: Vec<Purchase>) -> PurchaseStore {
        let http = HttpClient::new(&ClientConfig::new("http://127.0.0.1:9"), Session::new());
        let mut store = PurchaseStore::new(PurchaseService::new(http));
        store.state.items = items;
        store
    }

    fn purchase(idx: i64, name: &str, buyer: &str, method: &str, status: i64) -> Purchase {
        Purchase {
            idx,
            purchase_type: "Membership".into(),
            name: name.into(),
            buyer: buyer.into(),
            cnt: 1,
            price: 100,
            payment_method: method.into(),
            paid_at: "2024-01-01".into(),
            status,
            phone: "01012345678".into(),
            status_name: "Paid".into(),
        }
    }

    #[test]
    fn test_filter_matches_buyer_and_name() {
        let mut store = store_with(vec![
            purchase(1, "PT 10", "Kim", "card", 1),
            purchase(2, "Yoga pass", "Lee", "cash", 1),
        ]);
        store.state.filter = "kim".into();
        let found = store.filtered_purchases();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].idx, 1);

        store.state.filter = "yoga".into();
        let found = store.filtered_purchases();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].idx, 2);
    }

    #[test]
    fn test_payment_method_and_status_getters() {
        let store = store_with(vec![
            purchase(1, "PT 10", "Kim", "card", 1),
            purchase(2, "Yoga pass", "Lee", "cash", 1),
            purchase(3, "Locker", "Park", "card", 2),
        ]);

        let by_card: Vec<i64> = store
            .purchases_by_payment_method("card")
            .iter()
            .map(|p| p.idx)
            .collect();
        assert_eq!(by_card, vec![1, 3]);

        let refunded: Vec<i64> = store.purchases_by_status(2).iter().map(|p| p.idx).collect();
        assert_eq!(refunded, vec![3]);
    }
}
