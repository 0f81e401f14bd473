//! Calendar event store

use shared::models::{Event, EventRequest};

use crate::services::EventService;

use super::state::{ActionResult, Reconcile, StoreState};

/// Owns the calendar event list
///
/// The items hold whichever scope was fetched last, either the full
/// list or a single month.
#[derive(Debug)]
pub struct EventStore {
    service: EventService,
    pub state: StoreState<Event>,
    pub reconcile: Reconcile,
}

impl EventStore {
    pub fn new(service: EventService) -> Self {
        Self {
            service,
            state: StoreState::new(),
            reconcile: Reconcile::Local,
        }
    }

    /// Fetch the full event list
    pub async fn fetch_all(&mut self) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_all(), |s, events| s.items = events)
            .await
    }

    /// Replace the list with one month of events
    pub async fn fetch_by_year_month(&mut self, year: i32, month: u32) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_by_year_month(year, month), |s, events| {
                s.items = events
            })
            .await
    }

    /// Fetch one event into the current selection
    pub async fn fetch_by_id(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.get_by_id(idx), |s, event| s.current = Some(event))
            .await
    }

    /// Create an event and reconcile the collection
    ///
    /// The appended Event carries the client-synthesized idx; the real
    /// one appears on the next fetch.
    pub async fn create(&mut self, request: &EventRequest) -> ActionResult<Event> {
        let reconcile = self.reconcile;
        let result = {
            let Self { service, state, .. } = self;
            state
                .run(service.create(request), move |s, event| {
                    if reconcile == Reconcile::Local {
                        s.items.push(event.clone());
                    }
                })
                .await
        };
        if reconcile == Reconcile::Refetch && result.success {
            self.fetch_all().await;
        }
        result
    }

    /// Update an event and reconcile the collection
    pub async fn update(&mut self, idx: i64, request: &EventRequest) -> ActionResult<Event> {
        let reconcile = self.reconcile;
        let result = {
            let Self { service, state, .. } = self;
            state
                .run(service.update(idx, request), move |s, event| {
                    if reconcile == Reconcile::Local {
                        s.replace(idx, event.clone());
                    }
                })
                .await
        };
        if reconcile == Reconcile::Refetch && result.success {
            self.fetch_all().await;
        }
        result
    }

    /// Delete an event; always a local splice
    pub async fn delete(&mut self, idx: i64) -> ActionResult<()> {
        let Self { service, state, .. } = self;
        state
            .run_unit(service.delete(idx), move |s, _| s.remove(idx))
            .await
    }

    /// Reset the current selection to a blank draft; purely local
    pub fn init_new(&mut self) {
        self.state.current = Some(Event::default());
    }

    /// Look an event up by idx in the loaded list
    pub fn event_by_idx(&self, idx: i64) -> Option<&Event> {
        self.state.items.iter().find(|event| event.idx == idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientConfig, HttpClient, Session};

    fn store_with(items: Vec<Event>) -> EventStore {
        let http = HttpClient::new(&ClientConfig::new("http://127.0.0.1:9"), Session::new());
        let mut store = EventStore::new(EventService::new(http));
        store.state.items = items;
        store
    }

    fn event(idx: i64, title: &str) -> Event {
        Event {
            idx,
            title: title.to_string(),
            ..Event::default()
        }
    }

    #[test]
    fn test_event_by_idx() {
        let store = store_with(vec![event(1, "PT"), event(2, "Yoga")]);
        assert_eq!(store.event_by_idx(2).map(|e| e.title.as_str()), Some("Yoga"));
        assert!(store.event_by_idx(9).is_none());
    }

    #[test]
    fn test_init_new_is_a_blank_draft() {
        let mut store = store_with(vec![]);
        store.init_new();

        let draft = store.state.current.as_ref().unwrap();
        assert_eq!(draft.idx, 0);
        assert!(draft.title.is_empty());
        assert_eq!(draft.all_day, 0);
    }
}
