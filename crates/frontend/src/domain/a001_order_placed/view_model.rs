//! ViewModel for the order confirmation page

use super::api;
use super::model::{resolve_view, FetchResult, OrderPlacedView};
use contracts::domain::a001_order_group::aggregate::OrderGroupDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct OrderPlacedVm {
    pub order_group: StoredValue<Option<String>>,
    pub result: RwSignal<FetchResult<OrderGroupDto>>,
}

impl OrderPlacedVm {
    pub fn new(order_group: Option<String>) -> Self {
        Self {
            order_group: StoredValue::new(order_group),
            result: RwSignal::new(FetchResult::Pending),
        }
    }

    /// View for the latest fetch result. Recomputed whenever a result arrives.
    pub fn view(&self) -> Memo<OrderPlacedView> {
        let result = self.result;
        Memo::new(move |_| result.with(resolve_view))
    }

    /// Starts the fetch. The result is dropped if the signal is disposed
    /// before it arrives.
    pub fn load(&self) {
        let order_group = self.order_group.get_value();
        let vm = *self;

        self.result.set(FetchResult::Pending);
        log::debug!("order group fetch started: og={:?}", order_group);

        spawn_local(async move {
            let fetched = api::fetch_order_group(order_group).await;
            if let FetchResult::Failed { message } = &fetched {
                log::warn!("order group fetch failed: {}", message);
            }
            vm.deliver(fetched);
        });
    }

    /// Writes a settled result. Returns `false` when the page was torn down
    /// in the meantime and the result was dropped.
    pub fn deliver(&self, fetched: FetchResult<OrderGroupDto>) -> bool {
        let name = resolve_view(&fetched).name();
        if self.result.try_set(fetched).is_some() {
            log::debug!("order group fetch settled after teardown, result dropped");
            return false;
        }
        log::debug!("order group fetch settled: {}", name);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_updates_live_page() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = OrderPlacedVm::new(Some("abc123".to_string()));
            assert_eq!(vm.result.get_untracked(), FetchResult::Pending);

            let failed = FetchResult::Failed {
                message: "status code 403".to_string(),
            };
            assert!(vm.deliver(failed.clone()));
            assert_eq!(vm.result.get_untracked(), failed);
        });
    }

    #[test]
    fn test_deliver_after_teardown_is_dropped() {
        let owner = Owner::new();
        let vm = owner.with(|| OrderPlacedVm::new(None));
        vm.result.dispose();

        assert!(!vm.deliver(FetchResult::Succeeded { data: None }));
        assert!(vm.result.try_get_untracked().is_none());
    }
}
