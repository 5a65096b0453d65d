use super::header::Header;
use super::order_info::OrderInfo;
use crate::domain::a001_order_placed::model::PlacedOrderGroup;
use crate::shared::currency::CurrencyProvider;
use crate::shared::document::set_document_title;
use crate::shared::i18n::{message, use_locale};
use contracts::domain::a001_order_group::aggregate::OrderDto;
use leptos::prelude::*;

/// Orders in display sequence, each with its position in the group.
fn order_sections(group: &PlacedOrderGroup) -> Vec<(usize, OrderDto)> {
    group.orders().iter().cloned().enumerate().collect()
}

/// Content view of a validated order group. Everything below it reads the
/// group currency from the provider set up here.
#[component]
pub fn OrderPlacedContent(group: PlacedOrderGroup, in_store: bool) -> impl IntoView {
    set_document_title(&message(use_locale(), "page.title"));

    let currency = group.currency();
    let profile = group.first_order().client_profile_data.clone();
    let orders = order_sections(&group);
    let num_of_orders = orders.len();

    view! {
        <CurrencyProvider code=currency>
            <Header group=group profile=profile in_store=in_store />
            <main class="order-placed__orders">
                <For
                    each=move || orders.clone()
                    key=|(_, order)| order.order_id.clone()
                    children=move |(index, order)| {
                        let profile = order.client_profile_data.clone();
                        view! {
                            <OrderInfo
                                order=order
                                profile=profile
                                index=index
                                num_of_orders=num_of_orders
                            />
                        }
                    }
                />
            </main>
        </CurrencyProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order_group::aggregate::{OrderGroupDto, StorePreferencesDataDto};

    fn placed(ids: &[&str]) -> PlacedOrderGroup {
        let orders = ids
            .iter()
            .map(|id| OrderDto {
                order_id: id.to_string(),
                status: None,
                creation_date: None,
                client_profile_data: Default::default(),
                store_preferences_data: StorePreferencesDataDto {
                    currency_code: "BRL".to_string(),
                },
                items: Vec::new(),
                totals: Vec::new(),
                value: 0,
            })
            .collect();
        PlacedOrderGroup::new(OrderGroupDto {
            order_group: Some("abc123".to_string()),
            orders: Some(orders),
            analytics_data: Vec::new(),
        })
        .unwrap()
    }

    #[test]
    fn test_order_sections_keep_sequence_and_position() {
        let sections = order_sections(&placed(&["o1", "o2"]));
        assert_eq!(sections.len(), 2);

        let keys: Vec<(usize, &str)> = sections
            .iter()
            .map(|(index, order)| (*index, order.order_id.as_str()))
            .collect();
        assert_eq!(keys, vec![(0, "o1"), (1, "o2")]);
    }

    #[test]
    fn test_single_order_section() {
        let sections = order_sections(&placed(&["only"]));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].0, 0);
        assert_eq!(sections[0].1.order_id, "only");
    }
}
