use crate::shared::currency::{format_price, use_currency};
use crate::shared::date_utils::format_order_date;
use crate::shared::i18n::{format_message, message, use_locale, Locale};
use crate::shared::icons::icon;
use contracts::domain::a001_order_group::aggregate::{
    ClientProfileDataDto, OrderDto, OrderItemDto,
};
use leptos::prelude::*;
use thaw::*;

/// "Order 2 of 3" for split purchases, plain "Order" for a single one.
/// `index` is zero-based.
fn order_heading(locale: Locale, index: usize, num_of_orders: usize) -> String {
    if num_of_orders > 1 {
        let position = (index + 1).to_string();
        let total = num_of_orders.to_string();
        format_message(
            locale,
            "order.heading-of",
            &[("index", position.as_str()), ("total", total.as_str())],
        )
    } else {
        message(locale, "order.heading")
    }
}

/// Price of one item line in minor units; saturates instead of overflowing.
fn line_total(item: &OrderItemDto) -> i64 {
    item.selling_price.saturating_mul(item.quantity)
}

#[component]
pub fn OrderInfo(
    order: OrderDto,
    profile: ClientProfileDataDto,
    /// Zero-based position in the group.
    index: usize,
    num_of_orders: usize,
) -> impl IntoView {
    let locale = use_locale();
    let currency = use_currency();

    let heading = order_heading(locale, index, num_of_orders);
    let number = format_message(locale, "order.number", &[("id", order.order_id.as_str())]);
    let placed_on = order.creation_date.as_ref().map(|date| {
        let date = format_order_date(date);
        format_message(locale, "order.placed-on", &[("date", date.as_str())])
    });
    let recipient = [profile.first_name.as_deref(), profile.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let items = order
        .items
        .iter()
        .map(|item| {
            let count = item.quantity.to_string();
            let quantity =
                format_message(locale, "order.quantity", &[("quantity", count.as_str())]);
            let price = format_price(line_total(item), &currency);
            view! {
                <li class="order-info__item" data-item-id=item.id.clone()>
                    <span class="order-info__item-name">{item.name.clone()}</span>
                    <span class="order-info__item-qty">{quantity}</span>
                    <span class="order-info__item-price">{price}</span>
                </li>
            }
        })
        .collect_view();

    let totals = order
        .totals
        .iter()
        .map(|total| {
            view! {
                <div class="order-info__total-row">
                    <span>{total.name.clone()}</span>
                    <span>{format_price(total.value, &currency)}</span>
                </div>
            }
        })
        .collect_view();

    let currency_attr = currency.to_string();
    let grand_total = format_price(order.value, &currency);

    view! {
        <section class="order-info" data-order-id=order.order_id.clone() data-currency=currency_attr>
            <Card>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <span class="order-info__icon">{icon("package")}</span>
                    <h2 class="order-info__heading">{heading}</h2>
                </Flex>
                <div class="order-info__number">{number}</div>
                {placed_on.map(|text| view! { <div class="order-info__date">{text}</div> })}
                {(!recipient.is_empty()).then(|| view! {
                    <div class="order-info__recipient">{recipient}</div>
                })}

                <h3 class="order-info__section-title">{message(locale, "order.items")}</h3>
                <ul class="order-info__items">{items}</ul>

                <div class="order-info__totals">
                    {totals}
                    <div class="order-info__total-row order-info__total-row--grand">
                        <strong>{message(locale, "order.total")}</strong>
                        <strong>{grand_total}</strong>
                    </div>
                </div>
            </Card>
        </section>
    }
}
