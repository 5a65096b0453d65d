use crate::domain::a001_order_placed::model::PlacedOrderGroup;
use crate::shared::i18n::{format_message, message, plural_message, use_locale, Locale};
use crate::shared::icons::icon;
use contracts::domain::a001_order_group::aggregate::ClientProfileDataDto;
use leptos::prelude::*;
use thaw::*;

fn thanks_line(locale: Locale, profile: &ClientProfileDataDto) -> String {
    match profile.first_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => format_message(locale, "header.thanks", &[("name", name)]),
        _ => message(locale, "header.thanks-anonymous"),
    }
}

/// Line under the title: in-store shoppers get pointed to the cashier, everyone
/// else gets the e-mail notice when an address is known.
fn notice_line(locale: Locale, profile: &ClientProfileDataDto, in_store: bool) -> Option<String> {
    if in_store {
        return Some(message(locale, "header.in-store-notice"));
    }
    profile
        .email
        .as_deref()
        .filter(|email| !email.is_empty())
        .map(|email| format_message(locale, "header.email-notice", &[("email", email)]))
}

#[component]
pub fn Header(
    group: PlacedOrderGroup,
    /// Profile of the first order in the group.
    profile: ClientProfileDataDto,
    in_store: bool,
) -> impl IntoView {
    let locale = use_locale();
    let title = thanks_line(locale, &profile);
    let notice = notice_line(locale, &profile, in_store);
    let orders_count = plural_message(locale, "header.orders-count", group.orders().len());
    let group_label = group
        .payload()
        .order_group
        .clone()
        .map(|id| format_message(locale, "header.order-group", &[("id", id.as_str())]));
    let notice_icon = if in_store { "store" } else { "mail" };

    view! {
        <header class="order-placed__header" data-in-store=in_store.to_string()>
            <div class="order-placed__header-icon">{icon("check-circle")}</div>
            <h1 class="order-placed__title">{title}</h1>
            {group_label.map(|label| view! {
                <div class="order-placed__group">{label}</div>
            })}
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <span>{orders_count}</span>
            </Flex>
            {notice.map(|text| view! {
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <span class="order-placed__notice-icon">{icon(notice_icon)}</span>
                    <span class="order-placed__notice">{text}</span>
                </Flex>
            })}
        </header>
    }
}
