pub mod analytics;
pub mod api_utils;
pub mod currency;
pub mod date_utils;
pub mod document;
pub mod error_message;
pub mod host;
pub mod i18n;
pub mod icons;
pub mod page_frame;
pub mod query_params;
