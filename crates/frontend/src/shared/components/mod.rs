pub mod page_header;
pub mod panel;
pub mod stat_card;
