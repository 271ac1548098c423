pub mod chart;
pub mod components;
pub mod date_utils;
pub mod number_format;
pub mod page_frame;
