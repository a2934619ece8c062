pub mod event_page;
pub mod next_data;

pub use event_page::EventPageClient;
pub use next_data::{extract_next_data, find_market_list, locate_markets};
