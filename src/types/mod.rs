pub mod app_state;
pub mod country;
pub mod lookup_result;
pub mod notification;
pub mod search_state;
