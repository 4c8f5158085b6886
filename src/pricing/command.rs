pub mod get_price_cmd;
pub mod health_check_cmd;
pub mod toggle_state_cmd;
