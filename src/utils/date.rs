use chrono::Utc;

// milliseconds since the unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
