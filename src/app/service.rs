use serde_json::{json, Value};

use super::enums::compose_mode::ComposeMode;

pub fn get_health_state() -> Value {
    return json!({
        "status": "ok",
        "mode": ComposeMode::Deterministic.value(),
    });
}
