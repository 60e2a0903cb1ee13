//! The one persisted flag: whether the instructions overlay has been dismissed.

use wasm_bindgen::JsValue;
use web_sys::Storage;

pub const INSTRUCTIONS_SEEN_KEY: &str = "elasticFaceInstructionsSeen";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `false` when storage is unavailable (private browsing, sandboxed iframes).
pub fn instructions_seen() -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(INSTRUCTIONS_SEEN_KEY).ok().flatten())
        .is_some_and(|value| value == "true")
}

pub fn mark_instructions_seen() -> Result<(), JsValue> {
    let storage = local_storage().ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
    storage.set_item(INSTRUCTIONS_SEEN_KEY, "true")
}
