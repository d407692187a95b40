use web_sys::{window, UrlSearchParams};
use wheel_shared::constants::WheelConfig;

/// Builds the wheel configuration from the page URL, e.g.
/// `?questions=8&delay=300&pause=1500`. Anything missing or unreadable keeps its default.
pub fn load_wheel_config() -> WheelConfig {
    let config = match query_params() {
        Some(params) => WheelConfig::default().with_overrides(
            params.get("questions").as_deref(),
            params.get("delay").as_deref(),
            params.get("pause").as_deref(),
        ),
        None => WheelConfig::default(),
    };

    match serde_json::to_string(&config) {
        Ok(json) => log::info!("wheel config: {}", json),
        Err(e) => log::error!("Failed to serialize wheel config: {:?}", e),
    }
    config
}

fn query_params() -> Option<UrlSearchParams> {
    let search = window()?.location().search().ok()?;
    if search.is_empty() {
        return None;
    }
    UrlSearchParams::new_with_str(&search).ok()
}
