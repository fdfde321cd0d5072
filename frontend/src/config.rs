use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace, trailing slashes and a trailing `/api` so request paths
/// can always be appended as `/api/...`.
pub fn normalize_base_url(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix("/api").unwrap_or(trimmed);
    trimmed.trim_end_matches('/').to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn global_object(name: &str) -> Option<js_sys::Object> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        Some(js_sys::Object::from(any))
    }

    pub fn snapshot() -> Option<String> {
        // window.__HRMS_ENV = { API_BASE_URL: "..." } from env.js
        if let Some(url) = global_object("__HRMS_ENV")
            .and_then(|obj| read_key(&obj, &["API_BASE_URL", "api_base_url"]))
        {
            return Some(url);
        }
        // window.__HRMS_CONFIG = { api_base_url: "..." }
        global_object("__HRMS_CONFIG")
            .and_then(|obj| read_key(&obj, &["api_base_url", "API_BASE_URL"]))
    }

    pub fn write(cfg: &RuntimeConfig) {
        let (Some(url), Some(w)) = (&cfg.api_base_url, web_sys::window()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&w, &"__HRMS_CONFIG".into(), &obj);
    }

    pub fn config_json_url() -> Option<String> {
        let origin = web_sys::window()?.location().origin().ok()?;
        Some(format!("{}/config.json", origin))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> Option<String> {
        std::env::var("HRMS_API_BASE_URL").ok()
    }

    pub fn write(_cfg: &RuntimeConfig) {}

    pub fn config_json_url() -> Option<String> {
        None
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = globals::config_json_url()?;
    let resp = reqwest::get(&url).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("No runtime config at {} ({})", url, resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = non_empty(globals::snapshot()) {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        globals::write(&cfg);
        if let Some(url) = non_empty(cfg.api_base_url) {
            return cache_base_url(&url);
        }
    }
    if let Some(built_in) = non_empty(option_env!("HRMS_API_BASE_URL").map(str::to_string)) {
        return cache_base_url(&built_in);
    }
    log::info!("API base URL not configured; using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}
