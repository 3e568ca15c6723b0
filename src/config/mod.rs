use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_API_URL: &str = "https://notehub-public.goit.study/api";

/// Transport configuration handed to [`crate::api::ApiClient::new`].
///
/// Built once at startup; nothing reads the environment after that.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct ClientConfig {
    pub api_url: String,
    /// Bearer token. Not validated: a missing token surfaces as a 401 from the server.
    pub token: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Resolve from a key lookup over `window.ENV`.
    ///
    /// Both `API_URL` and `api_url` are accepted, same for the token key.
    /// The token falls back to `NOTEHUB_TOKEN` captured at build time.
    pub(crate) fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let first = |keys: &[&str]| -> Option<String> {
            keys.iter()
                .find_map(|k| lookup(*k).filter(|v| !v.trim().is_empty()))
        };

        let api_url = first(&["API_URL", "api_url"]).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let token = first(&["NOTEHUB_TOKEN", "notehub_token"])
            .or_else(|| option_env!("NOTEHUB_TOKEN").map(|s| s.to_string()))
            .unwrap_or_default();

        Self::new(api_url, token)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let env = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        Self::resolve(|key| {
            let env = env.as_ref()?;
            js_sys::Reflect::get(env, &key.into()).ok()?.as_string()
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::load()
    }
}


// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_load_reads_window_env() {
        let window = web_sys::window().expect("window");
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"API_URL".into(), &"http://test.local/api".into())
            .expect("set API_URL");
        js_sys::Reflect::set(&env, &"NOTEHUB_TOKEN".into(), &"browser-token".into())
            .expect("set token");
        js_sys::Reflect::set(&window, &"ENV".into(), &env).expect("set ENV");

        let cfg = ClientConfig::load();
        assert_eq!(cfg.api_url, "http://test.local/api");
        assert_eq!(cfg.token, "browser-token");
    }
}
