//! Browser-only checks; run with `wasm-pack test --headless --firefox`

use patrol_designer_common::{AccessToken, KeyValueStorage, TOKEN_STORAGE_KEY};
use patrol_designer_web::browser_storage::BrowserStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_token_persists_under_fixed_key() {
    let mut token = AccessToken::load(BrowserStorage);
    token.set("pk.browser").unwrap();

    assert_eq!(
        BrowserStorage.get(TOKEN_STORAGE_KEY).unwrap(),
        Some("pk.browser".to_string())
    );
    assert_eq!(AccessToken::load(BrowserStorage).get(), "pk.browser");

    token.clear().unwrap();
    assert!(!AccessToken::load(BrowserStorage).is_set());
}
