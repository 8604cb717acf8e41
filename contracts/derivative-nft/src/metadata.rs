use alloc::{string::String as StdString, vec};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use soroban_sdk::{Env, String};

const DATA_URI_PREFIX: &str = "data:text/plain;base64,";

/// Render stored content as a `data:text/plain;base64,` URI.
pub fn text_data_uri(env: &Env, content: &String) -> String {
    let mut raw = vec![0u8; content.len() as usize];
    content.copy_into_slice(&mut raw);

    let mut uri = StdString::from(DATA_URI_PREFIX);
    uri.push_str(&STANDARD.encode(raw));
    String::from_str(env, &uri)
}
