//! File Downloads
//!
//! CSV and JSON exports are handed to the browser as `data:` URLs on a
//! throwaway anchor element.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen::JsCast;

/// Characters that must be escaped inside a `data:` URL payload
const DATA_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b',')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub const CSV: &str = "text/csv;charset=utf-8";
pub const JSON: &str = "application/json;charset=utf-8";
pub const TEXT: &str = "text/plain;charset=utf-8";

pub fn data_url(mime: &str, content: &str) -> String {
    format!("data:{},{}", mime, utf8_percent_encode(content, DATA_ENCODE_SET))
}

/// `Alice Johnson` -> `alice-johnson`
pub fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Ask the browser to save `content` as `filename`
pub fn download(filename: &str, mime: &str, content: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document")?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "not an anchor".to_string())?;

    anchor.set_href(&data_url(mime, content));
    anchor.set_download(filename);
    anchor.click();
    log::info!("[EXPORT] {} ({} bytes)", filename, content.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_escapes_separators() {
        let url = data_url(CSV, "a,b\n1 2");
        assert_eq!(url, "data:text/csv;charset=utf-8,a%2Cb%0A1%202");
    }

    #[test]
    fn test_data_url_escapes_fragment_marker() {
        assert!(data_url(JSON, "{\"id\":\"#1\"}").ends_with("%7B%22id%22:%22%231%22%7D"));
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Alice Johnson"), "alice-johnson");
        assert_eq!(slug("  Dr. Michael  Chen "), "dr-michael-chen");
    }
}
