use std::sync::mpsc::Sender;
use std::thread;

use thiserror::Error;

use super::record::SearchRecord;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch search index: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("search index is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type LoadResult = Result<Vec<SearchRecord>, LoadError>;

/// Spawn the one-shot loader thread. It fetches and decodes the payload,
/// sends exactly one message, and exits; the caller drops the handle.
pub fn spawn_loader(base_url: String, sender: Sender<LoadResult>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let result = fetch_index(&base_url);
        match &result {
            Ok(records) => log::info!("fetched search index with {} records", records.len()),
            Err(e) => log::error!("search index load failed: {e}"),
        }
        // The receiver may already be gone if the window closed.
        let _ = sender.send(result);
    })
}

fn fetch_index(base_url: &str) -> LoadResult {
    let url = index_url(base_url);
    log::info!("fetching search index from {url}");
    let body = reqwest::blocking::get(&url)?.error_for_status()?.text()?;
    decode_index(&body)
}

fn decode_index(body: &str) -> LoadResult {
    let records: Vec<SearchRecord> = serde_json::from_str(body)?;
    Ok(records)
}

/// The generator writes the payload next to the HTML pages as `index.json`.
pub fn index_url(base_url: &str) -> String {
    format!("{}/index.json", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_url_joining() {
        assert_eq!(
            index_url("http://localhost:8080"),
            "http://localhost:8080/index.json"
        );
        assert_eq!(
            index_url("http://localhost:8080/docs/"),
            "http://localhost:8080/docs/index.json"
        );
    }

    #[test]
    fn test_decode_payload() {
        let body = r#"[
            {"sid":"42","name":"Foo","decl":"void Foo()","type":1},
            {"sid":"abc.html#def","name":"bar","decl":"int bar(int)","type":0}
        ]"#;
        let records = decode_index(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sid, "42");
        assert_eq!(records[1].kind, 0);
    }

    #[test]
    fn test_decode_malformed_payload() {
        let result = decode_index("not json at all");
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_index() {
        assert!(decode_index("[]").unwrap().is_empty());
    }
}
