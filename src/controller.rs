use crate::index::loader::LoadResult;
use crate::index::{QueryResult, SearchIndex, SearchOptions};

pub const UNSUPPORTED_MESSAGE: &str = "Search is not available when browsing the documentation \
     locally using file://. Serve the documentation over an HTTP server and point docseek at it.";
pub const LOADING_MESSAGE: &str = "Loading search index...";
pub const LOADED_MESSAGE: &str = "Loading index complete.";
pub const TOO_SHORT_MESSAGE: &str = "Input too short.";

/// Queries shorter than this (after trimming) are not executed.
pub const MIN_QUERY_LEN: usize = 3;

/// Rendering capabilities the controller needs from the UI. Keeping this
/// behind a trait lets the controller be tested without a real window.
pub trait Surface {
    fn set_status_text(&mut self, text: &str);
    fn set_input_visible(&mut self, visible: bool);
    /// `Some` shows the results panel with the given rows (possibly empty,
    /// so an empty panel doesn't flash); `None` clears and hides it.
    fn render_results(&mut self, results: Option<Vec<QueryResult>>);
}

enum Phase {
    /// Local file:// docs, terminal for the session.
    Unsupported,
    Loading,
    /// Load failed; the input stays hidden and there is no retry.
    Failed,
    Ready(SearchIndex),
}

pub struct SearchController {
    phase: Phase,
    options: SearchOptions,
}

impl SearchController {
    /// Start in the Loading phase: input hidden until the loader reports in.
    pub fn new(options: SearchOptions, surface: &mut dyn Surface) -> Self {
        surface.set_input_visible(false);
        surface.set_status_text(LOADING_MESSAGE);
        Self {
            phase: Phase::Loading,
            options,
        }
    }

    /// Start in the terminal Unsupported phase; no loader runs and the
    /// input is never revealed.
    pub fn unsupported(options: SearchOptions, surface: &mut dyn Surface) -> Self {
        surface.set_input_visible(false);
        surface.set_status_text(UNSUPPORTED_MESSAGE);
        Self {
            phase: Phase::Unsupported,
            options,
        }
    }

    /// Handle the loader's single message. Later messages are ignored, so
    /// the input is revealed at most once per session.
    pub fn on_load_result(&mut self, result: LoadResult, surface: &mut dyn Surface) {
        if !matches!(self.phase, Phase::Loading) {
            return;
        }
        match result {
            Ok(records) => {
                let index = SearchIndex::new(records);
                log::info!("search ready over {} records", index.len());
                self.phase = Phase::Ready(index);
                surface.set_input_visible(true);
                surface.set_status_text(LOADED_MESSAGE);
            }
            Err(e) => {
                log::error!("search disabled: {e}");
                self.phase = Phase::Failed;
                surface.set_status_text(&format!("Search is unavailable: {e}"));
            }
        }
    }

    /// Handle an input edit: short-circuit short queries, otherwise run a
    /// ranked search and replace the rendered list.
    pub fn on_query_changed(&self, query: &str, surface: &mut dyn Surface) {
        let Phase::Ready(index) = &self.phase else {
            return;
        };

        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            surface.set_status_text(TOO_SHORT_MESSAGE);
            surface.render_results(None);
            return;
        }

        surface.set_status_text("");
        let hits = index.search(trimmed, &self.options);
        surface.render_results(Some(hits));
    }
}

/// The upstream client refuses to run from `file://` pages; the equivalent
/// here is a docs URL with a file scheme or a bare filesystem path.
pub fn is_local_docs(url: &str) -> bool {
    url.starts_with("file:") || !url.contains("://")
}
