pub mod search_window;

pub use search_window::SearchWindowState;
