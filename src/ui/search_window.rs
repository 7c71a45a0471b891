use egui;
use egui_extras::{Column, TableBuilder};

use crate::controller::Surface;
use crate::index::{EntityKind, QueryResult};

/// One rendered result row: an optional link target, a kind tag, and the
/// declaration text as the visible label.
pub struct ResultRow {
    pub href: Option<String>,
    pub tag: &'static str,
    pub decl: String,
}

/// Retained view state drawn every frame. The controller drives it through
/// the `Surface` trait; `show` reads it back out.
pub struct SearchWindowState {
    base_url: String,
    query: String,
    status: String,
    input_visible: bool,
    panel: Option<Vec<ResultRow>>,
    first_frame: bool,
}

impl SearchWindowState {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            query: String::new(),
            status: String::new(),
            input_visible: false,
            panel: None,
            first_frame: true,
        }
    }

    /// Draw the window. Returns the query text when it changed this frame.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<String> {
        let mut edited = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Search");
            ui.add_space(6.0);

            if self.input_visible {
                let response = ui.text_edit_singleline(&mut self.query);
                if self.first_frame {
                    response.request_focus();
                    self.first_frame = false;
                }
                if response.changed() {
                    edited = true;
                }
            }

            if !self.status.is_empty() {
                ui.label(&self.status);
            }

            if let Some(rows) = &self.panel {
                ui.separator();
                let table = TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::auto().at_least(70.0))
                    .column(Column::remainder())
                    .min_scrolled_height(300.0);

                table.body(|body| {
                    body.rows(22.0, rows.len(), |mut table_row| {
                        let row = &rows[table_row.index()];
                        table_row.col(|ui| {
                            ui.label(egui::RichText::new(row.tag).small().weak());
                        });
                        table_row.col(|ui| {
                            let label = egui::RichText::new(&row.decl).monospace();
                            match &row.href {
                                Some(href) => {
                                    ui.hyperlink_to(label, href);
                                }
                                None => {
                                    ui.label(label);
                                }
                            }
                        });
                    });
                });
            }
        });

        edited.then(|| self.query.clone())
    }

    fn build_row(&self, result: &QueryResult) -> ResultRow {
        let kind = EntityKind::from_code(result.kind);
        ResultRow {
            href: kind
                .page(&result.sid)
                .map(|page| format!("{}/{}", self.base_url, page)),
            tag: kind.label(),
            decl: result.decl.clone(),
        }
    }
}

impl Surface for SearchWindowState {
    fn set_status_text(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn set_input_visible(&mut self, visible: bool) {
        self.input_visible = visible;
    }

    fn render_results(&mut self, results: Option<Vec<QueryResult>>) {
        let rows = results.map(|hits| hits.iter().map(|hit| self.build_row(hit)).collect());
        self.panel = rows;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(sid: &str, kind: i64, decl: &str) -> QueryResult {
        QueryResult {
            sid: sid.to_string(),
            kind,
            decl: decl.to_string(),
            score: 1.0,
        }
    }

    fn state() -> SearchWindowState {
        SearchWindowState::new("http://localhost:8080/".to_string())
    }

    #[test]
    fn test_function_row_links_to_function_page() {
        let mut window = state();
        window.render_results(Some(vec![hit("42", 1, "void Foo()")]));
        let rows = window.panel.as_ref().unwrap();
        assert_eq!(
            rows[0].href.as_deref(),
            Some("http://localhost:8080/f42.html")
        );
        assert_eq!(rows[0].tag, "function");
        assert_eq!(rows[0].decl, "void Foo()");
    }

    #[test]
    fn test_method_row_link_has_no_html_suffix() {
        let mut window = state();
        window.render_results(Some(vec![hit("7", 0, "int bar(int)")]));
        let rows = window.panel.as_ref().unwrap();
        assert_eq!(rows[0].href.as_deref(), Some("http://localhost:8080/r7"));
    }

    #[test]
    fn test_unknown_kind_row_still_renders() {
        let mut window = state();
        window.render_results(Some(vec![hit("9", 99, "mystery")]));
        let rows = window.panel.as_ref().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].href, None);
        assert_eq!(rows[0].tag, "");
        assert_eq!(rows[0].decl, "mystery");
    }

    #[test]
    fn test_clearing_results_hides_panel() {
        let mut window = state();
        window.render_results(Some(vec![hit("42", 1, "void Foo()")]));
        assert!(window.panel.is_some());
        window.render_results(None);
        assert!(window.panel.is_none());
    }

    #[test]
    fn test_empty_results_keep_panel_visible() {
        let mut window = state();
        window.render_results(Some(Vec::new()));
        assert_eq!(window.panel.as_ref().unwrap().len(), 0);
    }
}
