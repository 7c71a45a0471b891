use eframe::egui;
use std::sync::mpsc;

use crate::controller::SearchController;
use crate::index::loader::LoadResult;
use crate::index::SearchOptions;
use crate::ui::SearchWindowState;

pub struct DocseekApp {
    controller: SearchController,
    window: SearchWindowState,
    // One-shot: dropped after the loader's single message arrives.
    load_receiver: Option<mpsc::Receiver<LoadResult>>,
}

impl DocseekApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        docs_url: String,
        options: SearchOptions,
        load_receiver: Option<mpsc::Receiver<LoadResult>>,
    ) -> Self {
        let mut window = SearchWindowState::new(docs_url);
        let controller = match load_receiver {
            Some(_) => SearchController::new(options, &mut window),
            None => SearchController::unsupported(options, &mut window),
        };

        Self {
            controller,
            window,
            load_receiver,
        }
    }
}

impl eframe::App for DocseekApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(receiver) = &self.load_receiver {
            if let Ok(result) = receiver.try_recv() {
                self.controller.on_load_result(result, &mut self.window);
                self.load_receiver = None;
            }
        }

        if let Some(query) = self.window.show(ctx) {
            self.controller.on_query_changed(&query, &mut self.window);
        }

        ctx.request_repaint();
    }
}
