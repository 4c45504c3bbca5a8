// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    pub window_w: f32,
    pub window_h: f32,

    /// Segments page: transcript file to segment
    pub transcript_path: String,

    /// Export target shown in the export bar
    pub export_path: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            window_w: 1100.0,
            window_h: 700.0,
            transcript_path: s!(),
            export_path: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
