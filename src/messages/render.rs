//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::ModalState;
use crate::messages::ui_events::InputMode;
use crate::models::{Notice, Product};
use crate::store::SortDirection;

/// Complete state needed by the UI to render
#[derive(Clone, Debug)]
pub struct RenderState {
    // Table page
    pub rows: Vec<Product>,
    pub view_len: usize,

    // Pagination
    pub total_pages: usize,
    pub page_links: usize,
    pub current_page: usize,
    pub items_per_page: usize,

    // Search
    pub search: String,
    pub input_mode: InputMode,

    // Sort markers: direction plus whether the column is the active sort
    pub sort_title: (SortDirection, bool),
    pub sort_price: (SortDirection, bool),

    // Selection
    pub selected_row: usize,

    // Network
    pub is_loading: bool,

    // Popups
    pub show_help: bool,
    pub modal: Option<ModalState>,

    // Status line
    pub notice: Option<Notice>,
}

impl Default for RenderState {
    fn default() -> Self {
        use crate::constants::DEFAULT_PAGE_SIZE;
        RenderState {
            rows: Vec::new(),
            view_len: 0,
            total_pages: 0,
            page_links: 0,
            current_page: 1,
            items_per_page: DEFAULT_PAGE_SIZE,
            search: String::new(),
            input_mode: InputMode::Normal,
            sort_title: (SortDirection::Ascending, false),
            sort_price: (SortDirection::Ascending, false),
            selected_row: 0,
            is_loading: false,
            show_help: false,
            modal: None,
            notice: None,
        }
    }
}
