//! App state - pure data structure with no I/O logic

use std::path::PathBuf;

use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::Notice;
use crate::store::CatalogStore;

/// Which modal is open, if any
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModalKind {
    Create,
    Edit { product_id: i64 },
}

/// A single text field of a modal form
#[derive(Clone, Debug)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

impl FormField {
    fn new(label: &'static str) -> Self {
        FormField {
            label,
            value: String::new(),
        }
    }

    fn with_value(label: &'static str, value: impl Into<String>) -> Self {
        FormField {
            label,
            value: value.into(),
        }
    }
}

/// Create/edit modal form state
#[derive(Clone, Debug)]
pub struct ModalState {
    pub kind: ModalKind,
    pub fields: Vec<FormField>,
    pub active_field: usize,
    pub cursor_position: usize,
}

/// Field order in the create form
pub mod create_fields {
    pub const TITLE: usize = 0;
    pub const PRICE: usize = 1;
    pub const DESCRIPTION: usize = 2;
    pub const CATEGORY_ID: usize = 3;
    pub const IMAGE_URL: usize = 4;
}

/// Field order in the edit form (id and category are immutable here)
pub mod edit_fields {
    pub const TITLE: usize = 0;
    pub const PRICE: usize = 1;
    pub const DESCRIPTION: usize = 2;
}

impl ModalState {
    pub fn create() -> Self {
        ModalState {
            kind: ModalKind::Create,
            fields: vec![
                FormField::new("Title"),
                FormField::new("Price"),
                FormField::new("Description"),
                FormField::new("Category ID"),
                FormField::new("Image URL"),
            ],
            active_field: 0,
            cursor_position: 0,
        }
    }

    pub fn edit(product: &crate::models::Product) -> Self {
        ModalState {
            kind: ModalKind::Edit {
                product_id: product.id,
            },
            fields: vec![
                FormField::with_value("Title", product.title.clone()),
                FormField::with_value("Price", format!("{}", product.price)),
                FormField::with_value("Description", product.description.clone()),
            ],
            active_field: 0,
            cursor_position: product.title.len(),
        }
    }

    pub fn title(&self) -> String {
        match self.kind {
            ModalKind::Create => String::from(" New Product "),
            ModalKind::Edit { product_id } => format!(" Edit Product #{} ", product_id),
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Catalog data (full collection, filtered view, sort, pagination)
    pub store: CatalogStore,

    // UI state
    pub input_mode: InputMode,
    pub selected_row: usize,
    pub modal: Option<ModalState>,
    pub show_help: bool,

    // Network bookkeeping
    pub is_loading: bool,
    pub next_request_id: u64,

    // Status line
    pub notice: Option<Notice>,

    // Where CSV exports land
    pub export_dir: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: CatalogStore::new(),
            input_mode: InputMode::Normal,
            selected_row: 0,
            modal: None,
            show_help: false,
            is_loading: false,
            next_request_id: 1,
            notice: None,
            export_dir: PathBuf::from("."),
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            rows: self.store.page_slice().to_vec(),
            view_len: self.store.view().len(),
            total_pages: self.store.total_pages(),
            page_links: self.store.page_links(),
            current_page: self.store.pagination.current_page,
            items_per_page: self.store.pagination.items_per_page,
            search: self.store.search().to_string(),
            input_mode: self.input_mode,
            sort_title: self.store.sort_marker(crate::store::SortColumn::Title),
            sort_price: self.store.sort_marker(crate::store::SortColumn::Price),
            selected_row: self.selected_row,
            is_loading: self.is_loading,
            show_help: self.show_help,
            modal: self.modal.clone(),
            notice: self.notice.clone(),
        }
    }
}
