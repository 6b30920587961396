//! Command handlers - business logic for processing UI events

use crate::app::state::{create_fields, edit_fields, AppState, ModalKind, ModalState};
use crate::constants::PAGE_SIZE_CHOICES;
use crate::export;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{ApiErrorKind, NewProduct, Notice, NoticeLevel, ProductPatch};
use crate::store::SortColumn;

impl AppState {
    // ========================
    // Row navigation
    // ========================

    pub fn next_row(&mut self) {
        let rows = self.store.page_slice().len();
        if rows > 0 && self.selected_row + 1 < rows {
            self.selected_row += 1;
        }
    }

    pub fn prev_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Jump to a numbered page link. Only pages the pagination control
    /// offers ever arrive here; there is no further bounds check.
    pub fn go_to_page(&mut self, page: usize) {
        self.store.set_page(page);
        self.selected_row = 0;
    }

    // ========================
    // Search
    // ========================

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn stop_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_char(&mut self, c: char) {
        let mut term = self.store.search().to_string();
        term.push(c);
        self.store.filter(&term);
        self.selected_row = 0;
    }

    pub fn search_backspace(&mut self) {
        let mut term = self.store.search().to_string();
        term.pop();
        self.store.filter(&term);
        self.selected_row = 0;
    }

    // ========================
    // Sort and pagination controls
    // ========================

    pub fn sort_by(&mut self, column: SortColumn) {
        self.store.sort(column);
    }

    pub fn cycle_page_size(&mut self) {
        let current = self.store.pagination.items_per_page;
        let position = PAGE_SIZE_CHOICES.iter().position(|&n| n == current);
        let next = match position {
            Some(i) => PAGE_SIZE_CHOICES[(i + 1) % PAGE_SIZE_CHOICES.len()],
            None => PAGE_SIZE_CHOICES[0],
        };
        self.store.set_items_per_page(next);
        self.selected_row = 0;
    }

    // ========================
    // Fetch
    // ========================

    /// Issue (or re-issue) the full collection fetch
    pub fn reload(&mut self) -> NetworkCommand {
        self.is_loading = true;
        NetworkCommand::FetchCatalog { id: self.next_id() }
    }

    // ========================
    // Modals
    // ========================

    pub fn open_create(&mut self) {
        self.modal = Some(ModalState::create());
    }

    /// Open the edit modal for the selected row (the table's row click)
    pub fn open_edit(&mut self) {
        if let Some(product) = self.store.page_slice().get(self.selected_row) {
            self.modal = Some(ModalState::edit(product));
        }
    }

    pub fn cancel_form(&mut self) {
        self.modal = None;
    }

    pub fn form_char(&mut self, c: char) {
        if let Some(modal) = &mut self.modal {
            let cursor = modal.cursor_position;
            let value = &mut modal.fields[modal.active_field].value;
            if cursor <= value.len() {
                value.insert(cursor, c);
                modal.cursor_position = cursor + c.len_utf8();
            }
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(modal) = &mut self.modal {
            if modal.cursor_position > 0 {
                let cursor = modal.cursor_position;
                let value = &mut modal.fields[modal.active_field].value;
                let prev = value[..cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                value.remove(prev);
                modal.cursor_position = prev;
            }
        }
    }

    pub fn form_cursor_left(&mut self) {
        if let Some(modal) = &mut self.modal {
            if modal.cursor_position > 0 {
                let value = &modal.fields[modal.active_field].value;
                modal.cursor_position = value[..modal.cursor_position]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
            }
        }
    }

    pub fn form_cursor_right(&mut self) {
        if let Some(modal) = &mut self.modal {
            let value = &modal.fields[modal.active_field].value;
            if modal.cursor_position < value.len() {
                modal.cursor_position = value[modal.cursor_position..]
                    .char_indices()
                    .nth(1)
                    .map(|(i, _)| modal.cursor_position + i)
                    .unwrap_or(value.len());
            }
        }
    }

    pub fn form_next_field(&mut self) {
        if let Some(modal) = &mut self.modal {
            modal.active_field = (modal.active_field + 1) % modal.fields.len();
            modal.cursor_position = modal.fields[modal.active_field].value.len();
        }
    }

    pub fn form_prev_field(&mut self) {
        if let Some(modal) = &mut self.modal {
            modal.active_field = (modal.active_field + modal.fields.len() - 1) % modal.fields.len();
            modal.cursor_position = modal.fields[modal.active_field].value.len();
        }
    }

    /// Validate and submit the open modal. On a local validation failure the
    /// modal stays open with an error notice, same as a rejected write.
    pub fn submit_form(&mut self) -> Option<NetworkCommand> {
        let modal = self.modal.as_ref()?;
        match modal.kind {
            ModalKind::Create => {
                let price = match modal.fields[create_fields::PRICE].value.trim().parse::<f64>() {
                    Ok(p) => p,
                    Err(_) => {
                        self.notice = Some(Notice::new(NoticeLevel::Error, "Price must be a number"));
                        return None;
                    }
                };
                let category_id = match modal.fields[create_fields::CATEGORY_ID]
                    .value
                    .trim()
                    .parse::<i64>()
                {
                    Ok(c) => c,
                    Err(_) => {
                        self.notice =
                            Some(Notice::new(NoticeLevel::Error, "Category ID must be a number"));
                        return None;
                    }
                };
                let image = modal.fields[create_fields::IMAGE_URL].value.trim().to_string();
                let payload = NewProduct {
                    title: modal.fields[create_fields::TITLE].value.clone(),
                    price,
                    description: modal.fields[create_fields::DESCRIPTION].value.clone(),
                    category_id,
                    images: if image.is_empty() { Vec::new() } else { vec![image] },
                };
                self.is_loading = true;
                Some(NetworkCommand::CreateProduct {
                    id: self.next_id(),
                    payload,
                })
            }
            ModalKind::Edit { product_id } => {
                let price = match modal.fields[edit_fields::PRICE].value.trim().parse::<f64>() {
                    Ok(p) => p,
                    Err(_) => {
                        self.notice = Some(Notice::new(NoticeLevel::Error, "Price must be a number"));
                        return None;
                    }
                };
                let payload = ProductPatch {
                    title: Some(modal.fields[edit_fields::TITLE].value.clone()),
                    price: Some(price),
                    description: Some(modal.fields[edit_fields::DESCRIPTION].value.clone()),
                };
                self.is_loading = true;
                Some(NetworkCommand::UpdateProduct {
                    id: self.next_id(),
                    product_id,
                    payload,
                })
            }
        }
    }

    // ========================
    // Export
    // ========================

    pub fn export_csv(&mut self) {
        if self.store.view().is_empty() {
            self.notice = Some(Notice::new(
                NoticeLevel::Warning,
                "Nothing to export: the table is empty",
            ));
            return;
        }
        match export::write_csv(self.store.view(), &self.export_dir) {
            Ok(path) => {
                self.notice = Some(Notice::new(
                    NoticeLevel::Success,
                    format!("Exported {} rows to {}", self.store.view().len(), path.display()),
                ));
            }
            Err(e) => {
                self.notice = Some(Notice::new(NoticeLevel::Error, format!("Export failed: {}", e)));
            }
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Network responses
    // ========================

    /// Apply a network response to local state. Responses are applied as
    /// they arrive; there is no staleness check against newer state.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::CatalogLoaded { products, .. } => {
                self.is_loading = false;
                let count = products.len();
                self.store.set_all(products);
                self.selected_row = 0;
                self.notice = Some(Notice::new(
                    NoticeLevel::Info,
                    format!("Loaded {} products", count),
                ));
            }
            NetworkResponse::ProductCreated { product, .. } => {
                self.is_loading = false;
                let title = product.title.clone();
                self.store.insert_front(product);
                self.modal = None;
                self.notice = Some(Notice::new(
                    NoticeLevel::Success,
                    format!("Created \"{}\"", title),
                ));
            }
            NetworkResponse::ProductUpdated { product, .. } => {
                self.is_loading = false;
                let patch = ProductPatch {
                    title: Some(product.title.clone()),
                    price: Some(product.price),
                    description: Some(product.description.clone()),
                };
                self.store.patch(product.id, &patch);
                self.store.refresh_view();
                self.modal = None;
                self.notice = Some(Notice::new(
                    NoticeLevel::Success,
                    format!("Updated product #{}", product.id),
                ));
            }
            NetworkResponse::Failed { kind, message, .. } => {
                self.is_loading = false;
                match kind {
                    // List failures are logged only; the table stays empty
                    ApiErrorKind::Network => {
                        tracing::error!(%message, "catalog fetch failed");
                    }
                    // Create/update failures keep the modal open for retry
                    ApiErrorKind::Request => {
                        self.notice = Some(Notice::new(NoticeLevel::Error, message));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn product(id: i64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: String::from(title),
            price,
            description: String::new(),
            category: None,
            images: Vec::new(),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        state.store.set_all(vec![
            product(1, "Apple", 10.0),
            product(2, "Banana", 5.0),
        ]);
        state
    }

    fn type_into(state: &mut AppState, field: usize, text: &str) {
        let modal = state.modal.as_mut().unwrap();
        modal.active_field = field;
        modal.cursor_position = modal.fields[field].value.len();
        for c in text.chars() {
            state.form_char(c);
        }
    }

    #[test]
    fn test_search_chars_filter_and_reset_selection() {
        let mut state = loaded_state();
        state.selected_row = 1;
        state.start_search();
        state.search_char('a');
        state.search_char('n');
        assert_eq!(state.store.view().len(), 1);
        assert_eq!(state.store.view()[0].title, "Banana");
        assert_eq!(state.selected_row, 0);
        assert_eq!(state.store.pagination.current_page, 1);
    }

    #[test]
    fn test_search_backspace_widens_view_again() {
        let mut state = loaded_state();
        state.search_char('a');
        state.search_char('n');
        state.search_backspace();
        assert_eq!(state.store.view().len(), 2);
    }

    #[test]
    fn test_cycle_page_size_walks_choices_and_resets_page() {
        let mut state = loaded_state();
        state.store.set_page(2);
        state.cycle_page_size();
        assert_eq!(state.store.pagination.items_per_page, 20);
        assert_eq!(state.store.pagination.current_page, 1);
    }

    #[test]
    fn test_open_edit_uses_selected_row() {
        let mut state = loaded_state();
        state.selected_row = 1;
        state.open_edit();
        let modal = state.modal.as_ref().unwrap();
        assert_eq!(modal.kind, ModalKind::Edit { product_id: 2 });
        assert_eq!(modal.fields[edit_fields::TITLE].value, "Banana");
    }

    #[test]
    fn test_open_edit_on_empty_page_is_noop() {
        let mut state = AppState::new();
        state.open_edit();
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_submit_create_builds_payload() {
        let mut state = AppState::new();
        state.open_create();
        type_into(&mut state, create_fields::TITLE, "Chair");
        type_into(&mut state, create_fields::PRICE, "25.5");
        type_into(&mut state, create_fields::DESCRIPTION, "Wooden");
        type_into(&mut state, create_fields::CATEGORY_ID, "3");
        type_into(&mut state, create_fields::IMAGE_URL, "https://img.example.com/c.png");

        let command = state.submit_form().unwrap();
        match command {
            NetworkCommand::CreateProduct { payload, .. } => {
                assert_eq!(payload.title, "Chair");
                assert_eq!(payload.price, 25.5);
                assert_eq!(payload.category_id, 3);
                assert_eq!(payload.images, vec!["https://img.example.com/c.png"]);
            }
            other => panic!("expected CreateProduct, got {:?}", other),
        }
        assert!(state.is_loading);
    }

    #[test]
    fn test_submit_create_rejects_bad_price_and_keeps_modal() {
        let mut state = AppState::new();
        state.open_create();
        type_into(&mut state, create_fields::PRICE, "cheap");
        type_into(&mut state, create_fields::CATEGORY_ID, "1");

        assert!(state.submit_form().is_none());
        assert!(state.modal.is_some());
        assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_submit_edit_builds_full_patch() {
        let mut state = loaded_state();
        state.open_edit();
        type_into(&mut state, edit_fields::TITLE, " Pie");

        let command = state.submit_form().unwrap();
        match command {
            NetworkCommand::UpdateProduct {
                product_id,
                payload,
                ..
            } => {
                assert_eq!(product_id, 1);
                assert_eq!(payload.title.as_deref(), Some("Apple Pie"));
                assert_eq!(payload.price, Some(10.0));
            }
            other => panic!("expected UpdateProduct, got {:?}", other),
        }
    }

    #[test]
    fn test_created_response_prepends_and_closes_modal() {
        let mut state = loaded_state();
        state.open_create();
        state.handle_response(NetworkResponse::ProductCreated {
            id: 1,
            product: product(9, "Cherry", 7.0),
        });
        assert!(state.modal.is_none());
        assert_eq!(state.store.all()[0].id, 9);
        assert_eq!(state.store.view().len(), 3);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_updated_response_patches_and_refreshes_view() {
        let mut state = loaded_state();
        state.search_char('a');
        state.search_char('n');
        state.open_edit();
        state.handle_response(NetworkResponse::ProductUpdated {
            id: 1,
            product: product(2, "Banana Split", 8.0),
        });
        assert!(state.modal.is_none());
        assert_eq!(state.store.all()[1].title, "Banana Split");
        // View refreshed to a copy of the full collection (filter dropped)
        assert_eq!(state.store.view().len(), 2);
    }

    #[test]
    fn test_request_failure_keeps_modal_open() {
        let mut state = loaded_state();
        state.open_edit();
        state.handle_response(NetworkResponse::Failed {
            id: 1,
            kind: ApiErrorKind::Request,
            message: String::from("EntityNotFoundError"),
        });
        assert!(state.modal.is_some());
        assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_network_failure_leaves_table_empty_without_notice() {
        let mut state = AppState::new();
        state.is_loading = true;
        state.handle_response(NetworkResponse::Failed {
            id: 1,
            kind: ApiErrorKind::Network,
            message: String::from("connection refused"),
        });
        assert!(state.store.all().is_empty());
        assert!(state.notice.is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn test_export_empty_view_warns() {
        let mut state = AppState::new();
        state.export_csv();
        assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Warning);
    }

    #[test]
    fn test_export_writes_filtered_view() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = loaded_state();
        state.export_dir = dir.path().to_path_buf();
        state.search_char('a');
        state.search_char('n');
        state.export_csv();
        assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Success);
        let csv = std::fs::read_to_string(dir.path().join("products.csv")).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["ID,Title,Price,Description", "2,\"Banana\",5,\"\""]);
    }
}
