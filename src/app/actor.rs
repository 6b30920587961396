//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Kick off the initial catalog fetch
        let fetch = self.state.reload();
        let _ = self.network_tx.send(fetch);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Table navigation
            UiEvent::NextRow => self.state.next_row(),
            UiEvent::PrevRow => self.state.prev_row(),
            UiEvent::GoToPage(page) => self.state.go_to_page(page),

            // Search
            UiEvent::StartSearch => self.state.start_search(),
            UiEvent::StopSearch => self.state.stop_search(),
            UiEvent::SearchChar(c) => self.state.search_char(c),
            UiEvent::SearchBackspace => self.state.search_backspace(),

            // Table controls
            UiEvent::SortBy(column) => self.state.sort_by(column),
            UiEvent::CyclePageSize => self.state.cycle_page_size(),
            UiEvent::Reload => {
                let cmd = self.state.reload();
                let _ = self.network_tx.send(cmd);
            }
            UiEvent::ExportCsv => self.state.export_csv(),

            // Modals
            UiEvent::OpenCreate => self.state.open_create(),
            UiEvent::OpenEdit => self.state.open_edit(),
            UiEvent::FormChar(c) => self.state.form_char(c),
            UiEvent::FormBackspace => self.state.form_backspace(),
            UiEvent::FormCursorLeft => self.state.form_cursor_left(),
            UiEvent::FormCursorRight => self.state.form_cursor_right(),
            UiEvent::FormNextField => self.state.form_next_field(),
            UiEvent::FormPrevField => self.state.form_prev_field(),
            UiEvent::FormSubmit => {
                if let Some(cmd) = self.state.submit_form() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::FormCancel => self.state.cancel_form(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
