//! Catalog TUI - actor-based admin table for a remote product catalog
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async API execution

mod app;
mod constants;
mod export;
mod messages;
mod models;
mod network;
mod store;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use messages::ui_events::{key_to_ui_event, InputMode};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use network::NetworkActor;
use ui::{format_price, notice_color, sort_marker};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "catalog-tui.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor (issues the initial catalog fetch)
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.input_mode,
                    current_state.modal.is_some(),
                    current_state.show_help,
                    current_state.page_links,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Product table
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_bar(f, state, chunks[0]);
    draw_table(f, state, chunks[1]);
    draw_pagination(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    // Popups
    if let Some(modal) = &state.modal {
        draw_modal(f, modal, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_search_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let editing = state.input_mode == InputMode::Search;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search title (/) ");

    let input = Paragraph::new(state.search.as_str()).block(block);
    f.render_widget(input, area);

    if editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + state.search.len() as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_table(f: &mut Frame, state: &RenderState, area: Rect) {
    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from(format!("Title {}", sort_marker(state.sort_title))),
        Cell::from(format!("Price {}", sort_marker(state.sort_price))),
        Cell::from("Category"),
        Cell::from("Image"),
    ])
    .style(Style::default().fg(Color::Cyan).bold());

    let rows: Vec<Row> = state
        .rows
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.id.to_string()),
                Cell::from(p.title.clone()).style(Style::default().fg(Color::Blue).bold()),
                Cell::from(format_price(p.price)).style(Style::default().fg(Color::Red)),
                Cell::from(p.category_name().to_string()).style(Style::default().fg(Color::Cyan)),
                Cell::from(p.display_image()),
            ])
        })
        .collect();

    let loading = if state.is_loading { " [...]" } else { "" };
    let title = format!(" Products ({} shown, {} total){} ", state.rows.len(), state.view_len, loading);

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(Style::default().fg(Color::Yellow).bold())
    .highlight_symbol("> ");

    let mut table_state = TableState::default();
    if !state.rows.is_empty() {
        table_state.select(Some(state.selected_row.min(state.rows.len() - 1)));
    }

    f.render_stateful_widget(table, area, &mut table_state);
}

fn draw_pagination(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut spans = vec![Span::styled(" Page: ", Style::default().fg(Color::Gray))];

    for page in 1..=state.page_links {
        let label = format!(" {} ", page);
        if page == state.current_page {
            spans.push(Span::styled(
                label,
                Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(Color::Cyan)));
        }
    }

    spans.push(Span::styled(
        format!(
            "  {}/page  {} pages  (i:page-size, 1-{}:jump)",
            state.items_per_page,
            state.total_pages,
            state.page_links.max(1)
        ),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let bar = match &state.notice {
        Some(notice) => Paragraph::new(format!(
            " {} {} ",
            notice.timestamp.format("%H:%M:%S"),
            notice.text
        ))
        .style(Style::default().fg(notice_color(notice.level))),
        None => {
            let hint = if state.is_loading {
                " Loading... "
            } else {
                " /:search | t/p:sort | n:new | Enter:edit | x:export | r:reload | ?:help | q:quit "
            };
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray))
        }
    };
    f.render_widget(bar, area);
}

fn draw_modal(f: &mut Frame, modal: &app::state::ModalState, area: Rect) {
    let popup_area = centered_rect(60, 50, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(modal.title())
        .title_bottom(Line::from(" Enter:submit  Esc:cancel  Tab:next field ").right_aligned())
        .style(Style::default().bg(Color::Black));

    const LABEL_WIDTH: usize = 13;

    let lines: Vec<Line> = modal
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let style = if i == modal.active_field {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", field.label, width = LABEL_WIDTH),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(field.value.clone(), style),
            ])
        })
        .collect();

    let form = Paragraph::new(lines).block(block);
    f.render_widget(Clear, popup_area);
    f.render_widget(form, popup_area);

    // Cursor on the active field
    let max_x = popup_area.x + popup_area.width.saturating_sub(2);
    let cursor_x = (popup_area.x + 1 + LABEL_WIDTH as u16 + modal.cursor_position as u16).min(max_x);
    let cursor_y = popup_area.y + 1 + modal.active_field as u16;
    f.set_cursor_position(Position::new(cursor_x, cursor_y));
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 CATALOG TUI - Keyboard Shortcuts

 TABLE
   ↑ / ↓              Select row
   Enter              Edit selected product
   /                  Search by title (Esc/Enter to leave)
   t                  Sort by title (toggles direction)
   p                  Sort by price (toggles direction)

 PAGINATION
   1-5                Jump to page
   i                  Cycle page size

 ACTIONS
   n                  New product
   x                  Export filtered view to products.csv
   r                  Reload catalog from the API

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
