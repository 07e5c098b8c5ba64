//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_timeline::{GameView, Palette, Player, Position, Square};

use super::app::App;
use super::input::Focus;

/// Renders the whole screen: title, board, status and move list.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) {
    let view = app.view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Game
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Tic-Tac-Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   [n] + New Game"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, columns[0], app, &view, palette);
    draw_info(frame, columns[1], app, &view);

    let help = Paragraph::new(
        "1-9 play  arrows move  Enter select  Tab switch panel  s sort  n new game  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 38, 9);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(*row_area);

        for column in 0..3 {
            if let Some(pos) = Position::from_row_column(row, column) {
                draw_cell(frame, cols[column * 2], app, view, palette, pos);
            }
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    palette: &Palette,
    pos: Position,
) {
    let (symbol, mut style) = match view.board.get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    };

    if view.is_highlighted(pos) {
        style = style.bg(palette.highlight);
    }
    if app.focus() == Focus::Board && app.board_cursor() == pos {
        style = style.bg(palette.cursor).fg(Color::Black);
    }

    // Fill all three lines so the background reads as a square.
    let text = vec![
        Line::from(Span::styled(" ".repeat(12), style)),
        Line::from(Span::styled(format!("{symbol:^12}"), style)),
        Line::from(Span::styled(" ".repeat(12), style)),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let status_style = if view.status.is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(Line::from(vec![
        Span::styled(view.status_text.clone(), status_style),
        Span::raw("   [s] Sort Moves ↕"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label.clone(), style)))
        })
        .collect();

    let focused = app.focus() == Focus::Moves;
    let list = List::new(items)
        .block(
            Block::default()
                .title("Moves")
                .borders(Borders::ALL)
                .border_style(focus_style(focused)),
        )
        .highlight_symbol(if focused { "> " } else { "  " })
        .highlight_style(if focused {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        });

    let height = usize::from(chunks[1].height.saturating_sub(2));
    let mut list_state = list_window(
        view.moves.len(),
        height,
        app.scroll_anchor(),
        app.moves_cursor(),
    );
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}

/// Scrolls the move list so `anchor` is visible.
///
/// The cursor is only selected while it is on screen; ratatui would otherwise
/// scroll to it and lose the anchor.
fn list_window(len: usize, height: usize, anchor: usize, cursor: usize) -> ListState {
    let offset = (anchor + 1)
        .saturating_sub(height)
        .min(len.saturating_sub(height));
    let selected = (offset..offset + height).contains(&cursor).then_some(cursor);
    ListState::default().with_offset(offset).with_selected(selected)
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_timeline::ColorSettings;

    fn render(app: &App) -> String {
        let palette = ColorSettings::default().palette().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal.draw(|f| draw(f, app, &palette)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_short_list_never_scrolls() {
        let state = list_window(4, 11, 3, 1);
        assert_eq!(state.offset(), 0);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_window_ends_at_anchor() {
        let state = list_window(10, 4, 9, 7);
        assert_eq!(state.offset(), 6);
        assert_eq!(state.selected(), Some(7));
    }

    #[test]
    fn test_offscreen_cursor_is_not_selected() {
        let state = list_window(10, 4, 9, 2);
        assert_eq!(state.offset(), 6);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_renders_status_and_start_entry() {
        let screen = render(&App::new());
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
    }

    #[test]
    fn test_renders_moves_and_winner() {
        let mut app = App::new();
        for key in ['1', '5', '2', '6', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move # 5 (3,1)"));
    }
}
