//! Stateless rendering for the tic-tac-toe screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tictactoe_core::{Cell, Coord, Player};

use super::app::{App, RoundSummary};
use crate::geometry::{BOARD_HEIGHT, BOARD_WIDTH, BoardGeometry};

/// X marks.
pub const X_COLOR: Color = Color::Rgb(0x2E, 0x86, 0xC1);
/// O marks.
pub const O_COLOR: Color = Color::Rgb(0xE7, 0x4C, 0x3C);

const BUTTON_LABEL: &str = "[ New Game ]";
const BUTTON_WIDTH: u16 = 16;
const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 7;

const X_GLYPH: [&str; 3] = ["\\   /", "  X  ", "/   \\"];
const O_GLYPH: [&str; 3] = ["/‾‾‾\\", "|   |", "\\___/"];

/// Screen regions, derived from the terminal area alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// The 3x3 board.
    pub board: Rect,
    /// The "New Game" button.
    pub button: Rect,
    /// Session score line.
    pub scores: Rect,
    /// Turn and notice line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

/// Splits the terminal area into screen regions.
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Button
            Constraint::Length(1), // Scores
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let board_slot = chunks[1];
    ScreenLayout {
        title: chunks[0],
        board: center_rect(
            board_slot,
            BOARD_WIDTH.min(board_slot.width),
            BOARD_HEIGHT.min(board_slot.height),
        ),
        button: center_rect(chunks[2], BUTTON_WIDTH.min(chunks[2].width), chunks[2].height),
        scores: chunks[3],
        status: chunks[4],
        help: chunks[5],
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = layout(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, screen.title);

    draw_board(frame, BoardGeometry::new(screen.board), app);
    draw_button(frame, screen.button);

    let scores = Paragraph::new(app.engine().scores().to_string())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(scores, screen.scores);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(status, screen.status);

    let mut help = String::from("1-9/click: place | arrows+Enter: cursor | n: new game | q: quit");
    if !app.audio().audio_available() {
        help.push_str(" | audio off");
    }
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, screen.help);

    if let Some(summary) = app.summary() {
        draw_summary(frame, area, summary);
    }
}

fn draw_board(frame: &mut Frame, geometry: BoardGeometry, app: &App) {
    let engine = app.engine();
    let winning_line = engine.winning_line();
    let show_cursor = !engine.is_over() && app.summary().is_none();

    for coord in Coord::all() {
        let on_line = winning_line.is_some_and(|line| line.contains(&coord));
        let highlight = if on_line {
            Some(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else if show_cursor && coord == app.cursor() {
            Some(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            None
        };
        let border_type = if on_line {
            BorderType::Double
        } else {
            BorderType::Plain
        };
        draw_cell(frame, geometry.cell_rect(coord), coord, engine.cell(coord), highlight, border_type);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    coord: Coord,
    cell: Cell,
    highlight: Option<Style>,
    border_type: BorderType,
) {
    // A bordered cell needs at least one row and column inside the frame.
    let bordered = area.height >= 3 && area.width >= 3;
    let inner = if bordered {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(highlight.unwrap_or(Style::default().fg(Color::DarkGray)));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    } else {
        area
    };

    let (lines, mut style) = match cell.mark() {
        Some(player) => (mark_lines(player, inner), mark_style(player)),
        None => (
            vec![Line::from((coord.index() + 1).to_string())],
            Style::default().fg(Color::DarkGray),
        ),
    };
    if !bordered && highlight.is_some() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let content = Rect::new(inner.x, inner.y + top, inner.width, inner.height - top);
    frame.render_widget(
        Paragraph::new(lines).style(style).alignment(Alignment::Center),
        content,
    );
}

// Small cells fall back to a single letter.
fn mark_lines(player: Player, inner: Rect) -> Vec<Line<'static>> {
    let glyph = match player {
        Player::X => X_GLYPH,
        Player::O => O_GLYPH,
    };
    if inner.height >= glyph.len() as u16 && inner.width >= 5 {
        glyph.iter().map(|row| Line::from(*row)).collect()
    } else {
        vec![Line::from(player.to_string())]
    }
}

/// Style for a player's mark.
pub fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => X_COLOR,
        Player::O => O_COLOR,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_button(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new(BUTTON_LABEL)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_summary(frame: &mut Frame, area: Rect, summary: &RoundSummary) {
    let popup = center_rect(
        area,
        POPUP_WIDTH.min(area.width),
        POPUP_HEIGHT.min(area.height),
    );
    let result_style = match summary.outcome().winner() {
        Some(player) => mark_style(player),
        None => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    };
    let text = vec![
        Line::from(Span::styled(summary.outcome().to_string(), result_style)),
        Line::from(summary.scores().to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Click 'New Game' or press n to play again",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Game Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
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

    #[test]
    fn test_layout_fits_full_board() {
        let screen = layout(Rect::new(0, 0, 80, 30));
        assert_eq!(screen.board.width, BOARD_WIDTH);
        assert_eq!(screen.board.height, BOARD_HEIGHT);
        assert!(screen.board.bottom() <= screen.button.top());
        assert!(screen.button.bottom() <= screen.scores.top());
        assert_eq!(screen.help.bottom(), 30);
    }

    #[test]
    fn test_layout_shrinks_board_on_small_terminal() {
        let screen = layout(Rect::new(0, 0, 30, 12));
        assert!(screen.board.width <= 30);
        assert!(screen.board.height <= 12 - 6);
        assert!(!screen.board.is_empty());
    }
}
