use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use blockfall::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use blockfall::game::{Cell, Game, GameStatus, Piece};

#[derive(Clone, Copy, PartialEq)]
enum View {
    Empty,
    Filled(Color),
    Ghost(Color),
}

pub fn ui(f: &mut Frame, game: &Game, message: Option<&str>) {
    let size = f.size();

    let board_height = 22; // 20 rows + 2 borders
    let board_width = 22;  // 20 cols (2 chars per block) + 2 borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(18), // Side panel
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];

    render_board(f, game, board_area);
    render_side_panel(f, game, message, horizontal_chunks[2]);

    match game.status() {
        GameStatus::Idle => render_overlay(f, board_area, "Ready", "Press ENTER to start", Color::Cyan),
        GameStatus::Paused => render_overlay(f, board_area, "Paused", "Press P to resume", Color::Yellow),
        GameStatus::GameOver => {
            let score = format!("Score: {}", game.score());
            render_overlay(f, board_area, "Game Over", &score, Color::Red);
        }
        GameStatus::Playing => {}
    }
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let mut view = [[View::Empty; BOARD_WIDTH]; BOARD_HEIGHT];
    for (y, row) in game.board().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if let Cell::Filled(color) = *cell {
                view[y][x] = View::Filled(color);
            }
        }
    }

    // Ghost first so the falling piece is drawn over it
    if let Some(ghost) = game.ghost_piece() {
        paint(&mut view, &ghost, View::Ghost(ghost.color));
    }
    if let Some(piece) = game.current_piece() {
        paint(&mut view, piece, View::Filled(piece.color));
    }

    let board_lines: Vec<Line> = view
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| match *cell {
                        View::Empty => Span::raw("  "),
                        View::Filled(color) => Span::styled("██", Style::default().fg(color)),
                        View::Ghost(color) => Span::styled("▒▒", Style::default().fg(color)),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

    f.render_widget(board_widget, area);
}

fn paint(view: &mut [[View; BOARD_WIDTH]; BOARD_HEIGHT], piece: &Piece, cell: View) {
    for (x, y) in piece.get_blocks() {
        if x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32 {
            let target = &mut view[y as usize][x as usize];
            if matches!(cell, View::Filled(_)) || *target == View::Empty {
                *target = cell;
            }
        }
    }
}

fn render_side_panel(f: &mut Frame, game: &Game, message: Option<&str>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Next piece
            Constraint::Length(9), // Stats
            Constraint::Min(1),
        ])
        .split(area);

    render_next_piece(f, &game.next_piece(), chunks[0]);
    render_stats(f, game, message, chunks[1]);
}

fn render_stats(f: &mut Frame, game: &Game, message: Option<&str>, area: Rect) {
    let stats_text = vec![
        Line::from(vec![Span::styled("Score", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.score().to_string())]),
        Line::from(vec![Span::styled("Level", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.level().to_string())]),
        Line::from(vec![Span::styled("Lines", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.lines().to_string())]),
        Line::from(vec![Span::styled(message.unwrap_or(""), Style::default().fg(Color::Green))]),
    ];

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(stats_widget, area);
}

fn render_next_piece(f: &mut Frame, piece: &Piece, area: Rect) {
    // Only the rows that contain blocks
    let next_lines: Vec<Line> = piece
        .shape
        .iter()
        .filter(|row| row.iter().any(|&cell| cell))
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&cell| {
                        if cell {
                            Span::styled("██", Style::default().fg(piece.color))
                        } else {
                            Span::raw("  ")
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let next_widget = Paragraph::new(next_lines)
        .block(Block::default().borders(Borders::ALL).title("Next"))
        .alignment(Alignment::Center);

    f.render_widget(next_widget, area);
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

fn render_overlay(f: &mut Frame, area: Rect, title: &str, hint: &str, color: Color) {
    let popup_area = centered_rect(80, 30, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(title.to_uppercase(), Style::default().fg(color))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(hint.to_string())]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .alignment(Alignment::Center);

    f.render_widget(widget, popup_area);
}
