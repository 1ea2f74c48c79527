//! Frame rendering.
//!
//! Layout (terminal cells):
//!
//! ```text
//! [N] New game, [Q] Quit
//!  stock waste      foundations x4
//!  tableau x7 (cards overlap by 2 rows)     actions panel
//! ```

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color as TermColor, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};
use ratatui::Frame;

use crate::core::{Card, Color, GameState, Suit};
use crate::zones::TABLEAU_COLUMNS;

/// Card outline size, borders included.
const CARD_WIDTH: u16 = 5;
const CARD_HEIGHT: u16 = 4;
/// Vertical offset between overlapping tableau cards.
const TABLEAU_STEP: u16 = 2;

const TOP_ROW: u16 = 1;
const STOCK_X: u16 = 1;
const WASTE_X: u16 = 6;
const FOUNDATION_X: u16 = 16;
const TABLEAU_X: u16 = 1;
const TABLEAU_Y: u16 = 5;
const PANEL: Rect = Rect {
    x: 38,
    y: 5,
    width: 22,
    height: 13,
};

const HELP_LINES: [&str; 11] = [
    "Move to pile",
    "[1 ... 7]",
    "",
    "Move to foundation",
    "[F]",
    "",
    "Flip stock",
    "[SPACE]",
    "",
    "(Un)Select waste",
    "[S]",
];

fn base_style() -> Style {
    Style::default().fg(TermColor::White).bg(TermColor::Black)
}

fn back_style() -> Style {
    Style::default().fg(TermColor::White).bg(TermColor::Blue)
}

fn selected_style() -> Style {
    Style::default().fg(TermColor::White).bg(TermColor::Cyan)
}

fn face_style(card: &Card) -> Style {
    let fg = match card.color() {
        Color::Red => TermColor::Red,
        Color::Black => TermColor::Black,
    };
    Style::default().fg(fg).bg(TermColor::White)
}

/// Draw the whole game.
pub fn draw(frame: &mut Frame, state: &GameState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(base_style()), area);
    frame.render_widget(Paragraph::new("[N] New game, [Q] Quit"), clip(area, Rect::new(0, 0, 24, 1)));

    draw_top_row(frame, state);
    draw_tableau(frame, state);
    draw_panel(frame);

    if let Some(message) = state.victory_message() {
        draw_victory(frame, message);
    }
}

fn draw_top_row(frame: &mut Frame, state: &GameState) {
    let board = state.board();

    let stock = card_rect(STOCK_X, TOP_ROW);
    if board.stock_top_visible() {
        draw_filled_slot(frame, stock, back_style());
    } else {
        draw_slot(frame, stock, base_style());
    }

    let waste = card_rect(WASTE_X, TOP_ROW);
    match board.waste_top() {
        Some(card) => draw_card(frame, waste, card, state.selection().waste_selected),
        None => draw_slot(frame, waste, base_style()),
    }

    for suit in Suit::ALL {
        let x = FOUNDATION_X + suit.index() as u16 * CARD_WIDTH;
        let rect = card_rect(x, TOP_ROW);
        match board.foundation_top(suit) {
            Some(card) => draw_card(frame, rect, card, false),
            None => draw_slot(frame, rect, base_style()),
        }
    }
}

fn draw_tableau(frame: &mut Frame, state: &GameState) {
    let board = state.board();
    let selection = state.selection();

    for column in 0..TABLEAU_COLUMNS {
        let x = TABLEAU_X + column as u16 * CARD_WIDTH;
        let focused = !selection.waste_selected && selection.column == column;
        let pile = board.column(column);

        if pile.is_empty() {
            let style = if focused { selected_style() } else { base_style() };
            draw_slot(frame, card_rect(x, TABLEAU_Y), style);
            continue;
        }

        for (row, card) in pile.iter().enumerate() {
            let y = TABLEAU_Y + row as u16 * TABLEAU_STEP;
            draw_card(frame, card_rect(x, y), card, focused && selection.row == row);
        }
    }
}

fn draw_panel(frame: &mut Frame) {
    let lines: Vec<Line> = HELP_LINES.iter().map(|&text| Line::from(text)).collect();
    let panel = Paragraph::new(lines).block(
        Block::bordered()
            .border_type(BorderType::Plain)
            .style(base_style())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(panel, clip(frame.area(), PANEL));
}

fn draw_victory(frame: &mut Frame, message: &str) {
    let width = message.len() as u16 + 4;
    let rect = clip(frame.area(), Rect::new(1, 10, width, 3));
    frame.render_widget(Clear, rect);
    let popup = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TermColor::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::bordered().style(base_style()));
    frame.render_widget(popup, rect);
}

fn draw_card(frame: &mut Frame, rect: Rect, card: &Card, selected: bool) {
    let rect = clip(frame.area(), rect);
    if rect.is_empty() {
        return;
    }

    let border = if selected { selected_style() } else { base_style() };
    let block = Block::bordered().border_style(border);

    let widget = if card.face_up {
        Paragraph::new(card.to_string())
            .style(face_style(card))
            .block(block)
    } else {
        Paragraph::new("").style(back_style()).block(block)
    };
    frame.render_widget(widget, rect);
}

fn draw_slot(frame: &mut Frame, rect: Rect, border: Style) {
    frame.render_widget(Block::bordered().border_style(border), clip(frame.area(), rect));
}

fn draw_filled_slot(frame: &mut Frame, rect: Rect, fill: Style) {
    let block = Block::bordered().border_style(base_style()).style(fill);
    frame.render_widget(block, clip(frame.area(), rect));
}

fn card_rect(x: u16, y: u16) -> Rect {
    Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT)
}

/// Keep widgets inside the frame on small terminals.
fn clip(area: Rect, rect: Rect) -> Rect {
    rect.intersection(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KlondikeConfig;
    use crate::zones::Deck;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &GameState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_instructions_and_panel() {
        let state = GameState::with_deck(Deck::ordered(), &KlondikeConfig::default().with_seed(1));
        let screen = render(&state, 80, 40);

        assert!(screen.contains("[N] New game, [Q] Quit"));
        assert!(screen.contains("Move to foundation"));
        assert!(!screen.contains("Hooray"));
    }

    #[test]
    fn test_renders_face_up_cards() {
        let state = GameState::with_deck(Deck::ordered(), &KlondikeConfig::default().with_seed(1));
        let screen = render(&state, 80, 40);

        // Column 0 holds the first card of the ordered deck: ace of hearts.
        assert!(screen.contains("\u{2665}A"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let state = GameState::with_deck(Deck::ordered(), &KlondikeConfig::default().with_seed(1));
        let _ = render(&state, 10, 5);
    }
}
