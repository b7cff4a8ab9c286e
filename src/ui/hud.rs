use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameState;
use crate::theme::Skin;

/// Renders the score line above the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, skin: Skin) {
    let theme = skin.theme;
    frame.render_widget(
        Paragraph::new(score_line(state.score))
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(theme.score)
                    .bg(theme.background)
                    .add_modifier(Modifier::BOLD),
            ),
        area,
    );
}

/// Renders the key hint below the board.
pub fn render_hint(frame: &mut Frame<'_>, area: Rect, skin: Skin) {
    let line = Line::from(vec![
        Span::raw("Arrows/WASD move"),
        Span::raw(skin.glyphs.separator),
        Span::raw("Q quit"),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::new().fg(skin.theme.hint).bg(skin.theme.background)),
        area,
    );
}

fn score_line(score: u32) -> Line<'static> {
    Line::from(format!("SCORE: {score}"))
}
