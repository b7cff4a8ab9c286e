use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::{DeathReason, GameState};
use crate::theme::Skin;

const POPUP_WIDTH: u16 = 36;
const POPUP_HEIGHT: u16 = 9;
const RESTART_LABEL: &str = " RESTART GAME ";

/// Draws the game-over popup centered in `area` and returns the restart
/// button's screen rectangle.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    skin: Skin,
) -> Rect {
    let theme = skin.theme;
    let popup = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_set(skin.glyphs.border)
        .border_style(Style::new().fg(theme.game_over).bg(theme.background))
        .style(Style::new().bg(theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [title_row, _, score_row, cause_row, _, button_row, hint_row] =
        Layout::vertical([Constraint::Length(1); 7]).areas(inner);

    let centered = |text: Line<'static>, style: Style| {
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style.bg(theme.background))
    };

    frame.render_widget(
        centered(
            Line::from("GAME OVER"),
            Style::new()
                .fg(theme.game_over)
                .add_modifier(Modifier::BOLD),
        ),
        title_row,
    );
    frame.render_widget(
        centered(
            Line::from(format!("FINAL SCORE: {}", state.score)),
            Style::new().fg(theme.score),
        ),
        score_row,
    );
    frame.render_widget(
        centered(
            Line::from(death_reason_text(state.death_reason)),
            Style::new().fg(theme.hint),
        ),
        cause_row,
    );

    let button = button_rect(button_row, RESTART_LABEL);
    frame.render_widget(
        Paragraph::new(RESTART_LABEL).style(
            Style::new()
                .fg(theme.button_fg)
                .bg(theme.button_bg)
                .add_modifier(Modifier::BOLD),
        ),
        button,
    );

    frame.render_widget(
        centered(
            Line::from("Space/Enter: restart   Q: quit"),
            Style::new().fg(theme.hint),
        ),
        hint_row,
    );

    button
}

fn death_reason_text(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "Cause: hit the wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        Some(DeathReason::BoardFilled) => "Cause: no room left",
        None => "",
    }
}

fn button_rect(row: Rect, label: &str) -> Rect {
    let label_width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
    let width = label_width.min(row.width);
    Rect {
        x: row.x + (row.width - width) / 2,
        y: row.y,
        width,
        height: row.height.min(1),
    }
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
