use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::config::GridSize;
use crate::game::GameState;
use crate::snake::Position;
use crate::starfield::Starfield;
use crate::theme::Skin;
use crate::ui::hud::{render_hint, render_hud};
use crate::ui::menu::render_game_over_menu;

/// Terminal columns used by one board cell.
pub const CELL_WIDTH: u16 = 2;

/// Rows above and below the board: score line and key hint.
const HUD_ROWS: u16 = 2;

/// Screen regions produced by one render pass that input handling needs.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FrameLayout {
    /// Clickable restart button, present only while the game is over.
    pub restart_button: Option<Rect>,
}

impl FrameLayout {
    /// Returns true when the terminal cell lies on the restart button.
    #[must_use]
    pub fn hits_restart(&self, column: u16, row: u16) -> bool {
        self.restart_button.is_some_and(|button| {
            column >= button.x && column < button.right() && row >= button.y && row < button.bottom()
        })
    }
}

/// Returns the terminal size (columns, rows) needed to show `bounds`.
#[must_use]
pub fn required_terminal_size(bounds: GridSize) -> (u16, u16) {
    let (board_width, board_height) = board_size(bounds);
    (board_width, board_height.saturating_add(HUD_ROWS))
}

/// Renders the full game frame from immutable state.
pub fn render(
    frame: &mut Frame<'_>,
    state: &GameState,
    stars: &Starfield,
    skin: Skin,
) -> FrameLayout {
    let area = frame.area();
    let theme = skin.theme;
    frame
        .buffer_mut()
        .set_style(area, Style::new().bg(theme.background));

    let (needed_width, needed_height) = required_terminal_size(state.bounds());
    if area.width < needed_width || area.height < needed_height {
        render_too_small(frame, area, (needed_width, needed_height), skin);
        return FrameLayout::default();
    }

    let (board_width, board_height) = board_size(state.bounds());
    let [score_row, board_row, hint_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(board_height),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);
    let [board_area] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(board_row);

    render_hud(frame, score_row, state, skin);

    let block = Block::bordered()
        .border_set(skin.glyphs.border)
        .border_style(Style::new().fg(theme.border).bg(theme.background));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_grid(frame, inner, state.bounds(), skin);
    render_stars(frame, inner, state.bounds(), stars, skin);
    render_food(frame, inner, state, skin);
    render_snake(frame, inner, state, skin);

    render_hint(frame, hint_row, skin);

    if !state.is_over() {
        return FrameLayout::default();
    }

    frame
        .buffer_mut()
        .set_style(inner, Style::new().add_modifier(Modifier::DIM));
    let restart_button = render_game_over_menu(frame, board_area, state, skin);

    FrameLayout {
        restart_button: Some(restart_button),
    }
}

fn board_size(bounds: GridSize) -> (u16, u16) {
    (
        bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2),
        bounds.height.saturating_add(2),
    )
}

fn render_grid(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, skin: Skin) {
    let theme = skin.theme;
    let buffer = frame.buffer_mut();
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let Some((column, row)) = cell_to_terminal(inner, bounds, Position { x, y }) else {
                continue;
            };
            let bg = if (x + y) % 2 == 0 {
                theme.background
            } else {
                theme.grid
            };
            buffer.set_string(column, row, skin.glyphs.empty, Style::new().bg(bg));
        }
    }
}

fn render_stars(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    stars: &Starfield,
    skin: Skin,
) {
    let shades = &skin.theme.stars;
    let buffer = frame.buffer_mut();
    for star in stars.stars() {
        let Some((x, y)) = cell_to_terminal(inner, bounds, star.position) else {
            continue;
        };
        let color = shades[star.shade % shades.len()];
        buffer.set_string(x, y, skin.glyphs.star, Style::new().fg(color));
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, skin: Skin) {
    let Some((x, y)) = cell_to_terminal(inner, state.bounds(), state.food) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        skin.glyphs.food,
        Style::new()
            .fg(skin.theme.food)
            .bg(skin.theme.background)
            .add_modifier(Modifier::BOLD),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, skin: Skin) {
    let theme = skin.theme;
    let buffer = frame.buffer_mut();

    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                skin.glyphs.snake_head,
                Style::new()
                    .fg(theme.snake_eyes)
                    .bg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        let color = if index % 2 == 0 {
            theme.snake_body
        } else {
            theme.snake_body_alt
        };
        buffer.set_string(
            x,
            y,
            skin.glyphs.snake_body,
            Style::new().fg(color).bg(color),
        );
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, needed: (u16, u16), skin: Skin) {
    let lines = vec![
        Line::from(format!(
            "Terminal too small: need {}x{}, have {}x{}",
            needed.0, needed.1, area.width, area.height
        )),
        Line::from("Enlarge the window or pass a smaller --width/--height. Q quits."),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::new().fg(skin.theme.score).bg(skin.theme.background)),
        area,
    );
}

/// Maps a board cell to the terminal cell of its left column.
fn cell_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::buffer::Buffer;

    use super::{FrameLayout, render, required_terminal_size};
    use crate::config::GridSize;
    use crate::game::{GameState, GameStatus};
    use crate::snake::Position;
    use crate::starfield::Starfield;
    use crate::theme::Skin;

    const BOARD: GridSize = GridSize {
        width: 12,
        height: 10,
    };

    fn draw(state: &GameState, width: u16, height: u16) -> (Buffer, FrameLayout) {
        draw_with_stars(state, &Starfield::default(), width, height)
    }

    fn draw_with_stars(
        state: &GameState,
        stars: &Starfield,
        width: u16,
        height: u16,
    ) -> (Buffer, FrameLayout) {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend should build");
        let mut layout = FrameLayout::default();
        terminal
            .draw(|frame| layout = render(frame, state, stars, Skin::new(true)))
            .expect("draw should succeed");
        (terminal.backend().buffer().clone(), layout)
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn symbol_at(buffer: &Buffer, x: u16, y: u16) -> String {
        buffer.content()[buffer.index_of(x, y)].symbol().to_owned()
    }

    #[test]
    fn required_size_accounts_for_double_width_cells_and_hud() {
        assert_eq!(required_terminal_size(BOARD), (26, 14));
    }

    #[test]
    fn playing_frame_shows_score_and_snake_without_overlay() {
        let mut state = GameState::new_with_seed(BOARD, 1);
        state.food = Position::new(8, 8);
        let (buffer, layout) = draw(&state, 26, 14);
        let screen = text(&buffer);

        assert!(screen.contains("SCORE: 0"));
        assert!(!screen.contains("GAME OVER"));
        assert_eq!(layout.restart_button, None);

        // Board starts at row 1 (below the score line); inner area is offset by the border.
        assert_eq!(symbol_at(&buffer, 1 + 5 * 2, 2 + 5), ":");
        assert_eq!(symbol_at(&buffer, 1 + 4 * 2, 2 + 5), "#");
        assert_eq!(symbol_at(&buffer, 1 + 8 * 2, 2 + 8), "(");
    }

    #[test]
    fn game_over_frame_shows_final_score_and_restart_button() {
        let mut state = GameState::new_with_seed(BOARD, 2);
        state.food = Position::new(6, 5);
        state.step();
        state.status = GameStatus::GameOver;

        let (buffer, layout) = draw(&state, 40, 20);
        let screen = text(&buffer);

        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("FINAL SCORE: 10"));
        assert!(screen.contains("RESTART GAME"));

        let button = layout.restart_button.expect("button should be shown");
        assert!(layout.hits_restart(button.x, button.y));
        assert!(!layout.hits_restart(button.right(), button.y));

        let label: String = (button.x..button.right())
            .map(|x| symbol_at(&buffer, x, button.y))
            .collect();
        assert_eq!(label.trim(), "RESTART GAME");
    }

    #[test]
    fn small_terminal_shows_notice_instead_of_board() {
        let state = GameState::new_with_seed(BOARD, 3);
        let (buffer, layout) = draw(&state, 20, 8);

        assert!(text(&buffer).contains("too small"));
        assert_eq!(layout, FrameLayout::default());
    }

    #[test]
    fn stars_show_on_empty_cells_under_the_snake_and_food() {
        let state = GameState::new_with_seed(BOARD, 4);
        let stars = Starfield::scatter(&mut StdRng::seed_from_u64(4), BOARD, 3);
        let (buffer, _) = draw_with_stars(&state, &stars, 26, 14);

        let mut seen_empty_star = false;
        for star in stars.stars() {
            let (x, y) = (
                1 + u16::try_from(star.position.x).unwrap() * 2,
                2 + u16::try_from(star.position.y).unwrap(),
            );
            let symbol = symbol_at(&buffer, x, y);
            if state.snake.occupies(star.position) {
                assert_ne!(symbol, ".");
            } else if star.position == state.food {
                assert_eq!(symbol, "(");
            } else {
                assert_eq!(symbol, ".");
                seen_empty_star = true;
            }
        }
        assert!(seen_empty_star);
    }
}
