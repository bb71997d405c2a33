//! eframe application: routes window input to the game and draws it.

use crate::config::{AppConfig, ConfigError};
use crate::geometry::Grid;
use crate::render;
use egui::{Align2, Key, Sense, Vec2};
use noughts_core::{Game, GameRng, Turn};
use tracing::{debug, info, instrument};

/// Windowed tic-tac-toe against the random opponent.
#[derive(Debug)]
pub struct NoughtsApp {
    game: Game,
    cell_size: f32,
    restart_key: Key,
    /// Result text waiting to be dismissed.
    notice: Option<&'static str>,
}

impl NoughtsApp {
    /// Builds the app and its game from configuration.
    ///
    /// The random source is seeded here, once, from the configured seed or
    /// from the OS.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed() {
            Some(seed) => GameRng::new(*seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), human = %config.human_mark(), "Starting game");

        Ok(Self {
            game: Game::new(*config.human_mark(), rng),
            cell_size: *config.cell_size(),
            restart_key: config.restart_key()?,
            notice: None,
        })
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the result notice currently shown, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Handles a primary click at `(row, col)`.
    ///
    /// Raises the result notice when the click ends the game.
    #[instrument(skip(self))]
    pub fn click(&mut self, row: usize, col: usize) {
        if self.game.is_over() {
            return;
        }
        match self.game.apply_human_move(row, col) {
            Turn::Ignored => debug!("Click ignored"),
            Turn::Played { human, reply } => {
                debug!(%human, ?reply, board = %self.game.board().display(), "Turn played");
                self.notice = render::result_message(self.game.status());
            }
        }
    }

    /// Starts a new round and hides any notice.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game.reset();
        self.notice = None;
    }

    /// Applies keyboard input from this frame.
    ///
    /// Releasing the restart key starts a new round.
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_released(self.restart_key)) {
            self.restart();
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("result")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notice = None;
        }
    }
}

impl eframe::App for NoughtsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let size = Vec2::splat(self.cell_size * noughts_core::COLS as f32);
                let (response, painter) = ui.allocate_painter(size, Sense::click());
                let grid = Grid::new(response.rect.min, self.cell_size);

                // Board clicks wait until the notice is dismissed.
                if response.clicked()
                    && self.notice.is_none()
                    && let Some((row, col)) = response.interact_pointer_pos().and_then(|p| grid.locate(p))
                {
                    self.click(row, col);
                }

                render::draw_board(&painter, &grid, &self.game);
            });

        self.show_notice(ctx);
    }
}
