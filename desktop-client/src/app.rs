use common::best_score::PersistentBestScore;
use common::config::FileConfigBackend;
use common::games::puzzle2048::{
    BOARD_SIZE, Board, Direction, GameSession, Position, RandomTileSource, SessionObserver,
};
use eframe::egui;

pub type DesktopSession = GameSession<RandomTileSource, PersistentBestScore<FileConfigBackend>>;

const CELL_SIZE: f32 = 84.0;
const CELL_GAP: f32 = 8.0;

struct GameOverInfo {
    final_score: u32,
    best: u32,
}

/// Event sink handed into the session; the board itself is re-read from the
/// session every frame, so only the overlay needs remembering.
#[derive(Default)]
struct OverlayState {
    game_over: Option<GameOverInfo>,
}

impl SessionObserver for OverlayState {
    fn board_changed(&mut self, _board: &Board, _score: u32) {}

    fn game_over(&mut self, final_score: u32, best: u32) {
        self.game_over = Some(GameOverInfo { final_score, best });
    }

    fn new_game(&mut self) {
        self.game_over = None;
    }
}

pub struct GameApp {
    session: DesktopSession,
    overlay: OverlayState,
}

impl GameApp {
    pub fn new(session: DesktopSession) -> Self {
        Self {
            session,
            overlay: OverlayState::default(),
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if self.overlay.game_over.is_some() {
            if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.session.request_new_game(&mut self.overlay);
            }
            return;
        }

        let direction = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(Direction::Right)
            } else {
                None
            }
        });

        if let Some(direction) = direction {
            self.session.request_move(direction, &mut self.overlay);
        }
    }

    fn render(&mut self, ui: &mut egui::Ui) {
        let mut requested_direction = None;
        let mut new_game_clicked = false;

        ui.vertical_centered(|ui| {
            ui.heading("2048");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let span = BOARD_SIZE as f32 * (CELL_SIZE + CELL_GAP);
                ui.add_space((ui.available_width() - span) / 2.0);
                ui.label(format!("Score: {}", self.session.score()));
                ui.add_space(20.0);
                ui.label(format!("Best: {}", self.session.best()));
                ui.add_space(20.0);
                if ui.button("New Game").clicked() {
                    new_game_clicked = true;
                }
            });
            ui.add_space(10.0);

            render_board(ui, self.session.board());

            ui.add_space(10.0);
            requested_direction = render_controls(ui);

            ui.add_space(12.0);
            if let Some(info) = &self.overlay.game_over {
                ui.heading(
                    egui::RichText::new("Game Over")
                        .color(egui::Color32::RED)
                        .size(28.0),
                );
                ui.label(format!("Final Score: {}", info.final_score));
                ui.label(format!("Highest Tile: {}", self.session.highest_tile()));
                ui.label(format!("Best: {}", info.best));
                if ui.button("New Game (Enter)").clicked() {
                    new_game_clicked = true;
                }
            } else {
                ui.label("Use Arrow Keys or WASD to move tiles");
            }
        });

        if let Some(direction) = requested_direction {
            self.session.request_move(direction, &mut self.overlay);
        }
        if new_game_clicked {
            self.session.request_new_game(&mut self.overlay);
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render(ui);
        });
    }
}

fn render_board(ui: &mut egui::Ui, board: &Board) {
    let span = BOARD_SIZE as f32 * (CELL_SIZE + CELL_GAP);
    for row in 0..BOARD_SIZE {
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - span) / 2.0);
            for col in 0..BOARD_SIZE {
                render_tile(ui, board.get(Position::new(row, col)));
            }
        });
    }
}

fn render_tile(ui: &mut egui::Ui, value: u32) {
    let (bg, text_color) = tile_colors(value);
    let size = egui::vec2(CELL_SIZE, CELL_SIZE);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());

    ui.painter().rect_filled(rect.shrink(CELL_GAP / 2.0), 6.0, bg);

    if value > 0 {
        let font_size = if value >= 1000 {
            CELL_SIZE * 0.28
        } else if value >= 100 {
            CELL_SIZE * 0.34
        } else {
            CELL_SIZE * 0.42
        };

        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            value.to_string(),
            egui::FontId::proportional(font_size),
            text_color,
        );
    }
}

fn render_controls(ui: &mut egui::Ui) -> Option<Direction> {
    let mut direction = None;

    ui.vertical_centered(|ui| {
        if ui.button("  ↑  ").clicked() {
            direction = Some(Direction::Up);
        }
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - 140.0) / 2.0);
            if ui.button("  ←  ").clicked() {
                direction = Some(Direction::Left);
            }
            if ui.button("  ↓  ").clicked() {
                direction = Some(Direction::Down);
            }
            if ui.button("  →  ").clicked() {
                direction = Some(Direction::Right);
            }
        });
    });

    direction
}

fn tile_colors(value: u32) -> (egui::Color32, egui::Color32) {
    let dark_text = egui::Color32::from_rgb(119, 110, 101);
    let light_text = egui::Color32::WHITE;

    match value {
        0 => (
            egui::Color32::from_rgb(205, 193, 180),
            egui::Color32::TRANSPARENT,
        ),
        2 => (egui::Color32::from_rgb(238, 228, 218), dark_text),
        4 => (egui::Color32::from_rgb(237, 224, 200), dark_text),
        8 => (egui::Color32::from_rgb(242, 177, 121), light_text),
        16 => (egui::Color32::from_rgb(245, 149, 99), light_text),
        32 => (egui::Color32::from_rgb(246, 124, 95), light_text),
        64 => (egui::Color32::from_rgb(246, 94, 59), light_text),
        128 => (egui::Color32::from_rgb(237, 207, 114), light_text),
        256 => (egui::Color32::from_rgb(237, 204, 97), light_text),
        512 => (egui::Color32::from_rgb(237, 200, 80), light_text),
        1024 => (egui::Color32::from_rgb(237, 197, 63), light_text),
        2048 => (egui::Color32::from_rgb(237, 194, 46), light_text),
        _ => (egui::Color32::from_rgb(60, 58, 50), light_text),
    }
}
