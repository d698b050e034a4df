//! Main application for the Connect Four GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, Key, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::config::{GameConfig, GameMode};
use crate::Mark;

/// Keys 1-7 select columns 0-6
const COLUMN_KEYS: [Key; 7] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
];

/// Main Connect Four application
pub struct ConnectFourApp {
    config: GameConfig,
    /// `None` while the mode selection screen is shown
    state: Option<GameState>,
    board_view: BoardView,
    show_debug: bool,
}

impl ConnectFourApp {
    /// Create the app; starts straight into `config.mode` when one is set
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        let state = config.mode.map(|mode| GameState::new(mode, &config));
        Self {
            config,
            state,
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn start_game(&mut self, mode: GameMode) {
        log::info!("starting {} game", mode.label());
        self.state = Some(GameState::new(mode, &self.config));
    }

    /// Render the mode selection screen
    fn render_mode_select(&mut self, ctx: &Context) {
        let mut chosen = None;

        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.25);
                    ui.label(RichText::new("CONNECT FOUR").size(36.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(32.0);

                    for (key, mode) in [("1", GameMode::Pvp), ("2", GameMode::Pvai)] {
                        let text = format!("Press {} for {}", key, mode.label());
                        let button = egui::Button::new(RichText::new(text).size(20.0).color(TEXT_PRIMARY))
                            .fill(CARD_BG)
                            .corner_radius(CornerRadius::same(8))
                            .min_size(egui::vec2(320.0, 48.0));
                        if ui.add(button).clicked() {
                            chosen = Some(mode);
                        }
                        ui.add_space(12.0);
                    }
                });
            });

        ctx.input(|i| {
            if i.key_pressed(Key::Num1) {
                chosen = Some(GameMode::Pvp);
            } else if i.key_pressed(Key::Num2) {
                chosen = Some(GameMode::Pvai);
            }
        });

        if let Some(mode) = chosen {
            self.start_game(mode);
        }
    }

    /// Render the top bar with the session scores
    fn render_score_bar(ctx: &Context, state: &GameState) {
        TopBottomPanel::top("score_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                for mark in [Mark::Red, Mark::Yellow] {
                    let (fill, _) = piece_colors(mark);
                    ui.label(RichText::new("\u{25CF}").size(16.0).color(fill));
                    ui.label(
                        RichText::new(format!("{}: {}", state.player_label(mark), state.scores.get(mark)))
                            .size(14.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(16.0);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(state.mode.label()).color(TEXT_SECONDARY));
                });
            });
        });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with turn, result and AI info
    fn render_side_panel(ctx: &Context, state: &GameState, show_debug: bool) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.add_space(8.0);
                Self::render_turn_card(ui, state);

                if let Some(text) = state.result_text() {
                    ui.add_space(10.0);
                    Self::render_game_over_card(ui, state, &text);
                }

                if show_debug {
                    ui.add_space(10.0);
                    Self::render_debug_card(ui, state);
                }

                if let Some(msg) = &state.message {
                    ui.add_space(10.0);
                    Frame::new()
                        .fill(MESSAGE_BG)
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(msg).size(12.0).color(TEXT_PRIMARY));
                        });
                }

                ui.add_space(10.0);
                ui.label(
                    RichText::new("1-7 drop  R restart  N modes  Q quit  D debug")
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            });
    }

    fn render_turn_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (fill, _) = piece_colors(state.current_turn);
            ui.horizontal(|ui| {
                ui.label(RichText::new("\u{25CF}").size(28.0).color(fill));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(state.player_label(state.current_turn))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let (status, color) = if state.game_over.is_some() {
                        ("Game over".to_string(), TEXT_SECONDARY)
                    } else if let Some(elapsed) = state.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_WAIT)
                    } else {
                        ("Your move".to_string(), STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_game_over_card(ui: &mut egui::Ui, state: &GameState, text: &str) {
        let accent = match state.winning_line() {
            Some(line) => state
                .board
                .get(line[0])
                .mark()
                .map_or(TEXT_PRIMARY, |mark| piece_colors(mark).0),
            None => TEXT_PRIMARY,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(text).size(22.0).strong().color(accent));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Press R to Play Again or Q to Quit")
                            .size(12.0)
                            .color(TEXT_PRIMARY),
                    );
                });
            });
    }

    /// Render last search statistics
    fn render_debug_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &state.last_ai_result {
                Some(result) => {
                    if let Some(column) = result.best_move {
                        ui.label(
                            RichText::new(format!("Column {}", column + 1))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!("{}ms, {} nodes", result.time_ms, result.nodes))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                }
                None => {
                    ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    /// Render the main board
    fn render_board(ctx: &Context, state: &mut GameState, board_view: &mut BoardView) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(12.0))
            .show(ctx, |ui| {
                let accepting_input =
                    state.game_over.is_none() && state.is_human_turn() && !state.is_ai_thinking();

                let clicked = board_view.show(
                    ui,
                    &state.board,
                    state.current_turn,
                    state.last_move,
                    state.winning_line(),
                    accepting_input,
                );

                if let Some(column) = clicked {
                    if let Err(msg) = state.try_drop(column) {
                        state.message = Some(msg);
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let mut back_to_menu = false;

        if let Some(state) = self.state.as_mut() {
            ctx.input(|i| {
                for (column, key) in COLUMN_KEYS.iter().enumerate() {
                    if i.key_pressed(*key) && state.game_over.is_none() {
                        if let Err(msg) = state.try_drop(column) {
                            state.message = Some(msg);
                        }
                    }
                }

                // D - Toggle debug panel
                if i.key_pressed(Key::D) {
                    self.show_debug = !self.show_debug;
                }

                // R - Restart, keeping scores
                if i.key_pressed(Key::R) {
                    state.reset();
                }

                // N - Back to mode selection
                if i.key_pressed(Key::N) {
                    back_to_menu = true;
                }
            });
        }

        if back_to_menu {
            self.state = None;
        }
        // Q - Quit from any screen
        if ctx.input(|i| i.key_pressed(Key::Q)) {
            log::info!("quit requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for ConnectFourApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let Some(state) = self.state.as_mut() else {
            self.render_mode_select(ctx);
            return;
        };

        // Check AI result
        state.check_ai_result();

        // Start AI thinking if needed
        if state.is_ai_turn() && !state.is_ai_thinking() && state.game_over.is_none() {
            state.start_ai_thinking();
        }

        Self::render_score_bar(ctx, state);
        Self::render_side_panel(ctx, state, self.show_debug);
        Self::render_board(ctx, state, &mut self.board_view);

        // Keep polling while the AI works
        if state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
