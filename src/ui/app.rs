//! Main application for the Ataxx GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::error::Result;
use crate::rules::{self, Outcome};
use crate::{GameConfig, Player};

use super::board_view::{BoardView, Overlay};
use super::session::{GameMode, Session};
use super::theme::*;

/// Main Ataxx application
pub struct AtaxxApp {
    session: Session,
    board_view: BoardView,
    show_debug: bool,
}

impl AtaxxApp {
    /// Create the app for a human-vs-computer game with `config`
    pub fn new(config: GameConfig) -> Result<Self> {
        let mode = GameMode::PvE { human: config.human };
        Ok(Self {
            session: Session::new(config, mode)?,
            board_view: BoardView::default(),
            show_debug: true,
        })
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Computer, Blue)").clicked() {
                        self.session.restart(GameMode::PvE { human: Player::A });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs Computer, Green)").clicked() {
                        self.session.restart(GameMode::PvE { human: Player::B });
                        ui.close_menu();
                    }
                    if ui.button("New Game (Hotseat)").clicked() {
                        self.session.restart(GameMode::PvP);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Search Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode {
                        GameMode::PvE { human } => format!("vs Computer - You: {}", player_name(human)),
                        GameMode::PvP => "Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and search stats
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(SIDE_PANEL_WIDTH - 20.0)
            .max_width(SIDE_PANEL_WIDTH + 20.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_pieces_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.session.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("ATAXX").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let (rows, cols) = (self.session.state.rows(), self.session.state.cols());
            ui.label(RichText::new(format!("{rows} x {cols} board")).size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.state.turn;

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, piece_color(turn));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(player_name(turn).to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.session.is_ai_thinking() {
                        ("Computer thinking...", STATUS_BUSY)
                    } else if self.session.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.session.selected.is_some() {
                        ("Pick a destination", STATUS_OK)
                    } else {
                        ("Pick a piece", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            if !self.session.is_game_over() {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("{} legal moves", self.session.mobility()))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }

            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(12.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render piece count card
    fn render_pieces_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let (a, b) = rules::piece_counts(&self.session.state.board);
            Self::render_count_row(ui, Player::A, a);
            ui.add_space(6.0);
            Self::render_count_row(ui, Player::B, b);

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{} empty", self.session.state.board.empty_count()))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_count_row(ui: &mut egui::Ui, player: Player, count: usize) {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(18.0, 18.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 8.0, piece_color(player));
            ui.label(RichText::new(player_name(player)).size(13.0).color(TEXT_PRIMARY));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(count.to_string()).size(14.0).strong().color(TEXT_PRIMARY));
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            Frame::new()
                .fill(egui::Color32::from_rgb(50, 53, 58))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("New Game (N)").size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click());
                    if ui.add(label).clicked() {
                        self.session.reset();
                    }
                });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.move_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(mv) = self.session.last_move {
                ui.label(RichText::new(format!("Last: {mv}")).size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render search statistics card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.session.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("Depth {}", result.depth))
                                    .size(11.0)
                                    .strong()
                                    .color(STATUS_OK),
                            );
                            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                            });
                        });
                    });

                    if let Some(mv) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(RichText::new(format!("-> {mv}")).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                } else {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let text = outcome_text(self.session.outcome);

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(text).size(16.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label =
                                egui::Label::new(RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY))
                                    .sense(egui::Sense::click());
                            if ui.add(label).clicked() {
                                self.session.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().frame(Frame::new().fill(BOARD_BG)).show(ctx, |ui| {
            let targets = self.session.selected_targets();
            let overlay = Overlay {
                turn: self.session.state.turn,
                selected: self.session.selected,
                targets: &targets,
                last_move: self.session.last_move.map(|m| m.to),
                interactive: self.session.is_human_turn()
                    && !self.session.is_game_over()
                    && !self.session.is_ai_thinking(),
            };

            if let Some(pos) = self.board_view.show(ui, &self.session.state.board, &overlay) {
                self.session.click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

/// Final message shown once the game is decided
pub fn outcome_text(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(player) => format!("Game Over, {} wins", player_name(player)),
        Outcome::Tie => "Game Over, it's a tie".to_string(),
        Outcome::InProgress => String::new(),
    }
}

impl eframe::App for AtaxxApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();

        if self.session.is_ai_turn() && !self.session.is_ai_thinking() && !self.session.is_game_over() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
