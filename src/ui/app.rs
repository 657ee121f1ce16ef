//! Main application for the GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use log::warn;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::config::AppConfig;
use crate::engine::Rule;
use crate::GameStatus;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            state: GameState::new(Duration::from_millis(config.ai.think_delay_ms)),
            board_view: BoardView::default(),
            show_debug: config.ui.show_debug,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("You: O  |  AI: X");
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("4x4, four in a line wins").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = match self.state.game.status() {
                GameStatus::HumanWin => WIN_HIGHLIGHT,
                GameStatus::ComputerWin => STATUS_LOSS,
                GameStatus::Tie => TEXT_SECONDARY,
                GameStatus::InProgress if self.state.is_ai_thinking() => STATUS_WARNING,
                GameStatus::InProgress => STATUS_NORMAL,
            };
            ui.label(RichText::new(self.state.status_text()).size(18.0).strong().color(color));
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(egui::Color32::from_rgb(50, 53, 58))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                let label = egui::Label::new(RichText::new("New Game").size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(label).clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.state.game.last_ai_result() {
                Some(result) => {
                    let rule = match result.rule {
                        Rule::ImmediateWin => "Immediate win",
                        Rule::Block => "Block",
                        Rule::Strategic => "Strategic",
                        Rule::Center => "Center",
                        Rule::Corner => "Corner",
                        Rule::AnyCell => "Any cell",
                    };
                    ui.label(RichText::new(rule).size(11.0).strong().color(STATUS_NORMAL));
                    if let Some(score) = result.score {
                        ui.label(RichText::new(format!("Score: {}", score)).size(10.0).color(TEXT_SECONDARY));
                    }
                    ui.label(
                        RichText::new(format!("-> {}", result.best_move))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
                None => {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            }

            if let Some(remaining) = self.state.ai_thinking_remaining() {
                ui.label(
                    RichText::new(format!("answering in {}ms", remaining.as_millis()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
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
        CentralPanel::default().show(ctx, |ui| {
            let board = *self.state.game.board();
            let clicked = self.board_view.show(
                ui,
                &board,
                self.state.game.last_move(),
                board.winning_line(),
                self.state.accepts_input(),
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place(pos) {
                    warn!("rejected click: {}", err);
                    self.state.message = Some(err.to_string());
                }
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
                self.state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.check_ai_result();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if let Some(remaining) = self.state.ai_thinking_remaining() {
            ctx.request_repaint_after(remaining);
        }
    }
}
