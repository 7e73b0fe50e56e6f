//! Terminal rendering. A thin consumer of the core state: nothing in here
//! mutates game data.

pub mod format;

use crate::core::constants::{
    PRESTIGE_POINT_LOG_BASE, PRESTIGE_POINT_PER_LOG, PRESTIGE_UNLOCK_HAPPY, PRESTIGE_UNLOCK_LEVEL,
};
use crate::core::game_state::GameState;
use crate::core::tick::TickEvent;
use crate::input::{GameOverlay, ShopCursor};
use crate::shop::{self, UpgradeKind, SHOP};
use format::{fmt_duration, fmt_number};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const EVENT_LOG_CAPACITY: usize = 100;

/// Rolling log of recent events, newest last.
pub struct EventLog {
    lines: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
        if self.lines.len() > EVENT_LOG_CAPACITY {
            self.lines.remove(0);
        }
    }

    pub fn push_event(&mut self, event: &TickEvent) {
        self.push(describe_event(event));
    }

    pub fn recent(&self, count: usize) -> &[String] {
        let start = self.lines.len().saturating_sub(count);
        &self.lines[start..]
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a tick event as a log line.
pub fn describe_event(event: &TickEvent) -> String {
    match event {
        TickEvent::Clicked {
            gain,
            was_critical,
            combo_multiplier,
        } => {
            if *was_critical {
                format!(
                    "CRITICAL pet! +{} happy (combo x{:.2})",
                    fmt_number(*gain),
                    combo_multiplier
                )
            } else {
                format!(
                    "Pet! +{} happy (combo x{:.2})",
                    fmt_number(*gain),
                    combo_multiplier
                )
            }
        }
        TickEvent::Purchased { id, price } => {
            let def = shop::get_upgrade(*id);
            format!("Bought {} for {} happy", def.name, fmt_number(*price as f64))
        }
        TickEvent::PurchaseRefused { id, price } => {
            let def = shop::get_upgrade(*id);
            format!(
                "Not enough happy for {} ({} needed)",
                def.name,
                fmt_number(*price as f64)
            )
        }
        TickEvent::SkillActivated { duration, bonus } => format!(
            "Mood time! +{:.0}% production for {:.0}s",
            bonus * 100.0,
            duration
        ),
        TickEvent::SkillUnavailable { cooldown_remaining } => format!(
            "Mood time recharging ({} left)",
            fmt_duration(cooldown_remaining.ceil() as i64)
        ),
        TickEvent::LeveledUp { new_level } => format!("Level up! Now level {}", new_level),
        TickEvent::AchievementUnlocked { name, description } => {
            format!("Achievement unlocked: {} ({})", name, description)
        }
        TickEvent::PrestigeCompleted {
            points_gained,
            total_points,
            new_multiplier,
        } => format!(
            "Prestige! +{} points ({} total, x{:.2} forever)",
            points_gained, total_points, new_multiplier
        ),
        TickEvent::PrestigeUnavailable => format!(
            "Prestige unlocks at {} happy or level {}",
            fmt_number(PRESTIGE_UNLOCK_HAPPY),
            PRESTIGE_UNLOCK_LEVEL
        ),
        TickEvent::ResetPerformed => "Save wiped. Starting over.".to_string(),
        TickEvent::OfflineProgress(report) => {
            if report.happy_gained > 0.0 {
                format!(
                    "Welcome back! {} away, +{} happy earned",
                    fmt_duration(report.elapsed_seconds),
                    fmt_number(report.happy_gained)
                )
            } else {
                "Welcome back!".to_string()
            }
        }
    }
}

/// Main UI drawing function.
pub fn draw_ui(
    frame: &mut Frame,
    state: &GameState,
    cursor: &ShopCursor,
    log: &EventLog,
    overlay: GameOverlay,
) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stats header
            Constraint::Min(10),   // Main content
            Constraint::Length(8), // Event log
            Constraint::Length(1), // Key hints footer
        ])
        .split(size);

    draw_header(frame, v_chunks[0], state);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(v_chunks[1]);

    draw_cat_panel(frame, h_chunks[0], state);
    draw_shop_panel(frame, h_chunks[1], state, cursor);
    draw_event_log(frame, v_chunks[2], log);
    draw_footer(frame, v_chunks[3]);

    match overlay {
        GameOverlay::PrestigeConfirm => draw_prestige_confirm(frame, state),
        GameOverlay::ResetConfirm => draw_reset_confirm(frame),
        GameOverlay::None => {}
    }
}

fn draw_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} happy ", fmt_number(state.happy)),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
        Span::styled(
            format!("{}/s ", fmt_number(state.effective_production_rate())),
            Style::default().fg(Color::Green),
        ),
        Span::raw("| "),
        Span::styled(
            format!(
                "Lv {} ({}/{} exp) ",
                state.level,
                fmt_number(state.exp),
                fmt_number(state.next_exp_threshold)
            ),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("| "),
        Span::styled(
            format!(
                "Prestige x{:.2} ({} pts) ",
                state.prestige_multiplier, state.prestige_points
            ),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw("| "),
        Span::raw(format!("Played {}", fmt_duration(state.playtime_seconds as i64))),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Purrfect "),
    );
    frame.render_widget(paragraph, area);
}

fn draw_cat_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let skill_line = if state.skill_active_remaining > 0.0 {
        Line::from(Span::styled(
            format!(
                "Mood time ACTIVE ({} left)",
                fmt_duration(state.skill_active_remaining.ceil() as i64)
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else if state.skill_cooldown_remaining > 0.0 {
        Line::from(Span::styled(
            format!(
                "Mood time recharging ({})",
                fmt_duration(state.skill_cooldown_remaining.ceil() as i64)
            ),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            "Mood time ready [m]",
            Style::default().fg(Color::Green),
        ))
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  /\\_/\\",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            " ( o.o )  < press SPACE",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled("  > ^ <", Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(format!("Pet power: {}", fmt_number(state.pet_power))),
        Line::from(format!("Total pets: {}", state.total_pets)),
        Line::from(format!("Combo streak: {}", state.combo)),
        Line::from(""),
        skill_line,
        Line::from(""),
        Line::from(format!(
            "Lifetime happy: {}",
            fmt_number(state.lifetime_happy)
        )),
        Line::from(format!(
            "Achievements: {}/{}",
            state.achievements.len(),
            crate::achievements::ALL_ACHIEVEMENTS.len()
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Cat "),
    );
    frame.render_widget(paragraph, area);
}

fn draw_shop_panel(frame: &mut Frame, area: Rect, state: &GameState, cursor: &ShopCursor) {
    let items: Vec<ListItem> = SHOP
        .iter()
        .enumerate()
        .map(|(i, def)| {
            let owned = state.owned_count(def.id);
            let price = crate::core::pricing::price_of(def.base_cost, owned);
            let affordable = state.happy >= price as f64;

            let kind_tag = match def.kind {
                UpgradeKind::Production => format!("+{}/s", fmt_number(def.gain)),
                UpgradeKind::Click => format!("+{} pet", fmt_number(def.gain)),
            };

            let style = if i == cursor.index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if affordable {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            ListItem::new(Line::from(Span::styled(
                format!(
                    "{:<24} x{:<3} {:>8} {:>10}",
                    def.name,
                    owned,
                    kind_tag,
                    fmt_number(price as f64)
                ),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Shop ([Up/Down] select, [Enter] buy) "),
    );
    frame.render_widget(list, area);
}

fn draw_event_log(frame: &mut Frame, area: Rect, log: &EventLog) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = log
        .recent(visible)
        .iter()
        .map(|l| Line::from(l.as_str()))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Events "),
    );
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(Span::styled(
        " [Space] pet  [m] mood time  [Enter/b] buy  [P] prestige  [s] save  [R] reset  [q] quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}

fn centered_dialog(frame: &mut Frame, width: u16, height: u16) -> Rect {
    let size = frame.size();
    let dialog_width = width.min(size.width.saturating_sub(4));
    let dialog_height = height.min(size.height.saturating_sub(4));
    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;
    let area = Rect::new(x, y, dialog_width, dialog_height);
    frame.render_widget(Clear, area);
    area
}

/// Draws the prestige confirmation dialog as an overlay.
fn draw_prestige_confirm(frame: &mut Frame, state: &GameState) {
    let area = centered_dialog(frame, 52, 14);

    let eligible = state.can_prestige(PRESTIGE_UNLOCK_HAPPY, PRESTIGE_UNLOCK_LEVEL);
    let reward = state.compute_prestige_reward(PRESTIGE_POINT_LOG_BASE, PRESTIGE_POINT_PER_LOG);
    let new_multiplier = crate::core::prestige::prestige_multiplier_for(reward.total_points);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Prestiging will reset:",
            Style::default().fg(Color::Red),
        )),
        Line::from("  - Happy, upgrades, and pet power"),
        Line::from("  - Level, exp, and combo"),
        Line::from(""),
        Line::from(Span::styled(
            "You will keep:",
            Style::default().fg(Color::Green),
        )),
        Line::from("  - Achievements, playtime, lifetime totals"),
        Line::from(vec![
            Span::raw("  - Multiplier: "),
            Span::styled(
                format!("x{:.2}", state.prestige_multiplier),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" -> "),
            Span::styled(
                format!("x{:.2} (+{} pts)", new_multiplier, reward.gained),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    if eligible {
        lines.push(Line::from(vec![
            Span::raw("      "),
            Span::styled(
                "[Y] Yes, Prestige",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                "[N] Cancel",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            format!(
                "   Locked: reach {} happy or level {}",
                fmt_number(PRESTIGE_UNLOCK_HAPPY),
                PRESTIGE_UNLOCK_LEVEL
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    " Confirm Prestige ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

/// Draws the full-reset confirmation dialog as an overlay.
fn draw_reset_confirm(frame: &mut Frame) {
    let area = centered_dialog(frame, 46, 8);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Wipe ALL progress, including prestige?",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("This cannot be undone."),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                "[Y] Yes, wipe it",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                "[N] Cancel",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    " Confirm Reset ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
