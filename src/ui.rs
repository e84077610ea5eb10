//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the three screens (categories, player, saved) with
//! `ratatui`. It only reads state; all mutation happens in the event loop.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Tabs, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Screen};
use crate::catalog::{Category, Track};
use crate::config::UiSettings;
use crate::controller::{PlaybackController, PlaybackMode, format_clock};
use crate::player::MediaPlayer;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("tab/1-3", "screens");
    map.insert("j/k", "up/down");
    map.insert("h/l", "category");
    map.insert("enter", "play selected");
    map.insert("space/p", "play/pause");
    map.insert("x", "stop");
    map.insert("m", "infinite/timer");
    map.insert("+/-", "timer length");
    map.insert("f", "save/unsave");
    map.insert("d", "remove");
    map.insert("q", "quit");
    map
});

/// Render the controls help text relevant to `screen`.
fn controls_text(screen: Screen) -> String {
    let order: &[&str] = match screen {
        Screen::Categories => &["tab/1-3", "j/k", "h/l", "enter", "space/p", "f", "q"],
        Screen::Player => &["tab/1-3", "space/p", "x", "m", "+/-", "f", "q"],
        Screen::Saved => &["tab/1-3", "j/k", "enter", "space/p", "d", "q"],
    };
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Terminal colour for a category's accent.
fn category_color(category: Category) -> Color {
    match category.color() {
        "blue" => Color::Blue,
        "green" => Color::Green,
        "purple" => Color::Magenta,
        _ => Color::Reset,
    }
}

fn saved_marker(saved: bool) -> &'static str {
    if saved { "♥ " } else { "  " }
}

fn track_line(track: &Track, saved: bool, now_playing: bool) -> Line<'static> {
    let marker = if now_playing { "▶ " } else { "  " };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(saved_marker(saved), Style::default().fg(Color::Red)),
        Span::raw(format!("{} - {}", track.title, track.artist)),
        Span::raw("  "),
        Span::styled(track.formatted_duration(), Style::default().add_modifier(Modifier::DIM)),
    ])
}

/// Fraction of the sleep timer already used, for the player gauge.
fn timer_ratio(mode: PlaybackMode, remaining: std::time::Duration) -> Option<f64> {
    match mode {
        PlaybackMode::Fixed(total) if !total.is_zero() => {
            let done = total.saturating_sub(remaining).as_secs_f64() / total.as_secs_f64();
            Some(done.clamp(0.0, 1.0))
        }
        _ => None,
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw<P: MediaPlayer>(
    frame: &mut Frame,
    app: &App,
    controller: &PlaybackController<P>,
    ui_settings: &UiSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header with screen tabs
    let titles: Vec<&str> = Screen::ALL.iter().map(|s| s.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(ui_settings.header_text.as_str())
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(tabs, chunks[0]);

    match app.screen {
        Screen::Categories => draw_categories(frame, chunks[1], app, controller),
        Screen::Player => draw_player(frame, chunks[1], app, controller),
        Screen::Saved => draw_saved(frame, chunks[1], app, controller),
    }

    // Status box
    let status = {
        let snapshot = controller.snapshot();
        let mut parts: Vec<String> = Vec::new();
        match snapshot.track.and_then(|id| controller.catalog().get(id)) {
            Some(t) => parts.push(format!("{}: {}", snapshot.state.label(), t.title)),
            None => parts.push("No track selected".to_string()),
        }
        if snapshot.track.is_some() {
            parts.push(format!("{} elapsed", format_clock(snapshot.elapsed)));
        }
        match snapshot.mode {
            PlaybackMode::Fixed(_) => parts.push(format!(
                "{} ({} left)",
                snapshot.mode.label(),
                format_clock(snapshot.remaining)
            )),
            PlaybackMode::Unbounded => parts.push(snapshot.mode.label()),
        }
        if !snapshot.saved.is_empty() {
            parts.push(format!("{} saved", snapshot.saved.len()));
        }
        if let Some(msg) = &app.status {
            parts.push(msg.clone());
        }
        parts.join(" • ")
    };
    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[2]);

    let footer = Paragraph::new(controls_text(app.screen))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

fn draw_categories<P: MediaPlayer>(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    controller: &PlaybackController<P>,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let categories: Vec<ListItem> = Category::ALL
        .iter()
        .map(|c| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{} {}", c.icon(), c.name()),
                    Style::default().fg(category_color(*c)).bold(),
                )),
                Line::from(Span::raw(format!("  {}", c.description()))),
            ])
        })
        .collect();
    let list = List::new(categories)
        .block(Block::default().borders(Borders::ALL).title(" categories "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.category));
    frame.render_stateful_widget(list, columns[0], &mut state);

    let current = controller.current_track().map(|t| t.id);
    let tracks = app.category_tracks(controller.catalog());
    let items: Vec<ListItem> = tracks
        .iter()
        .map(|t| {
            ListItem::new(track_line(
                t,
                controller.is_saved(t.id),
                current == Some(t.id),
            ))
        })
        .collect();
    let category = app.selected_category();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", category.name()))
                .border_style(Style::default().fg(category_color(category))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !tracks.is_empty() {
        state.select(Some(app.track_cursor.min(tracks.len() - 1)));
    }
    frame.render_stateful_widget(list, columns[1], &mut state);
}

fn draw_player<P: MediaPlayer>(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    controller: &PlaybackController<P>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let info: Vec<Line> = match controller.current_track() {
        Some(t) => vec![
            Line::from(Span::styled(t.title, Style::default().bold())),
            Line::from(t.artist),
            Line::from(Span::styled(
                format!("{} {}", t.category.icon(), t.category.name()),
                Style::default().fg(category_color(t.category)),
            )),
            Line::from(""),
            Line::from(format!(
                "{}{}",
                saved_marker(controller.is_saved(t.id)),
                controller.state().label()
            )),
            Line::from(format!("Elapsed: {}", controller.formatted_elapsed())),
        ],
        None => vec![
            Line::from(Span::styled("No track selected", Style::default().bold())),
            Line::from("Pick one on the Categories or Saved screen."),
        ],
    };
    let info = Paragraph::new(info)
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" now playing "))
        .wrap(Wrap { trim: true });
    frame.render_widget(info, rows[0]);

    let mode = controller.playback_mode();
    let presets: Vec<Span> = app
        .timer_presets
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let label = format!(" {} min ", m);
            if i == app.preset_index {
                Span::styled(label, Style::default().add_modifier(Modifier::REVERSED))
            } else {
                Span::raw(label)
            }
        })
        .collect();
    let mut mode_line = vec![Span::raw(format!("Mode: {}   Timer:", mode.label()))];
    mode_line.extend(presets);
    let mode_par =
        Paragraph::new(Line::from(mode_line)).block(Block::bordered().title(" playback mode "));
    frame.render_widget(mode_par, rows[1]);

    match timer_ratio(mode, controller.remaining()) {
        Some(ratio) => {
            let gauge = Gauge::default()
                .block(Block::bordered().title(" remaining "))
                .gauge_style(Style::default().fg(Color::Cyan))
                .ratio(ratio)
                .label(controller.formatted_remaining());
            frame.render_widget(gauge, rows[2]);
        }
        None => {
            let label = if controller.is_playing() {
                format!("∞  {}", format_clock(controller.player_position()))
            } else {
                "∞".to_string()
            };
            let par = Paragraph::new(label)
                .alignment(Alignment::Center)
                .block(Block::bordered().title(" remaining "));
            frame.render_widget(par, rows[2]);
        }
    }
}

fn draw_saved<P: MediaPlayer>(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    controller: &PlaybackController<P>,
) {
    let saved = controller.saved_tracks();
    let block = Block::default().borders(Borders::ALL).title(" saved ");

    if saved.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled("No Saved Music", Style::default().bold())),
            Line::from("Press f on a track to save it here."),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let current = controller.current_track().map(|t| t.id);
    let items: Vec<ListItem> = saved
        .iter()
        .map(|t| {
            ListItem::new(vec![
                track_line(t, true, current == Some(t.id)),
                Line::from(Span::styled(
                    format!("    {}", t.category.name()),
                    Style::default().fg(category_color(t.category)),
                )),
            ])
        })
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.saved_cursor.min(saved.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn controls_text_lists_screen_specific_keys() {
        let player = controls_text(Screen::Player);
        assert!(player.contains("[m] infinite/timer"));
        assert!(player.contains("[x] stop"));
        assert!(!player.contains("[d] remove"));

        let saved = controls_text(Screen::Saved);
        assert!(saved.contains("[d] remove"));
        assert!(saved.starts_with("[tab/1-3] screens"));
    }

    #[test]
    fn category_colors_map_to_terminal_colors() {
        assert_eq!(category_color(Category::Focus), Color::Blue);
        assert_eq!(category_color(Category::Relax), Color::Green);
        assert_eq!(category_color(Category::DeepSleep), Color::Magenta);
    }

    #[test]
    fn timer_ratio_tracks_elapsed_share() {
        let total = Duration::from_secs(100);
        assert_eq!(timer_ratio(PlaybackMode::Unbounded, Duration::ZERO), None);
        assert_eq!(timer_ratio(PlaybackMode::Fixed(total), total), Some(0.0));
        assert_eq!(
            timer_ratio(PlaybackMode::Fixed(total), Duration::from_secs(25)),
            Some(0.75)
        );
        assert_eq!(timer_ratio(PlaybackMode::Fixed(total), Duration::ZERO), Some(1.0));
    }
}
