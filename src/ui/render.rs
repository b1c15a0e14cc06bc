//! Screen rendering, one view per lifecycle phase.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::BreathingTechnique;
use crate::session::{sequencer, LifecyclePhase, SessionState};
use crate::ui::app::App;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, ACCENT_SOFT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let state = app.controller().state();

    draw_header(frame, header, state);
    match state.lifecycle {
        LifecyclePhase::Menu => draw_menu(frame, body, app),
        LifecyclePhase::Instructions => draw_instructions(frame, body, app),
        LifecyclePhase::Active => draw_active(frame, body, state),
        LifecyclePhase::Completed => draw_completed(frame, body),
    }
    draw_footer(frame, footer, app);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, state: &SessionState) {
    let screen = match state.lifecycle {
        LifecyclePhase::Menu => "choose a technique",
        LifecyclePhase::Instructions => "get ready",
        LifecyclePhase::Active if state.is_running => "breathe",
        LifecyclePhase::Active => "paused",
        LifecyclePhase::Completed => "done",
    };
    let line = Line::from(vec![
        Span::styled(
            " respiro ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(DIM_TEXT)),
        Span::styled(screen, Style::default().fg(HEADER_TEXT)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(bordered_block()),
        area,
    );
}

fn draw_menu(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let selected_id = &app.controller().state().selected_technique_id;
    let mut lines = vec![Line::from("")];
    for technique in app.controller().catalog().iter() {
        let selected = &technique.id == selected_id;
        let marker = if selected { " ❯ " } else { "   " };
        let style = if selected {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(technique.title.clone(), style),
            Span::styled(
                format!("  ({})", pattern_summary(technique)),
                Style::default().fg(DIM_TEXT),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", technique.subtitle),
            Style::default().fg(DIM_TEXT),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "   A two-minute pause to reconnect with your body.",
        Style::default().fg(ACCENT_SOFT),
    )));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(bordered_block()),
        area,
    );
}

fn draw_instructions(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let technique = app.controller().selected_technique();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", technique.title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", technique.subtitle),
            Style::default().fg(DIM_TEXT),
        )),
        Line::from(""),
    ];
    for (label, seconds) in [
        ("Breathe in", technique.inhale_seconds),
        ("Hold", technique.hold_seconds),
        ("Breathe out", technique.exhale_seconds),
        ("Rest", technique.hold_after_exhale_seconds),
    ] {
        if seconds == 0 {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("   {:>2} s  ", seconds), Style::default().fg(ACCENT)),
            Span::styled(label, Style::default().fg(HEADER_TEXT)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  The cycle repeats for {} until the session ends.",
            format_time(app.controller().state().session_duration_seconds)
        ),
        Style::default().fg(DIM_TEXT),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Find a comfortable position and press Enter when ready.",
        Style::default().fg(ACCENT_SOFT),
    )));

    frame.render_widget(Paragraph::new(lines).block(bordered_block()), area);
}

fn draw_active(frame: &mut Frame<'_>, area: Rect, state: &SessionState) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let cue = if state.is_running {
        state.breath_phase.cue()
    } else {
        "Paused"
    };
    let detail = match (state.is_running, state.technique.as_ref()) {
        (true, Some(technique)) => format!(
            "for {} seconds",
            sequencer::phase_duration(technique, state.breath_phase).as_secs()
        ),
        _ => "press space to continue".to_string(),
    };
    let cue_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            cue,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail, Style::default().fg(DIM_TEXT))),
    ];
    frame.render_widget(
        Paragraph::new(cue_lines)
            .alignment(Alignment::Center)
            .block(bordered_block()),
        regions[0],
    );

    let total = state.session_duration_seconds.max(1);
    let ratio = f64::from(state.seconds_remaining) / f64::from(total);
    let gauge = Gauge::default()
        .block(bordered_block())
        .gauge_style(Style::default().fg(ACCENT_SOFT))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{} remaining", format_time(state.seconds_remaining)));
    frame.render_widget(gauge, regions[1]);
}

fn draw_completed(frame: &mut Frame<'_>, area: Rect) {
    let card = centered_rect(70, 50, area);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Session complete",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Take a moment to notice how your body feels now.",
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(bordered_block()),
        card,
    );
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let hints = match app.controller().state().lifecycle {
        LifecyclePhase::Menu => " ↑/↓: Select │ Enter: Continue │ q: Quit",
        LifecyclePhase::Instructions => " Enter: Start │ Esc: Back │ q: Quit",
        LifecyclePhase::Active => " Space: Pause/Resume │ Esc: Stop │ q: Quit",
        LifecyclePhase::Completed => " Enter: Back to menu │ q: Close",
    };
    let line = match app.status() {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(STATUS_ERROR),
        )),
        None => {
            let version = format!("v{} ", VERSION);
            let padding = (area.width.saturating_sub(2) as usize)
                .saturating_sub(hints.chars().count())
                .saturating_sub(version.chars().count());
            let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
            Line::from(vec![
                Span::styled(hints, style),
                Span::styled(" ".repeat(padding), style),
                Span::styled(version, style),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line).block(bordered_block()), area);
}

fn bordered_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn pattern_summary(technique: &BreathingTechnique) -> String {
    let mut parts = vec![format!("{} in", technique.inhale_seconds)];
    if technique.hold_seconds > 0 {
        parts.push(format!("{} hold", technique.hold_seconds));
    }
    parts.push(format!("{} out", technique.exhale_seconds));
    if technique.hold_after_exhale_seconds > 0 {
        parts.push(format!("{} rest", technique.hold_after_exhale_seconds));
    }
    parts.join(" · ")
}

/// `m:ss` formatting for the countdown.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(120), "2:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(0), "0:00");
    }

    #[test]
    fn pattern_summary_skips_zero_phases() {
        let technique = BreathingTechnique {
            id: "4-6".to_string(),
            title: String::new(),
            subtitle: String::new(),
            inhale_seconds: 4,
            hold_seconds: 0,
            exhale_seconds: 6,
            hold_after_exhale_seconds: 0,
        };
        assert_eq!(pattern_summary(&technique), "4 in · 6 out");
    }
}
