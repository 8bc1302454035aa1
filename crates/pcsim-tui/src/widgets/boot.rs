//! Power-on test screen

use std::time::Instant;

use pcsim_app::boot_sequence::{BootPhase, BootSequence};
use pcsim_core::{BootOutcome, BootReport};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Widget, Wrap};

use crate::theme::{palette, styles};

pub fn outcome_text(outcome: BootOutcome) -> &'static str {
    match outcome {
        BootOutcome::On => "The computer powers on",
        BootOutcome::Off => "The computer does not power on",
    }
}

/// Outcome line plus the list of missing parts, if any.
pub fn report_lines(report: &BootReport) -> Vec<Line<'static>> {
    let style = if report.outcome.is_on() {
        styles::status_green()
    } else {
        styles::status_red()
    };
    let mut lines = vec![Line::from(Span::styled(
        outcome_text(report.outcome),
        style.add_modifier(Modifier::BOLD),
    ))];
    if !report.missing.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Missing: ", styles::text_secondary()),
            Span::styled(report.missing.join(", "), styles::text_primary()),
        ]));
    }
    lines
}

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct BootView<'a> {
    boot: &'a BootSequence,
    now: Instant,
    tick: u64,
}

impl<'a> BootView<'a> {
    pub fn new(boot: &'a BootSequence, now: Instant) -> Self {
        Self { boot, now, tick: 0 }
    }

    /// Frame counter driving the spinner
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }
}

impl Widget for BootView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(" Workbench ", styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        let [installed_area, _, status_area, result_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let installed = if self.boot.installed().is_empty() {
            "nothing".to_string()
        } else {
            self.boot.installed().join(", ")
        };
        Paragraph::new(Line::from(vec![
            Span::styled("Installed: ", styles::text_secondary()),
            Span::styled(installed, styles::text_primary()),
        ]))
        .wrap(Wrap { trim: true })
        .render(installed_area, buf);

        match self.boot.phase() {
            BootPhase::Idle => {
                Paragraph::new(Span::styled(
                    "Press Power on to start the machine.",
                    styles::text_muted(),
                ))
                .render(status_area, buf);
            }
            BootPhase::Armed { .. } => {
                let ratio = self.boot.progress(self.now).clamp(0.0, 1.0);
                let spinner = SPINNER[(self.tick / 8) as usize % SPINNER.len()];
                Gauge::default()
                    .gauge_style(Style::default().fg(palette::ACCENT).bg(palette::DEEPEST_BG))
                    .ratio(ratio)
                    .label(format!("{} Booting… {:>3.0}%", spinner, ratio * 100.0))
                    .render(status_area, buf);
            }
            BootPhase::Resolved(report) => {
                Paragraph::new(report_lines(report))
                    .wrap(Wrap { trim: true })
                    .render(status_area.union(result_area), buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pcsim_core::ComputerType;
    use std::time::Duration;

    fn sequence(installed: &[&str], delay: Duration) -> BootSequence {
        BootSequence::new(
            ComputerType::Laptop,
            installed.iter().map(|s| s.to_string()).collect(),
            delay,
        )
    }

    #[test]
    fn test_idle_prompts_for_power_on() {
        let boot = sequence(&["RAM DDR4 8GB"], Duration::from_secs(2));
        let mut term = TestTerminal::new();
        term.render_widget(BootView::new(&boot, Instant::now()), term.area());
        assert!(term.buffer_contains("Installed: RAM DDR4 8GB"));
        assert!(term.buffer_contains("Press Power on"));
    }

    #[test]
    fn test_armed_shows_progress() {
        let mut boot = sequence(&[], Duration::from_secs(2));
        let start = Instant::now();
        boot.power_on(start);
        let mut term = TestTerminal::new();
        term.render_widget(
            BootView::new(&boot, start + Duration::from_secs(1)),
            term.area(),
        );
        assert!(term.buffer_contains("Booting"));
        assert!(term.buffer_contains("50%"));
    }

    #[test]
    fn test_resolved_on() {
        let mut boot = sequence(
            &["Ryzen 7 5700X", "RAM DDR4 8GB", "Kingston SSD 1TB"],
            Duration::ZERO,
        );
        let now = Instant::now();
        boot.power_on(now);
        assert!(boot.poll(now).is_some());

        let mut term = TestTerminal::new();
        term.render_widget(BootView::new(&boot, now), term.area());
        assert!(term.buffer_contains("The computer powers on"));
        assert!(!term.buffer_contains("Missing"));
    }

    #[test]
    fn test_resolved_off_lists_missing() {
        let mut boot = sequence(&["RAM DDR4 8GB"], Duration::ZERO);
        let now = Instant::now();
        boot.power_on(now);
        boot.poll(now);

        let mut term = TestTerminal::new();
        term.render_widget(BootView::new(&boot, now), term.area());
        assert!(term.buffer_contains("The computer does not power on"));
        assert!(term.buffer_contains("Missing: Ryzen 7 5700X, Kingston SSD 1TB"));
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(outcome_text(BootOutcome::On), "The computer powers on");
        assert_eq!(
            outcome_text(BootOutcome::Off),
            "The computer does not power on"
        );
    }
}
