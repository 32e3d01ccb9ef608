//! Render targets for the bar-chart visualization.
//!
//! [`Surface`] is the seam between the session driver and the actual
//! output device. The production implementation is [`TerminalSurface`],
//! a ratatui bar chart in the alternate screen; tests substitute a
//! scripted double.

use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::{Frame, Terminal};

use crate::error::VizResult;

/// Input event as seen by the session driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Abort the run and return to the menu.
    Quit,
    /// Toggle between running and paused.
    PauseToggle,
    /// The output area changed; the current frame should be redrawn.
    Resize,
    /// Any other input, ignored.
    Other,
}

/// A render target plus its input event source.
pub trait Surface {
    /// Draw the sequence as a bar chart, highlighting the two indices
    /// involved in the current step when given.
    fn render(&mut self, values: &[i32], highlight: Option<(usize, usize)>) -> VizResult<()>;

    /// Return a pending event without blocking, or `None`.
    fn poll_event(&mut self) -> VizResult<Option<SurfaceEvent>>;

    /// Block until the next event.
    fn wait_event(&mut self) -> VizResult<SurfaceEvent>;
}

/// Width of one bar and of the gap after it, for `count` bars across
/// `width` cells. Bars get a one-cell gap whenever there is room.
#[must_use]
pub fn bar_layout(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (width.max(1), 0);
    }
    let slot = (width as usize / count).max(1) as u16;
    if slot > 1 {
        (slot - 1, 1)
    } else {
        (1, 0)
    }
}

/// Bar height for a sequence value. Negative values clamp to zero.
#[must_use]
pub fn bar_value(value: i32) -> u64 {
    value.max(0) as u64
}

/// Scale ceiling for the chart. At least one so an all-zero sequence
/// still renders empty bars rather than dividing by zero.
#[must_use]
pub fn max_value(values: &[i32]) -> u64 {
    values.iter().copied().map(bar_value).max().unwrap_or(0).max(1)
}

/// Full-screen terminal surface.
///
/// Opening enters raw mode and the alternate screen and hides the
/// cursor; dropping restores all three, so a panicking or erroring run
/// still hands the terminal back intact.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    title: String,
}

impl TerminalSurface {
    /// Open the surface and clear it.
    ///
    /// The requested pixel dimensions come from the configuration; a
    /// terminal cannot honor them, so the chart fills whatever area the
    /// terminal provides.
    pub fn open(title: &str, _width: u32, _height: u32) -> VizResult<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            title: title.to_string(),
        })
    }

    fn draw_bars(frame: &mut Frame, title: &str, values: &[i32], highlight: Option<(usize, usize)>) {
        let [area] = Layout::vertical([Constraint::Fill(1)]).areas(frame.area());
        let (bar_width, gap) = bar_layout(area.width.saturating_sub(2), values.len());
        let bars: Vec<Bar> = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let highlighted =
                    highlight.is_some_and(|(a, b)| index == a || index == b);
                let color = if highlighted { Color::Red } else { Color::Gray };
                Bar::default()
                    .value(bar_value(value))
                    .style(Style::default().fg(color))
                    .text_value(String::new())
            })
            .collect();
        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(gap)
            .max(max_value(values));
        frame.render_widget(chart, area);
    }

    fn translate(event: &Event) -> SurfaceEvent {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char(' ') => SurfaceEvent::PauseToggle,
                KeyCode::Char('q') | KeyCode::Esc => SurfaceEvent::Quit,
                _ => SurfaceEvent::Other,
            },
            Event::Resize(..) => SurfaceEvent::Resize,
            _ => SurfaceEvent::Other,
        }
    }
}

impl Surface for TerminalSurface {
    fn render(&mut self, values: &[i32], highlight: Option<(usize, usize)>) -> VizResult<()> {
        let title = self.title.clone();
        self.terminal
            .draw(|frame| Self::draw_bars(frame, &title, values, highlight))?;
        Ok(())
    }

    fn poll_event(&mut self) -> VizResult<Option<SurfaceEvent>> {
        if event::poll(std::time::Duration::ZERO)? {
            let event = event::read()?;
            Ok(Some(Self::translate(&event)))
        } else {
            Ok(None)
        }
    }

    fn wait_event(&mut self) -> VizResult<SurfaceEvent> {
        let event = event::read()?;
        Ok(Self::translate(&event))
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}
