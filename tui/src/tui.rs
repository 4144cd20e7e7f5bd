//! The text-based user interface.

use crate::args::clamp_speed;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use log::debug;
use rlifesim_lib::{Age, Coord, PatternCatalog, RulePreset, Simulator};
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// Number of cells the viewport moves per arrow key.
const PAN_STEP: i64 = 4;

/// Change of speed per `+` or `-`.
const SPEED_STEP: u32 = 5;

/// Color of a living cell, by age.
fn cell_color(age: Age) -> Color {
    match age {
        0..=1 => Color::White,
        2..=5 => Color::Green,
        6..=15 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Pads or truncates a line to the width of the terminal.
fn fit(mut line: String, width: usize) -> String {
    let len = line.chars().count();
    if len > width {
        line = line.chars().take(width).collect();
    } else {
        line.extend(std::iter::repeat(' ').take(width - len));
    }
    line
}

struct SimWindow {
    sim: Simulator,
    paused: bool,
    /// Generations per second.
    speed: u32,
    /// The cell at the center of the viewport.
    center: (i64, i64),
    /// The patterns that can be placed, as `(category, name)`, by category.
    patterns: Vec<(&'static str, &'static str)>,
    /// Index of the selected pattern.
    selected: usize,
    /// The current preset, or `None` for a rule that is not a preset.
    preset: Option<RulePreset>,
    /// A message in the bottom bar, until the next key press.
    message: Option<String>,
    /// Size of the terminal, `(columns, rows)`.
    size: (u16, u16),
}

impl SimWindow {
    fn new(sim: Simulator, speed: u32) -> io::Result<Self> {
        Ok(Self::with_size(sim, speed, terminal::size()?))
    }

    fn with_size(sim: Simulator, speed: u32, size: (u16, u16)) -> Self {
        let catalog: &'static PatternCatalog = sim.catalog();
        let patterns = catalog
            .categories()
            .iter()
            .flat_map(|category| {
                category
                    .patterns()
                    .iter()
                    .map(move |name| (category.name(), name.as_str()))
            })
            .collect();
        let preset = RulePreset::find(sim.rule_string());
        SimWindow {
            sim,
            paused: true,
            speed: clamp_speed(speed),
            center: (0, 0),
            patterns,
            selected: 0,
            preset,
            message: None,
            size,
        }
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.speed.max(1)))
    }

    /// The selected pattern, as `(category, name)`.
    fn selected_pattern(&self) -> (&'static str, &'static str) {
        self.patterns.get(self.selected).copied().unwrap_or_default()
    }

    /// Selects the first pattern of the next or the previous category.
    fn switch_category(&mut self, forward: bool) {
        let starts: Vec<usize> = (0..self.patterns.len())
            .filter(|&i| i == 0 || self.patterns[i].0 != self.patterns[i - 1].0)
            .collect();
        let count = starts.len();
        if count == 0 {
            return;
        }
        let current = starts.iter().rposition(|&i| i <= self.selected).unwrap_or(0);
        let index = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.selected = starts[index];
    }

    /// The preset that `r` switches to.
    fn next_preset(&self) -> RulePreset {
        self.preset.map_or(RulePreset::Life, RulePreset::next)
    }

    /// The cell at the top-left corner of the viewport.
    fn origin(&self) -> (i64, i64) {
        let width = i64::from(self.size.0);
        let height = i64::from(self.size.1.saturating_sub(2));
        (
            self.center.0.saturating_sub(width / 2),
            self.center.1.saturating_sub(height / 2),
        )
    }

    /// The cell under a position of the terminal, if it is in the viewport.
    fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        if column >= self.size.0 || row == 0 || row >= self.size.1.saturating_sub(1) {
            return None;
        }
        let (ox, oy) = self.origin();
        Some((
            ox.checked_add(i64::from(column))?,
            oy.checked_add(i64::from(row - 1))?,
        ))
    }

    fn draw(&self, out: &mut Stdout) -> io::Result<()> {
        let (width, height) = self.size;
        let rows = height.saturating_sub(2);
        queue!(out, BeginSynchronizedUpdate, Clear(ClearType::All))?;

        let status = if self.paused { "Paused" } else { "Running" };
        let top = format!(
            "Gen: {}  Cells: {}  Rule: {}  Speed: {} fps  {}",
            self.sim.generation(),
            self.sim.cell_count(),
            self.sim.rule_string(),
            self.speed,
            status
        );
        queue!(
            out,
            cursor::MoveTo(0, 0),
            SetAttribute(Attribute::Reverse),
            Print(fit(top, width as usize)),
            SetAttribute(Attribute::Reset)
        )?;

        let (ox, oy) = self.origin();
        for (&(x, y), &age) in self.sim.cells() {
            let col = x.checked_sub(ox).and_then(|dx| u16::try_from(dx).ok());
            let row = y.checked_sub(oy).and_then(|dy| u16::try_from(dy).ok());
            if let (Some(col), Some(row)) = (col, row) {
                if col < width && row < rows {
                    queue!(
                        out,
                        cursor::MoveTo(col, row + 1),
                        SetForegroundColor(cell_color(age)),
                        Print('█')
                    )?;
                }
            }
        }
        queue!(out, ResetColor)?;

        if height >= 2 {
            let (category, pattern) = self.selected_pattern();
            let bottom = self.message.clone().unwrap_or_else(|| {
                format!(
                    "[space] run/pause [s] step [z] undo [y] redo [c] clear \
                     [[/]] {} [tab] {} [p] place [r] {} [q] quit",
                    category,
                    pattern,
                    self.next_preset()
                )
            });
            queue!(
                out,
                cursor::MoveTo(0, height - 1),
                SetAttribute(Attribute::Reverse),
                Print(fit(bottom, width as usize)),
                SetAttribute(Attribute::Reset)
            )?;
        }

        queue!(out, EndSynchronizedUpdate)?;
        out.flush()
    }

    /// Handles a key press. Returns false when the user quits.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.message = None;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('c') if ctrl => return false,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('s') => {
                self.paused = true;
                self.sim.step();
            }
            KeyCode::Char('z') => {
                if !self.sim.undo() {
                    self.message = Some(String::from("Nothing to undo."));
                }
            }
            KeyCode::Char('y') => {
                if !self.sim.redo() {
                    self.message = Some(String::from("Nothing to redo."));
                }
            }
            KeyCode::Char('c') => self.sim.clear(),
            KeyCode::Up => self.center.1 = self.center.1.saturating_sub(PAN_STEP),
            KeyCode::Down => self.center.1 = self.center.1.saturating_add(PAN_STEP),
            KeyCode::Left => self.center.0 = self.center.0.saturating_sub(PAN_STEP),
            KeyCode::Right => self.center.0 = self.center.0.saturating_add(PAN_STEP),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.speed = clamp_speed(self.speed + SPEED_STEP)
            }
            KeyCode::Char('-') => self.speed = clamp_speed(self.speed.saturating_sub(SPEED_STEP)),
            KeyCode::Tab if !self.patterns.is_empty() => {
                self.selected = (self.selected + 1) % self.patterns.len();
            }
            KeyCode::BackTab if !self.patterns.is_empty() => {
                self.selected = (self.selected + self.patterns.len() - 1) % self.patterns.len();
            }
            KeyCode::Char(']') => self.switch_category(true),
            KeyCode::Char('[') => self.switch_category(false),
            KeyCode::Char('p') => {
                let (_, name) = self.selected_pattern();
                let (x, y) = self.center;
                if let Err(e) = self.sim.add_pattern(name, x, y) {
                    self.message = Some(e.to_string());
                }
            }
            KeyCode::Char('r') => {
                let preset = self.next_preset();
                self.sim.set_rules(preset.rule_string());
                self.preset = Some(preset);
                debug!("Switched to {}", preset);
            }
            _ => (),
        }
        true
    }

    /// Draws cells with the left button, and erases them with the right one.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let draw = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                true
            }
            MouseEventKind::Down(MouseButton::Right)
            | MouseEventKind::Drag(MouseButton::Right) => false,
            _ => return,
        };
        if let Some((x, y)) = self.cell_at(mouse.column, mouse.row) {
            if draw {
                self.sim.add_cell(x, y);
            } else {
                self.sim.remove_cell(x, y);
            }
        }
    }

    fn main_loop(&mut self, out: &mut Stdout) -> io::Result<()> {
        let mut last_tick = Instant::now();
        self.draw(out)?;
        loop {
            let interval = self.interval();
            let timeout = if self.paused {
                interval
            } else {
                interval.saturating_sub(last_tick.elapsed())
            };
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if !self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => self.size = (width, height),
                    _ => continue,
                }
                self.draw(out)?;
            }
            if !self.paused && last_tick.elapsed() >= interval {
                last_tick = Instant::now();
                self.sim.step();
                self.draw(out)?;
            }
        }
        Ok(())
    }
}

/// Runs the simulator in the TUI, and returns it when the user quits.
pub(crate) fn run_with_tui(sim: Simulator, speed: u32) -> io::Result<Simulator> {
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
    terminal::enable_raw_mode()?;

    let result = SimWindow::new(sim, speed).and_then(|mut window| {
        window.main_loop(&mut out)?;
        Ok(window.sim)
    });

    terminal::disable_raw_mode()?;
    execute!(out, DisableMouseCapture, LeaveAlternateScreen, cursor::Show)?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_by_age() {
        assert_eq!(cell_color(1), Color::White);
        assert_eq!(cell_color(5), Color::Green);
        assert_eq!(cell_color(15), Color::Yellow);
        assert_eq!(cell_color(16), Color::Red);
    }

    fn window() -> SimWindow {
        SimWindow::with_size(Simulator::new(), 10, (20, 12))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn mouse_draws_and_erases() {
        let mut window = window();
        // 20x10 viewport centered at (0, 0), below a one-row bar.
        assert_eq!(window.origin(), (-10, -5));
        window.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 6));
        window.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 11, 6));
        assert_eq!(window.sim.cells().coords(), vec![(0, 0), (1, 0)]);

        window.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 10, 6));
        window.handle_mouse(mouse(MouseEventKind::Moved, 11, 6));
        assert_eq!(window.sim.cells().coords(), vec![(1, 0)]);
        assert!(!window.sim.can_undo());
    }

    #[test]
    fn mouse_ignores_the_bars() {
        let mut window = window();
        window.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 0));
        window.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 11));
        assert_eq!(window.sim.cell_count(), 0);
        assert_eq!(window.cell_at(0, 1), Some((-10, -5)));
        assert_eq!(window.cell_at(20, 1), None);
    }

    #[test]
    fn first_preset_of_a_custom_rule_is_life() {
        let mut window = window();
        assert_eq!(window.preset, Some(RulePreset::Life));
        window.sim.set_rules("B1/S1");
        window.preset = RulePreset::find(window.sim.rule_string());
        assert_eq!(window.next_preset(), RulePreset::Life);
        window.handle_key(KeyEvent::from(KeyCode::Char('r')));
        assert_eq!(window.sim.rule_string(), "B3/S23");
        window.handle_key(KeyEvent::from(KeyCode::Char('r')));
        assert_eq!(window.sim.rule_string(), "B36/S23");
    }

    #[test]
    fn patterns_by_category() {
        let mut window = window();
        assert_eq!(window.selected_pattern(), ("Still Lifes", "Block"));
        window.switch_category(true);
        assert_eq!(window.selected_pattern(), ("Oscillators", "Blinker"));
        window.handle_key(KeyEvent::from(KeyCode::Tab));
        assert_eq!(window.selected_pattern(), ("Oscillators", "Toad"));
        window.switch_category(false);
        assert_eq!(window.selected_pattern(), ("Still Lifes", "Block"));
        window.switch_category(false);
        assert_eq!(window.selected_pattern().0, "Computational");
        window.switch_category(true);
        assert_eq!(window.selected_pattern(), ("Still Lifes", "Block"));
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit(String::from("abc"), 5), "abc  ");
        assert_eq!(fit(String::from("abcdef"), 3), "abc");
    }
}
