use super::{runner::RunnerEvent, Replay};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::{
    io::{self, Stdout},
    sync::mpsc::{self, Receiver, RecvError},
    thread,
    time::{Duration, Instant},
};
use tui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Terminal,
};

pub enum DisplayEvent {
    Input(KeyEvent),
    Tick,
}

pub struct DisplayTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_rx: Receiver<DisplayEvent>,
}

impl DisplayTerminal {
    pub fn new(tick_rate: Duration) -> Result<Self, io::Error> {
        // Set up the terminal-user-interface
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Enabled last; Drop disables it again.
        crossterm::terminal::enable_raw_mode()?;

        // Set up the input handling thread
        let (input_tx, input_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if input_tx.send(DisplayEvent::Input(key)).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => return,
                }

                if last_tick.elapsed() >= tick_rate {
                    if input_tx.send(DisplayEvent::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Ok(Self { terminal, input_rx })
    }

    pub fn draw(&mut self, replay: &Replay, paused: bool) -> Result<(), io::Error> {
        let result = replay.result();

        let status = match (replay.current_segment(), replay.is_complete()) {
            (_, true) => format!("All processes completed at t={}.", replay.clock()),
            (Some(segment), false) => format!(
                "t={} | Process {} ran for {} units",
                segment.start_time, segment.pid, segment.duration
            ),
            (None, false) => "No process has been dispatched yet.".to_owned(),
        };
        let status = if paused {
            format!("{} (paused)", status)
        } else {
            status
        };

        let timeline: Vec<Span> = replay
            .played_segments()
            .iter()
            .map(|segment| {
                Span::raw(format!(
                    "| P{} {}-{} ",
                    segment.pid,
                    segment.start_time,
                    segment.end_time()
                ))
            })
            .collect();

        let summary = if replay.is_complete() {
            format!(
                "Average Waiting Time: {:.2} | Average Turnaround Time: {:.2}",
                result.summary().avg_waiting_time,
                result.summary().avg_turnaround_time
            )
        } else {
            format!("Segment {} of {}", replay.played_segments().len(), result.trace().len())
        };

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(5),
                    Constraint::Length(4),
                    Constraint::Length(3),
                ])
                .split(f.size());

            let current = Paragraph::new(status)
                .style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .fg(Color::LightBlue),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Current Segment")
                        .border_type(BorderType::Rounded),
                );

            f.render_widget(current, chunks[0]);

            let items = result.outcomes().iter().map(|outcome| {
                let process = &outcome.process;
                let (waiting, turnaround) = match replay.finished_outcome(process.pid()) {
                    Some(done) => (
                        done.waiting_time.to_string(),
                        done.turnaround_time.to_string(),
                    ),
                    None => ("-".to_owned(), "-".to_owned()),
                };

                Row::new(vec![
                    Cell::from(process.pid().to_string())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    Cell::from("|"),
                    Cell::from(process.burst_time().to_string()),
                    Cell::from("|"),
                    Cell::from(process.arrival_time().to_string()),
                    Cell::from("|"),
                    Cell::from(process.priority().to_string()),
                    Cell::from("|"),
                    Cell::from(replay.progress_percentage(process.pid())),
                    Cell::from("|"),
                    Cell::from(waiting),
                    Cell::from("|"),
                    Cell::from(turnaround),
                ])
            });

            let table = Table::new(items)
                .header(
                    Row::new(vec![
                        "PID", "|", "Burst", "|", "Arrival", "|", "Priority", "|", "Run", "|",
                        "Waiting", "|", "Turnaround",
                    ])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .widths(&[
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Length(5),
                    Constraint::Length(1),
                    Constraint::Length(7),
                    Constraint::Length(1),
                    Constraint::Length(8),
                    Constraint::Length(1),
                    Constraint::Length(4),
                    Constraint::Length(1),
                    Constraint::Length(7),
                    Constraint::Length(1),
                    Constraint::Length(10),
                ])
                .block(
                    Block::default()
                        .title(result.policy())
                        .borders(Borders::ALL),
                )
                .style(Style::default().fg(Color::LightGreen))
                .column_spacing(1);

            f.render_widget(table, chunks[1]);

            let gantt = Paragraph::new(Spans::from(timeline))
                .wrap(tui::widgets::Wrap { trim: false })
                .block(Block::default().title("Timeline").borders(Borders::ALL));

            f.render_widget(gantt, chunks[2]);

            let footer = Paragraph::new(summary)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("q: quit | p: pause | r: resume | s: step")
                        .border_type(BorderType::Rounded),
                );

            f.render_widget(footer, chunks[3]);
        })?;
        Ok(())
    }

    pub fn get_input(&self) -> Result<RunnerEvent, RecvError> {
        // Get the user's input and return a matching event
        match self.input_rx.recv()? {
            DisplayEvent::Input(key) => {
                if key.modifiers.is_empty() {
                    match key.code {
                        KeyCode::Char('q') => return Ok(RunnerEvent::Quit),
                        KeyCode::Char('p') => return Ok(RunnerEvent::Pause),
                        KeyCode::Char('r') => return Ok(RunnerEvent::Resume),
                        KeyCode::Char('s') => return Ok(RunnerEvent::Step),
                        _ => {}
                    };
                }
            }
            DisplayEvent::Tick => return Ok(RunnerEvent::Tick),
        }
        Ok(RunnerEvent::None)
    }
}

impl Drop for DisplayTerminal {
    fn drop(&mut self) {
        let _ = self.terminal.clear();
        let _ = self.terminal.show_cursor();
        let _ = crossterm::terminal::disable_raw_mode();
    }
}
