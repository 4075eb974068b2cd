use super::{display::DisplayTerminal, Replay};
use std::{error::Error, time::Duration};

pub enum RunnerEvent {
    Quit,
    Pause,
    Resume,
    Step,
    Tick,
    None,
}

/// Replays a finished schedule in the terminal, one segment per tick.
pub struct ReplayRunner {
    terminal: DisplayTerminal,
    replay: Replay,
    paused: bool,
}

impl ReplayRunner {
    pub fn new(replay: Replay, tick_rate: Duration) -> Result<Self, Box<dyn Error>> {
        let terminal = DisplayTerminal::new(tick_rate)?;

        Ok(Self {
            terminal,
            replay,
            paused: false,
        })
    }

    // Returns false if the program should quit
    pub fn run(&mut self) -> Result<bool, Box<dyn Error>> {
        self.terminal.draw(&self.replay, self.paused)?;

        match self.terminal.get_input()? {
            RunnerEvent::Quit => return Ok(false),
            RunnerEvent::Pause if !self.paused => self.paused = true,
            RunnerEvent::Resume if self.paused => self.paused = false,
            RunnerEvent::Step if self.paused => {
                self.replay.step();
            }
            RunnerEvent::Tick if !self.paused => {
                self.replay.step();
            }
            _ => {}
        }
        Ok(true)
    }
}
