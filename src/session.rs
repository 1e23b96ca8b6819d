use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{info, trace};

use crate::error::GameError;
use crate::game::GameState;
use crate::input::{InputEvent, InputSource};
use crate::render::{Frame, Screen};

/// Decides when the next tick is due, so the loop never sleeps by itself.
pub trait Timer {
    fn is_due(&self, delay: Duration) -> bool;
    fn restart(&mut self);
    fn idle(&mut self);
}

// wall clock, naps a few milliseconds between input polls
pub struct FrameTimer {
    frame_start_time: Option<Instant>,
    nap: Duration,
}

impl FrameTimer {
    pub fn new() -> Self {
        FrameTimer {
            frame_start_time: None,
            nap: Duration::from_millis(3),
        }
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for FrameTimer {
    fn is_due(&self, delay: Duration) -> bool {
        match self.frame_start_time {
            // first frame goes out right away
            None => true,
            Some(start) => start.elapsed() >= delay,
        }
    }

    fn restart(&mut self) {
        self.frame_start_time = Some(Instant::now());
    }

    fn idle(&mut self) {
        std::thread::sleep(self.nap);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub length: usize,
    pub ticks: u64,
}

// every pass drains pending key presses, turns are committed straight away
// so the last one before a tick wins. runs until an interrupt comes in
pub fn run<R, I, T, S>(
    state: &mut GameState<R>,
    input: &mut I,
    timer: &mut T,
    screen: &mut S,
) -> Result<SessionSummary, GameError>
where
    R: Rng,
    I: InputSource,
    T: Timer,
    S: Screen,
{
    info!(
        delay = state.delay(),
        length = state.snake().len(),
        "session started"
    );
    loop {
        for event in input.poll()? {
            match event {
                InputEvent::Turn(direction) => {
                    state.set_direction(direction);
                }
                InputEvent::Interrupt => {
                    let summary = SessionSummary {
                        score: state.score(),
                        length: state.snake().len(),
                        ticks: state.ticks(),
                    };
                    info!(score = summary.score, ticks = summary.ticks, "session interrupted");
                    return Ok(summary);
                }
            }
        }

        if !timer.is_due(state.tick_delay()) {
            // wait for next frame
            timer.idle();
            continue;
        }
        timer.restart();

        screen.show(&Frame::capture(state))?;
        let outcome = state.tick();
        trace!(?outcome, "tick done");
    }
}
