// keyboard bytes are read on their own thread and passed over a channel,
// the game thread buffers them and decodes arrow-key escape sequences
use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use circular_buffer::CircularBuffer;
use tracing::{trace, warn};

use crate::coordinates::Direction;
use crate::error::GameError;

type InputBuffer = CircularBuffer<1024, u8>; // 1024 bytes in input buffer

const ESC: u8 = 27;
const BRACKET: u8 = 91;
const ARROW_UP: u8 = 65;
const ARROW_DOWN: u8 = 66;
const ARROW_RIGHT: u8 = 67;
const ARROW_LEFT: u8 = 68;
const CTRL_C: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Interrupt,
}

/// Anything that can hand the game loop the key presses made since the last poll.
pub trait InputSource {
    fn poll(&mut self) -> Result<Vec<InputEvent>, GameError>;
}

/// Turns a raw byte stream into input events.
#[derive(Debug)]
pub struct KeyDecoder {
    buffer: InputBuffer,
}

impl KeyDecoder {
    pub fn new() -> Self {
        KeyDecoder { buffer: InputBuffer::new() }
    }

    pub fn push(&mut self, key: u8) {
        match key {
            ESC | BRACKET | ARROW_UP | ARROW_DOWN | ARROW_RIGHT | ARROW_LEFT | CTRL_C => {
                // if the buffer is full, ignore the input
                if self.buffer.is_full() {
                    return;
                }
                self.buffer.push_back(key);
            }
            _ => {
                // not part of an arrow key
            }
        }
    }

    /// Decodes the next complete event, leaving an unfinished escape
    /// sequence in the buffer for the next call.
    pub fn next_event(&mut self) -> Option<InputEvent> {
        while let Some(&first) = self.buffer.front() {
            match first {
                CTRL_C => {
                    self.buffer.pop_front();
                    return Some(InputEvent::Interrupt);
                }
                ESC => {
                    let second = self.buffer.nth_front(1).copied();
                    let third = self.buffer.nth_front(2).copied();
                    match (second, third) {
                        (None, _) | (Some(BRACKET), None) => return None,
                        (Some(BRACKET), Some(code)) => {
                            let direction = match code {
                                ARROW_UP => Some(Direction::Up),
                                ARROW_DOWN => Some(Direction::Down),
                                ARROW_RIGHT => Some(Direction::Right),
                                ARROW_LEFT => Some(Direction::Left),
                                _ => None,
                            };
                            if let Some(direction) = direction {
                                self.buffer.pop_front();
                                self.buffer.pop_front();
                                self.buffer.pop_front();
                                return Some(InputEvent::Turn(direction));
                            }
                            self.buffer.pop_front();
                        }
                        _ => {
                            self.buffer.pop_front();
                        }
                    }
                }
                _ => {
                    // stray byte outside an escape sequence
                    self.buffer.pop_front();
                }
            }
        }
        None
    }

    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard input from stdin.
pub struct Keyboard {
    channel: Receiver<u8>,
    decoder: KeyDecoder,
}

impl Keyboard {
    pub fn spawn() -> Self {
        Keyboard {
            channel: spawn_stdin_channel(),
            decoder: KeyDecoder::new(),
        }
    }
}

impl InputSource for Keyboard {
    fn poll(&mut self) -> Result<Vec<InputEvent>, GameError> {
        loop {
            match self.channel.try_recv() {
                Ok(key) => self.decoder.push(key),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Err(GameError::InputClosed),
            }
        }
        let mut events = Vec::new();
        while let Some(event) = self.decoder.next_event() {
            trace!(?event, "key event");
            events.push(event);
        }
        Ok(events)
    }
}

fn spawn_stdin_channel() -> Receiver<u8> {
    let (tx, rx) = mpsc::channel::<u8>();
    thread::spawn(move || {
        let mut reader = io::stdin();
        let mut buffer: [u8; 1] = [0; 1];
        loop {
            // read one u8 at a time from the input buffer
            if let Err(err) = reader.read_exact(&mut buffer) {
                warn!(%err, "stopped reading stdin");
                break;
            }
            if tx.send(buffer[0]).is_err() {
                break;
            }
        }
    });
    rx
}
