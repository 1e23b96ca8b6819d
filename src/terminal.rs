use termios::{tcsetattr, Termios, ECHO, ICANON, ISIG, TCSANOW};
use tracing::{debug, warn};

use crate::error::GameError;

const STDIN_FD: i32 = 0;

/// Puts stdin into raw-ish mode for the lifetime of the guard: no line
/// buffering, no echo, and Ctrl-C arrives as a byte instead of a signal.
/// The previous settings come back on drop.
pub struct RawModeGuard {
    old_termios: Termios,
}

impl RawModeGuard {
    pub fn enable() -> Result<Self, GameError> {
        let old_termios = Termios::from_fd(STDIN_FD).map_err(GameError::Terminal)?;
        let mut new_termios = old_termios; // copy of the termios struct
        new_termios.c_lflag &= !(ICANON | ECHO | ISIG);
        tcsetattr(STDIN_FD, TCSANOW, &new_termios).map_err(GameError::Terminal)?;
        debug!("terminal in raw mode");
        Ok(RawModeGuard { old_termios })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // reset stdin to default
        if let Err(err) = tcsetattr(STDIN_FD, TCSANOW, &self.old_termios) {
            warn!(%err, "could not restore terminal settings");
        }
    }
}
