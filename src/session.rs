//! Interactive browsing loop
//!
//! Single-threaded: show the current image, block for one key, apply it.
//! The cursor is only ever touched from here.

use tracing::{debug, warn};
use termcolor::WriteColor;

use crate::display::Viewer;
use crate::error::SessionError;
use crate::input::KeySource;
use crate::nav::{Command, Navigator, Outcome};
use crate::output::{print_commands, print_decode_failure, print_hint, print_record};

/// One browsing session over a finished scan.
pub struct Session<V, K> {
    navigator: Navigator,
    viewer: V,
    keys: K,
}

impl<V: Viewer, K: KeySource> Session<V, K> {
    pub fn new(navigator: Navigator, viewer: V, keys: K) -> Self {
        Self {
            navigator,
            viewer,
            keys,
        }
    }

    /// Run until the user quits.
    ///
    /// Images that fail to decode are reported and the session keeps going.
    ///
    /// # Errors
    /// Returns [`SessionError::Navigation`] if there is nothing to show, and
    /// [`SessionError::Io`] if reading a key or writing output fails.
    pub fn run<W: WriteColor + ?Sized>(&mut self, out: &mut W) -> Result<(), SessionError> {
        loop {
            self.show_current(out)?;

            loop {
                let key = self.keys.next_key()?;
                let outcome = self.navigator.apply(Command::from_key(key));
                debug!(?key, ?outcome, position = self.navigator.position(), "key");
                match outcome {
                    Outcome::Moved(_) => break,
                    Outcome::Quit => return Ok(()),
                    Outcome::AtEnd | Outcome::AtStart | Outcome::UnknownCommand => {
                        print_hint(out, outcome)?;
                        out.flush()?;
                    }
                }
            }
        }
    }

    fn show_current<W: WriteColor + ?Sized>(&mut self, out: &mut W) -> Result<(), SessionError> {
        let record = self.navigator.current()?;
        let position = self.navigator.position();
        let total = self.navigator.len();

        match self.viewer.open(record) {
            Ok(frame) => {
                self.viewer.paint(&frame, out)?;
                print_record(out, record, position, total, Some(frame.fitted))?;
            }
            Err(e) => {
                warn!(path = %e.path().display(), "{}", e);
                print_decode_failure(out, &e)?;
                print_record(out, record, position, total, None)?;
            }
        }

        print_commands(out)?;
        out.flush()?;
        Ok(())
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn into_navigator(self) -> Navigator {
        self.navigator
    }
}
