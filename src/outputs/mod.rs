use crate::error::MidiError;
use crate::message::EncodedMessage;

pub mod midir;

#[cfg(test)] pub mod dummy;

pub use self::midir::MidirOutput;

/// One open connection to a MIDI output device.
///
/// `send` hands a whole encoded message to the platform, atomically or not
/// at all. `close` releases the platform resource and may be called once;
/// the session wrapper guards against use afterwards.
pub trait Output {
  fn send(&mut self, message: &EncodedMessage) -> Result<(), MidiError>;

  fn close(&mut self) -> Result<(), MidiError>;
}
