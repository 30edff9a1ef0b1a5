use std::error;
use std::fmt;

/// Everything that can go wrong between parsing a note request and the
/// platform accepting the last byte of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MidiError {
  /// A field of a channel-voice message fell outside its wire range.
  /// Raised by the encoder, before any transmission.
  RangeViolation { field: &'static str, value: u8, max: u8 },
  /// The platform refused to open the requested output device.
  DeviceUnavailable(String),
  /// The platform refused an encoded message. Not retried; MIDI output is
  /// fire-and-forget.
  Transmission(String),
  /// A send was attempted on a session that has already been closed.
  SessionClosed,
}

impl fmt::Display for MidiError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      MidiError::RangeViolation { field, value, max } =>
        write!(f, "{} out of range: {} (max {})", field, value, max),
      MidiError::DeviceUnavailable(ref detail) =>
        write!(f, "MIDI output device unavailable: {}", detail),
      MidiError::Transmission(ref detail) =>
        write!(f, "MIDI send failed: {}", detail),
      MidiError::SessionClosed =>
        write!(f, "MIDI output session is already closed"),
    }
  }
}

impl error::Error for MidiError {}
