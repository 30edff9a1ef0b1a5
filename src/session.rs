use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::error::MidiError;
use crate::message::{ChannelVoiceMessage, EncodedMessage};
use crate::outputs::Output;
use crate::types::{Channel, Pitch, Program, Velocity};

/// Owns one open output for its lifetime and enforces the open -> closed
/// transition: only an open session may send, and there is no reopen.
///
/// Dropping a still-open session closes it, so the device is released on
/// every exit path, including early returns on send failure.
pub struct OutputSession<O: Output> {
  output: Option<O>,
}

impl<O: Output> OutputSession<O> {
  pub fn new(output: O) -> OutputSession<O> {
    OutputSession { output: Some(output) }
  }

  pub fn send(&mut self, message: &EncodedMessage) -> Result<(), MidiError> {
    match self.output {
      Some(ref mut output) => output.send(message),
      None => Err(MidiError::SessionClosed),
    }
  }

  /// Release the output. A second close is a no-op.
  pub fn close(&mut self) -> Result<(), MidiError> {
    match self.output.take() {
      Some(mut output) => output.close(),
      None => Ok(()),
    }
  }
}

impl<O: Output> Drop for OutputSession<O> {
  fn drop(&mut self) {
    if let Some(mut output) = self.output.take() {
      if let Err(error) = output.close() {
        warn!("failed to close MIDI output: {}", error);
      }
    }
  }
}

/// Play one note: select `instrument` on `channel`, hold `pitch` at
/// `velocity` for `length` milliseconds, silence it, close the device.
///
/// All three messages are encoded before `open` runs, so a range violation
/// never touches the device. The sleep blocks the calling thread for its
/// whole duration; one note, one session, per call.
pub fn play_note<O, F>(
  open: F,
  channel: Channel,
  instrument: Program,
  pitch: Pitch,
  velocity: Velocity,
  length: u64,
) -> Result<(), MidiError>
  where O: Output, F: FnOnce() -> Result<O, MidiError>
{
  let select_instrument =
    ChannelVoiceMessage::ProgramChange { channel, program: instrument }.encode()?;
  let note_on =
    ChannelVoiceMessage::NoteOn { channel, pitch, velocity }.encode()?;
  // velocity 0 silences the note
  let note_off =
    ChannelVoiceMessage::NoteOn { channel, pitch, velocity: 0 }.encode()?;

  let mut session = OutputSession::new(open()?);

  session.send(&select_instrument)?;
  session.send(&note_on)?;
  debug!("holding note {} on channel {} for {}ms", pitch, channel, length);
  thread::sleep(Duration::from_millis(length));
  session.send(&note_off)?;
  session.close()
}
