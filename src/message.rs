use crate::error::MidiError;
use crate::types::{Channel, Pitch, Program, Velocity};

/// Status-byte signatures, per the MIDI channel-voice protocol:
///
/// Note On:        [0] 0b1001cccc  [1] 0ppppppp  [2] 0vvvvvvv  [3] unused
/// Program Change: [0] 0b1100cccc  [1] 0ppppppp  [2] unused    [3] unused
pub const NOTE_ON: u8        = 0b1001;
pub const PROGRAM_CHANGE: u8 = 0b1100;

const CHANNEL_MAX: u8 = 15;
const DATA_MAX: u8    = 127;

/// A channel-voice message packed into its canonical 4-byte form.
///
/// Byte 3 is always zero; platform APIs that take a 32-bit word consume all
/// four bytes, stream-oriented ones take the [`wire`](EncodedMessage::wire)
/// prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedMessage([u8; 4]);

impl EncodedMessage {
  pub fn bytes(&self) -> &[u8; 4] {
    &self.0
  }

  /// The wire-significant prefix: status plus two data bytes for a note
  /// message, status plus one for a program change. Trailing zero padding
  /// must not reach a byte-stream transport or it would be read as the
  /// start of another message.
  pub fn wire(&self) -> &[u8] {
    if self.0[0] >> 4 == PROGRAM_CHANGE {
      &self.0[..2]
    } else {
      &self.0[..3]
    }
  }
}

/// One outbound channel-voice event, as requested by the caller.
///
/// There is no `NoteOff` variant: a note is silenced by a `NoteOn` with
/// velocity 0, per the MIDI convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelVoiceMessage {
  NoteOn { channel: Channel, pitch: Pitch, velocity: Velocity },
  ProgramChange { channel: Channel, program: Program },
}

impl ChannelVoiceMessage {
  pub fn encode(&self) -> Result<EncodedMessage, MidiError> {
    match *self {
      ChannelVoiceMessage::NoteOn { channel, pitch, velocity } =>
        encode_note_message(channel, pitch, velocity),
      ChannelVoiceMessage::ProgramChange { channel, program } =>
        encode_program_change_message(channel, program),
    }
  }
}

fn check_limit(field: &'static str, value: u8, max: u8) -> Result<(), MidiError> {
  if value > max {
    Err(MidiError::RangeViolation { field, value, max })
  } else {
    Ok(())
  }
}

/// Encode a note-on event. A velocity of 0 silences the note.
pub fn encode_note_message(channel: Channel, pitch: Pitch, velocity: Velocity)
    -> Result<EncodedMessage, MidiError>
{
  check_limit("channel", channel, CHANNEL_MAX)?;
  check_limit("pitch", pitch, DATA_MAX)?;
  check_limit("velocity", velocity, DATA_MAX)?;
  Ok(EncodedMessage([NOTE_ON << 4 | channel, pitch, velocity, 0]))
}

/// Encode a program-change event selecting `program` on `channel`.
pub fn encode_program_change_message(channel: Channel, program: Program)
    -> Result<EncodedMessage, MidiError>
{
  check_limit("channel", channel, CHANNEL_MAX)?;
  check_limit("instrument", program, DATA_MAX)?;
  Ok(EncodedMessage([PROGRAM_CHANGE << 4 | channel, program, 0, 0]))
}
