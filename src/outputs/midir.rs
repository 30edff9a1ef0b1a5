use log::debug;
use midir::{MidiOutput, MidiOutputConnection};

use crate::error::MidiError;
use crate::message::EncodedMessage;
use crate::outputs::Output;

const CLIENT_NAME: &str = "midinote";

/// An output backed by a midir connection to a system MIDI port.
pub struct MidirOutput {
  connection: Option<MidiOutputConnection>,
}

impl MidirOutput {
  /// Open the output device at `device`. Device 0 is the system default.
  pub fn open(device: usize) -> Result<MidirOutput, MidiError> {
    let midi_out = MidiOutput::new(CLIENT_NAME)
      .map_err(|e| MidiError::DeviceUnavailable(e.to_string()))?;

    let ports = midi_out.ports();
    if ports.is_empty() {
      return Err(MidiError::DeviceUnavailable("no MIDI output device detected".into()));
    }
    let port = ports.get(device).ok_or_else(|| {
      MidiError::DeviceUnavailable(
        format!("device {} requested but only {} detected", device, ports.len()))
    })?;

    debug!("opening MIDI output #{}: {}", device,
      midi_out.port_name(port).as_deref().unwrap_or("<no device name>"));

    let connection = midi_out.connect(port, "midinote-out")
      .map_err(|e| MidiError::DeviceUnavailable(e.to_string()))?;
    Ok(MidirOutput { connection: Some(connection) })
  }

  /// Numbered names of every MIDI output port the platform reports.
  pub fn list_devices() -> Result<Vec<String>, MidiError> {
    let midi_out = MidiOutput::new(CLIENT_NAME)
      .map_err(|e| MidiError::DeviceUnavailable(e.to_string()))?;

    Ok(midi_out.ports().iter().enumerate().map(|(i, port)| {
      format!("#{}: {}", i,
        midi_out.port_name(port).as_deref().unwrap_or("<no device name>"))
    }).collect())
  }
}

impl Output for MidirOutput {
  fn send(&mut self, message: &EncodedMessage) -> Result<(), MidiError> {
    let connection = self.connection.as_mut().ok_or(MidiError::SessionClosed)?;
    debug!("sending {:02X?}", message.wire());
    connection.send(message.wire())
      .map_err(|e| MidiError::Transmission(e.to_string()))
  }

  fn close(&mut self) -> Result<(), MidiError> {
    if let Some(connection) = self.connection.take() {
      connection.close();
    }
    Ok(())
  }
}
