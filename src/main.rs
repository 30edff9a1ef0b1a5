use std::process;

use structopt::StructOpt;

mod error;
mod message;
mod outputs;
mod session;
mod types;

use crate::error::MidiError;
use crate::outputs::MidirOutput;
use crate::session::play_note;

/// Plays a single MIDI note through a system MIDI output device.
#[derive(StructOpt)]
#[structopt(name = "midinote")]
struct Options {
  /// MIDI channel to play on
  #[structopt(short = "c", long = "channel", default_value = "0")]
  channel: u8,
  /// General MIDI program number (0 is Grand Piano)
  #[structopt(short = "i", long = "instrument", default_value = "0")]
  instrument: u8,
  /// MIDI note number (60 is middle C)
  #[structopt(short = "p", long = "pitch", default_value = "60")]
  pitch: u8,
  /// note-on velocity
  #[structopt(short = "v", long = "velocity", default_value = "127")]
  velocity: u8,
  /// how long the note sounds, in milliseconds
  #[structopt(short = "l", long = "length", default_value = "3000")]
  length: u64,
  /// MIDI output device index (0 is the system default)
  #[structopt(short = "d", long = "device", default_value = "0")]
  device: usize,
  /// list MIDI output devices and exit
  #[structopt(long = "list")]
  list: bool,
}

fn run(options: &Options) -> Result<(), MidiError> {
  if options.list {
    for device in MidirOutput::list_devices()? {
      println!("{}", device);
    }
    return Ok(());
  }

  println!(
    "playing note {} on channel {} (instrument {}, velocity {}) for {}ms",
    options.pitch, options.channel, options.instrument, options.velocity,
    options.length);

  play_note(
    || MidirOutput::open(options.device),
    options.channel,
    options.instrument,
    options.pitch,
    options.velocity,
    options.length)
}

fn main() {
  env_logger::init();
  let options = Options::from_args();
  // run and, if necessary, print error message to stderr
  if let Err(error) = run(&options) {
    eprintln!("Error: {}", error);
    process::exit(1);
  }
}

#[cfg(test)]
mod tests {
  use super::Options;
  use structopt::StructOpt;

  #[test]
  fn defaults_are_a_three_second_middle_c() {
    let options = Options::from_iter(vec!["midinote"]);
    assert_eq!(options.channel, 0);
    assert_eq!(options.instrument, 0);
    assert_eq!(options.pitch, 60);
    assert_eq!(options.velocity, 127);
    assert_eq!(options.length, 3000);
    assert_eq!(options.device, 0);
    assert!(!options.list);
  }

  #[test]
  fn short_flags_override_the_defaults() {
    let options =
      Options::from_iter(vec!["midinote", "-c", "1", "-i", "24", "-p", "81", "-v", "120", "-l", "2000"]);
    assert_eq!(options.channel, 1);
    assert_eq!(options.instrument, 24);
    assert_eq!(options.pitch, 81);
    assert_eq!(options.velocity, 120);
    assert_eq!(options.length, 2000);
  }
}
