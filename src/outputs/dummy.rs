use std::cell::RefCell;
use std::rc::Rc;

use crate::error::MidiError;
use crate::message::EncodedMessage;
use crate::outputs::Output;

/// What a dummy output saw, shared with the test that created it.
#[derive(Default)]
pub struct Log {
  pub sent: Vec<[u8; 4]>,
  pub closed: bool,
}

/// An output that records instead of transmitting. Can be told to start
/// refusing sends after a given count, to exercise the failure path.
pub struct DummyOutput {
  pub log: Rc<RefCell<Log>>,
  pub fail_sends_after: Option<usize>,
}

impl DummyOutput {
  pub fn new() -> (Rc<RefCell<Log>>, DummyOutput) {
    let log = Rc::new(RefCell::new(Log::default()));
    (log.clone(), DummyOutput { log, fail_sends_after: None })
  }
}

impl Output for DummyOutput {
  fn send(&mut self, message: &EncodedMessage) -> Result<(), MidiError> {
    let mut log = self.log.borrow_mut();
    if let Some(limit) = self.fail_sends_after {
      if log.sent.len() >= limit {
        return Err(MidiError::Transmission("dummy output refused".into()));
      }
    }
    log.sent.push(*message.bytes());
    Ok(())
  }

  fn close(&mut self) -> Result<(), MidiError> {
    self.log.borrow_mut().closed = true;
    Ok(())
  }
}
