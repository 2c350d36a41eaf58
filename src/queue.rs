//! Pending message queue: encoded events awaiting delivery.

use tracing::{debug, info};

/// One encoded event waiting to be sent.
///
/// Each section leaves the message at most once: the immediate section is
/// taken by value when the message expires, the delayed section is cloned
/// for every offer and dropped with the message at expiry.
#[derive(Debug)]
pub struct PendingMessage {
    expiry: u64,
    delayed: Option<Vec<u8>>,
    immediate: Option<Vec<u8>>,
}

impl PendingMessage {
    pub fn new(expiry: u64, delayed: Option<Vec<u8>>, immediate: Option<Vec<u8>>) -> Self {
        Self {
            expiry,
            delayed,
            immediate,
        }
    }
}

/// Insertion-ordered collection of pending messages.
#[derive(Debug, Default)]
pub struct PendingQueue {
    messages: Vec<PendingMessage>,
}

impl PendingQueue {
    pub fn push(&mut self, message: PendingMessage) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drops the delayed section of every pending message, leaving each to
    /// fall back to its expiry behavior.
    pub fn clear_delayed(&mut self) {
        for message in &mut self.messages {
            message.delayed = None;
        }
    }

    /// Scans for the next section to send at date `now`.
    ///
    /// Expired messages give up their immediate section once and are
    /// removed. Live messages lose their immediate section and offer a copy
    /// of their delayed one until expiry. The scan stops at the first
    /// section found; messages behind it wait for a later scan.
    pub fn resolve(&mut self, now: u64) -> Option<Vec<u8>> {
        let mut index = 0;
        while index < self.messages.len() {
            let message = &mut self.messages[index];
            if message.expiry < now {
                let immediate = message.immediate.take();
                self.messages.remove(index);
                match immediate {
                    Some(section) => {
                        info!("sending an immediate event");
                        return Some(section);
                    }
                    None => {
                        info!("event expired");
                        continue;
                    }
                }
            }
            message.immediate = None;
            if let Some(section) = &message.delayed {
                debug!("sending an event");
                return Some(section.clone());
            }
            index += 1;
        }
        None
    }
}
