// Thu Oct 15 2026 - Alex

use crate::progress::{ProgressEvent, ProgressSink};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

/// Forwards events over a bounded channel to whichever thread owns the display.
///
/// `on_progress` blocks while the channel is full. Once the receiver is gone
/// events are dropped.
pub struct ChannelSink {
    sender: SyncSender<ProgressEvent>,
}

impl ChannelSink {
    pub fn new(sender: SyncSender<ProgressEvent>) -> Self {
        Self { sender }
    }
}

impl ProgressSink for ChannelSink {
    fn on_progress(&mut self, event: &ProgressEvent) {
        let _ = self.sender.send(event.clone());
    }
}

pub fn channel(bound: usize) -> (ChannelSink, Receiver<ProgressEvent>) {
    let (sender, receiver) = sync_channel(bound);
    (ChannelSink::new(sender), receiver)
}
