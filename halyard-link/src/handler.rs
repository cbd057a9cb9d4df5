//! Link handler: receive state machine, queue drain, and transmitter.
//!
//! One [`LinkHandler`] owns everything needed to run one end of a link: the
//! receive state machine with its reused frame storage, the receive queue,
//! the injected byte sink, and the frame-received callback. Create it once
//! per link; there is no global instance.
//!
//! The callback runs synchronously inside [`LinkHandler::process_byte`] and
//! receives a reference into the handler's reused frame storage. It must
//! copy out whatever it wants to keep before returning; the storage is
//! overwritten by the next inbound frame.

use halyard_protocol::checksum::Checksum;
use halyard_protocol::frame::{Frame, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};

use crate::config::{LinkConfig, RX_BUFFER_SIZE};
use crate::ring::{BufferFull, RingBuffer};
use crate::sink::ByteSink;
use crate::stats::LinkStats;

/// Transmit errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendError<E> {
    /// Payload longer than [`MAX_PAYLOAD_SIZE`]; nothing was written
    PayloadTooLarge,
    /// The sink rejected a byte; the frame was aborted mid-write and bytes
    /// already written are not retracted
    Sink(E),
}

/// Receive states, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RxState {
    WaitHead,
    WaitSourceAddr,
    WaitDestAddr,
    WaitFuncId,
    WaitLenLow,
    WaitLenHigh,
    WaitData,
    WaitChecksum1,
    WaitChecksum2,
}

/// Protocol engine for one end of a serial link.
///
/// Generic over the transmit sink `S` and the frame-received callback `F`.
/// Both are supplied at construction and never re-registered.
pub struct LinkHandler<S, F>
where
    S: ByteSink,
    F: FnMut(&Frame),
{
    config: LinkConfig,
    state: RxState,
    frame: Frame,
    pending_len: u16,
    checksum: Checksum,
    rx_checksum: [u8; 2],
    queue: RingBuffer<RX_BUFFER_SIZE>,
    sink: S,
    on_frame: F,
    stats: LinkStats,
}

impl<S, F> LinkHandler<S, F>
where
    S: ByteSink,
    F: FnMut(&Frame),
{
    /// Create a handler with its collaborators.
    pub fn new(config: LinkConfig, sink: S, on_frame: F) -> Self {
        Self {
            state: RxState::WaitHead,
            frame: Frame::default(),
            pending_len: 0,
            checksum: Checksum::new(config.checksum),
            rx_checksum: [0; 2],
            queue: RingBuffer::new(),
            config,
            sink,
            on_frame,
            stats: LinkStats::default(),
        }
    }

    /// Build and transmit one frame.
    ///
    /// The frame carries this handler's configured source address. Bytes go
    /// out one at a time through the sink; the first sink failure aborts the
    /// rest of the frame.
    pub fn send_frame(
        &mut self,
        dest: u8,
        func_id: u8,
        payload: &[u8],
    ) -> Result<(), SendError<S::Error>> {
        let mut frame = Frame::new(self.config.source_addr, dest, func_id, payload)
            .map_err(|_| SendError::PayloadTooLarge)?;
        frame.head = self.config.head;

        let mut buffer = [0u8; MAX_FRAME_SIZE];
        // A bounds-checked frame always fits the staging buffer
        let Ok(total) = frame.encode(self.config.checksum, &mut buffer) else {
            return Err(SendError::PayloadTooLarge);
        };

        for &byte in &buffer[..total] {
            self.sink.write_byte(byte).map_err(SendError::Sink)?;
        }

        self.stats.frames_sent = self.stats.frames_sent.wrapping_add(1);
        Ok(())
    }

    /// Queue one arriving byte (producer side).
    ///
    /// Safe to call from the byte-arrival context. On a full queue the byte
    /// is rejected and the caller decides between dropping it and exerting
    /// backpressure upstream.
    pub fn enqueue_byte(&mut self, byte: u8) -> Result<(), BufferFull> {
        match self.queue.push(byte) {
            Ok(()) => Ok(()),
            Err(full) => {
                self.stats.queue_overruns = self.stats.queue_overruns.wrapping_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("rx queue full, byte rejected");
                Err(full)
            }
        }
    }

    /// Drain the receive queue through the state machine (consumer side).
    ///
    /// Runs until the queue reports empty. Every completed valid frame is
    /// delivered to the callback before this returns. Not reentrant: one
    /// logical thread of control drives the consumer path.
    pub fn poll(&mut self) {
        while let Some(byte) = self.queue.pop() {
            self.process_byte(byte);
        }
    }

    /// Feed one byte directly into the receive state machine.
    ///
    /// For callers already executing in the consumer context that do not
    /// need the queue. Invalid frames are discarded silently; the state
    /// machine resynchronizes on the next head marker.
    pub fn process_byte(&mut self, byte: u8) {
        match self.state {
            RxState::WaitHead => {
                if byte == self.config.head {
                    self.frame.head = byte;
                    self.frame.payload.clear();
                    self.checksum = Checksum::new(self.config.checksum);
                    self.checksum.update(byte);
                    self.state = RxState::WaitSourceAddr;
                }
                // Anything else is line noise between frames; drop it
            }
            RxState::WaitSourceAddr => {
                self.frame.source = byte;
                self.checksum.update(byte);
                self.state = RxState::WaitDestAddr;
            }
            RxState::WaitDestAddr => {
                self.frame.dest = byte;
                self.checksum.update(byte);
                self.state = RxState::WaitFuncId;
            }
            RxState::WaitFuncId => {
                self.frame.func_id = byte;
                self.checksum.update(byte);
                self.state = RxState::WaitLenLow;
            }
            RxState::WaitLenLow => {
                self.pending_len = byte as u16;
                self.checksum.update(byte);
                self.state = RxState::WaitLenHigh;
            }
            RxState::WaitLenHigh => {
                self.pending_len |= (byte as u16) << 8;
                self.checksum.update(byte);

                if self.pending_len as usize > MAX_PAYLOAD_SIZE {
                    self.stats.oversized_frames = self.stats.oversized_frames.wrapping_add(1);
                    #[cfg(feature = "defmt")]
                    defmt::warn!("rx length {=u16} exceeds payload bound, frame dropped", self.pending_len);
                    self.state = RxState::WaitHead;
                } else if self.pending_len == 0 {
                    self.state = RxState::WaitChecksum1;
                } else {
                    self.state = RxState::WaitData;
                }
            }
            RxState::WaitData => {
                // Cannot overflow: the length field was bounds-checked
                let _ = self.frame.payload.push(byte);
                self.checksum.update(byte);

                if self.frame.payload.len() as u16 >= self.pending_len {
                    self.state = RxState::WaitChecksum1;
                }
            }
            RxState::WaitChecksum1 => {
                self.rx_checksum[0] = byte;
                self.state = RxState::WaitChecksum2;
            }
            RxState::WaitChecksum2 => {
                self.rx_checksum[1] = byte;

                if self.checksum.matches(self.rx_checksum) {
                    self.stats.frames_received = self.stats.frames_received.wrapping_add(1);
                    (self.on_frame)(&self.frame);
                } else {
                    self.stats.checksum_errors = self.stats.checksum_errors.wrapping_add(1);
                    #[cfg(feature = "defmt")]
                    defmt::warn!("rx checksum mismatch, frame dropped");
                }
                self.state = RxState::WaitHead;
            }
        }
    }

    /// Return the receive side to its just-constructed state.
    ///
    /// Clears the state machine, the checksum accumulators, the in-progress
    /// frame, and the receive queue. Collaborators and statistics are
    /// untouched.
    pub fn reset(&mut self) {
        self.state = RxState::WaitHead;
        self.frame.payload.clear();
        self.pending_len = 0;
        self.checksum = Checksum::new(self.config.checksum);
        self.rx_checksum = [0; 2];
        self.queue.clear();
    }

    /// Active configuration.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Bytes waiting in the receive queue.
    pub fn queued_bytes(&self) -> usize {
        self.queue.len()
    }

    /// Link counters.
    pub fn stats(&self) -> &LinkStats {
        &self.stats
    }

    /// Zero the link counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// The injected sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The injected sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
