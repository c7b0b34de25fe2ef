//! Background octree construction on rayon's thread pool.
//!
//! # Flow
//!
//! ```text
//! Main Thread                      Async (rayon)
//! ┌──────────────────┐
//! │ OctreeBuilder::  │
//! │ new(points)      │
//! └────────┬─────────┘
//!          │ start()
//!          ▼
//!                                  ┌──────────────┐
//!                                  │ finish()     │
//!                                  │ (insert all) │
//!                                  └──────┬───────┘
//! ┌──────────────────┐                    │
//! │ poll()           │◄───────────────────┘
//! │ tree.commit(..)  │
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut build = AsyncOctreeBuild::new();
//! build.start(OctreeBuilder::new(points, OctreeConfig::default())?);
//!
//! // Poll each frame; the old tree keeps answering queries meanwhile.
//! if let Some(builder) = build.poll() {
//!     tree.commit(builder);
//! }
//! ```

use crossbeam_channel::{self as channel, Receiver, TryRecvError};

use super::OctreeBuilder;

/// Non-blocking background octree build.
///
/// Holds at most one build in flight.
#[derive(Default)]
pub struct AsyncOctreeBuild {
  /// Receiver for the pending builder.
  receiver: Option<Receiver<OctreeBuilder>>,
}

impl AsyncOctreeBuild {
  /// Create an idle pipeline.
  pub fn new() -> Self {
    Self { receiver: None }
  }

  /// Check if a build is running.
  pub fn is_busy(&self) -> bool {
    self.receiver.is_some()
  }

  /// Finish `builder` on the rayon pool.
  ///
  /// Returns `true` if started, `false` if a build is already in flight
  /// (the builder is dropped).
  pub fn start(&mut self, builder: OctreeBuilder) -> bool {
    if self.is_busy() {
      return false;
    }

    let (sender, receiver) = channel::bounded(1);
    self.receiver = Some(receiver);

    #[cfg(feature = "tracing")]
    tracing::debug!(points = builder.total(), "octree build started");

    rayon::spawn(move || {
      let finished = builder.finish();
      // Ignore send error (receiver dropped = cancelled)
      let _ = sender.send(finished);
    });

    true
  }

  /// Poll for the finished builder (non-blocking).
  ///
  /// Returns `Some(builder)` when complete, ready for
  /// [`PointOctree::commit`](crate::PointOctree::commit).
  pub fn poll(&mut self) -> Option<OctreeBuilder> {
    let receiver = self.receiver.as_ref()?;

    match receiver.try_recv() {
      Ok(builder) => {
        self.receiver = None;
        Some(builder)
      }
      Err(TryRecvError::Empty) => None,
      Err(TryRecvError::Disconnected) => {
        self.receiver = None;
        None
      }
    }
  }

  /// Block until the pending build finishes.
  ///
  /// Returns None if nothing was running.
  pub fn wait(&mut self) -> Option<OctreeBuilder> {
    let receiver = self.receiver.take()?;
    receiver.recv().ok()
  }

  /// Abandon the pending build. The worker finishes and discards its result.
  pub fn cancel(&mut self) {
    self.receiver = None;
  }
}

// =============================================================================
// Tests
// =============================================================================
