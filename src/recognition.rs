//! Cancellable background recognition around an external OCR engine.
//!
//! The engine runs on its own thread, streams progress events over a
//! channel, and hands its complete text to the parser exactly once, or
//! not at all when cancelled.

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::info;

use crate::catalog::ReferenceData;
use crate::ocr::{parse_game_text, ParsedGame};

/// What the user sees when the engine fails; the entry form falls back
/// to manual input.
const FAILED_MESSAGE: &str = "Failed to process image. Please try again or enter data manually.";

/// Cancellation handle shared between the caller and the task.
///
/// Cloning is cheap and every clone observes the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the running task to stop at its next checkpoint.
    pub fn request_cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// True once cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// External text-recognition engine seam.
///
/// Implementations report fraction-complete in `0.0..=1.0` through
/// `progress` and should poll `cancel` between stages, returning early
/// with any error; a triggered token turns the outcome into
/// `Cancelled` rather than `Failed`.
pub trait Recognizer {
    /// Produces the complete recognized text for one scoreboard image.
    fn recognize(&mut self, progress: &mut dyn FnMut(f32), cancel: &CancelToken) -> Result<String>;
}

/// Events delivered to the caller: zero or more `Progress`, then
/// exactly one `Finished`.
#[derive(Clone, Debug, PartialEq)]
pub enum RecognitionEvent {
    /// Engine progress in `0.0..=1.0`
    Progress(f32),
    /// Terminal outcome; nothing follows it
    Finished(RecognitionOutcome),
}

/// Terminal result of a recognition task.
#[derive(Clone, Debug, PartialEq)]
pub enum RecognitionOutcome {
    /// Complete transcript recognized and parsed
    Complete(ParsedGame),
    /// Cancelled before completion; the parser never ran
    Cancelled,
    /// Engine failure, carrying the engine's error chain
    Failed(String),
}

impl std::fmt::Display for RecognitionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognitionOutcome::Complete(_) => write!(f, "Complete"),
            RecognitionOutcome::Cancelled => write!(f, "Cancelled"),
            RecognitionOutcome::Failed(_) => write!(f, "{}", FAILED_MESSAGE),
        }
    }
}

/// Handle to a spawned recognition task.
pub struct RecognitionHandle {
    /// Event stream for the caller to drain
    pub events: Receiver<RecognitionEvent>,
    cancel: CancelToken,
    thread: JoinHandle<()>,
}

impl RecognitionHandle {
    /// Token for cancelling this task.
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Asks the task to stop at its next checkpoint.
    pub fn request_cancel(&self) {
        self.cancel.request_cancel();
    }

    /// Waits for the worker thread to finish.
    pub fn join(self) -> thread::Result<()> {
        self.thread.join()
    }
}

/// Spawns a recognition task on its own thread.
///
/// The worker drives the engine, forwards progress events, and parses
/// the complete text exactly once. A dropped receiver only silences
/// event delivery; the worker still finishes its engine run.
pub fn spawn_recognition<R>(mut recognizer: R, data: ReferenceData) -> RecognitionHandle
where
    R: Recognizer + Send + 'static,
{
    let (sender, events) = channel();
    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();

    let thread = thread::spawn(move || {
        run_recognition(&mut recognizer, &data, &sender, &worker_cancel);
    });

    RecognitionHandle {
        events,
        cancel,
        thread,
    }
}

/// Runs one recognition to its terminal event (worker thread body).
fn run_recognition(
    recognizer: &mut dyn Recognizer,
    data: &ReferenceData,
    sender: &Sender<RecognitionEvent>,
    cancel: &CancelToken,
) {
    info!("recognition task started");

    let progress_sender = sender.clone();
    let mut progress = move |fraction: f32| {
        // A send error means the receiver is gone; the engine run
        // continues regardless
        let _ = progress_sender.send(RecognitionEvent::Progress(fraction));
    };

    let outcome = match recognizer.recognize(&mut progress, cancel) {
        Ok(text) => {
            if cancel.is_cancelled() {
                // Text arrived after the cancel request: honor the
                // request and keep the parser out of it
                RecognitionOutcome::Cancelled
            } else {
                RecognitionOutcome::Complete(parse_game_text(&text, data))
            }
        }
        Err(e) => {
            if cancel.is_cancelled() {
                RecognitionOutcome::Cancelled
            } else {
                RecognitionOutcome::Failed(format!("{:#}", e))
            }
        }
    };

    info!(outcome = %outcome, "recognition task finished");
    let _ = sender.send(RecognitionEvent::Finished(outcome));
}
