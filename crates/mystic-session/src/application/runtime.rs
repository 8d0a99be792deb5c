//! Single-mutator runtime for a session.
//!
//! One tokio task owns the [`SessionState`]. Intents arrive on an `mpsc`
//! channel and are applied one at a time, so every transition runs to
//! completion before the next starts. Each committed snapshot is published on
//! a `watch` channel. Timers and narrative fetches run as detached tasks that
//! report back through the same channel; they hold only a weak sender, so they
//! never keep a stopped session alive.

use std::sync::Arc;

use mystic_core::clock::Clock;
use mystic_core::error::DomainError;
use mystic_core::oracle::NarrativeOracle;
use mystic_core::rng::DeterministicRng;
use mystic_deck::spread::{DrawnCard, SPREAD_SIZE};
use mystic_reading::application::fetch::fetch_reading;
use mystic_reading::domain::reading::Reading;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use super::timings::PhaseTimings;
use crate::domain::aggregates::{SessionState, Transition};
use crate::domain::effects::Effect;
use crate::domain::intents::Intent;
use crate::domain::snapshot::SessionSnapshot;

const INBOX_CAPACITY: usize = 64;

type Reply = oneshot::Sender<Result<SessionSnapshot, DomainError>>;

#[derive(Debug)]
struct Envelope {
    intent: Intent,
    reply: Option<Reply>,
}

/// Cloneable handle used by the presentation layer to drive a session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    inbox: mpsc::Sender<Envelope>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
    /// Submits an intent and waits for it to be applied.
    ///
    /// Returns the snapshot after the transition. An intent that does not
    /// apply in the current phase returns the unchanged snapshot.
    ///
    /// # Errors
    ///
    /// Returns the `DomainError` raised by the transition, or
    /// `DomainError::Unavailable` if the runtime has stopped.
    pub async fn dispatch(&self, intent: Intent) -> Result<SessionSnapshot, DomainError> {
        let (reply, response) = oneshot::channel();
        self.inbox
            .send(Envelope {
                intent,
                reply: Some(reply),
            })
            .await
            .map_err(|_| unavailable())?;
        response.await.map_err(|_| unavailable())?
    }

    /// Whether the runtime task is still accepting intents.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.inbox.is_closed()
    }

    /// The most recently committed snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver notified after every transition that changes the snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }
}

fn unavailable() -> DomainError {
    DomainError::Unavailable("session runtime stopped".to_owned())
}

/// The task that owns and mutates a session.
pub struct SessionRuntime {
    state: SessionState,
    rng: Box<dyn DeterministicRng>,
    oracle: Arc<dyn NarrativeOracle>,
    clock: Arc<dyn Clock>,
    timings: PhaseTimings,
    inbox: mpsc::Receiver<Envelope>,
    feedback: mpsc::WeakSender<Envelope>,
    snapshots: watch::Sender<SessionSnapshot>,
}

impl SessionRuntime {
    /// Starts the runtime on the current tokio runtime and returns its handle.
    ///
    /// The runtime stops once every [`SessionHandle`] has been dropped.
    #[must_use]
    pub fn spawn(
        state: SessionState,
        rng: Box<dyn DeterministicRng>,
        oracle: Arc<dyn NarrativeOracle>,
        clock: Arc<dyn Clock>,
        timings: PhaseTimings,
    ) -> SessionHandle {
        let (sender, inbox) = mpsc::channel(INBOX_CAPACITY);
        let (snapshots, receiver) = watch::channel(state.snapshot());
        let runtime = Self {
            state,
            rng,
            oracle,
            clock,
            timings,
            inbox,
            feedback: sender.downgrade(),
            snapshots,
        };
        tokio::spawn(runtime.run());

        SessionHandle {
            inbox: sender,
            snapshots: receiver,
        }
    }

    async fn run(mut self) {
        info!(generation = self.state.generation(), "session runtime started");
        while let Some(Envelope { intent, reply }) = self.inbox.recv().await {
            let result = self.apply(&intent);
            match reply {
                Some(reply) => {
                    // The caller may have given up waiting.
                    let _ = reply.send(result);
                }
                None => {
                    if let Err(error) = result {
                        warn!(%error, intent = intent.intent_type(), "follow-up intent rejected");
                    }
                }
            }
        }
        info!("session runtime stopped");
    }

    fn apply(&mut self, intent: &Intent) -> Result<SessionSnapshot, DomainError> {
        let Transition { state, effects } = self.state.transition(intent, self.rng.as_mut())?;
        self.state = state;

        let snapshot = self.state.snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                current.clone_from(&snapshot);
                true
            }
        });

        for effect in effects {
            self.execute(effect);
        }
        Ok(snapshot)
    }

    fn execute(&self, effect: Effect) {
        match effect {
            Effect::Schedule { timer, intent } => {
                let delay = self.timings.delay_for(timer);
                debug!(?timer, ?delay, "scheduling follow-up");
                let feedback = self.feedback.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    deliver(&feedback, intent).await;
                });
            }
            Effect::FetchNarrative { generation, cards } => {
                debug!(generation, "fetching narrative");
                let oracle = Arc::clone(&self.oracle);
                let clock = Arc::clone(&self.clock);
                let feedback = self.feedback.clone();
                tokio::spawn(async move {
                    let reading = resolve_reading(oracle.as_ref(), &cards).await;
                    let intent = Intent::NarrativeResolved {
                        generation,
                        reading,
                        received_at: clock.now(),
                    };
                    deliver(&feedback, intent).await;
                });
            }
        }
    }
}

async fn resolve_reading(
    oracle: &dyn NarrativeOracle,
    cards: &[DrawnCard; SPREAD_SIZE],
) -> Reading {
    match fetch_reading(oracle, cards).await {
        Ok(reading) => reading,
        Err(error) => {
            warn!(%error, "narrative request rejected, using fallback text");
            Reading::fallback()
        }
    }
}

async fn deliver(feedback: &mpsc::WeakSender<Envelope>, intent: Intent) {
    let Some(sender) = feedback.upgrade() else {
        debug!(intent = intent.intent_type(), "session gone, dropping follow-up");
        return;
    };
    let envelope = Envelope {
        intent,
        reply: None,
    };
    if sender.send(envelope).await.is_err() {
        debug!("session gone, dropping follow-up");
    }
}
