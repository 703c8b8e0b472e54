//! Timed Task Chains
//!
//! Delayed multi-step UI work (card removal, banner exit) as explicit chains
//! that can be cancelled before a step fires.

use std::cell::Cell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use any_spawner::Executor;
use leptos::task::spawn_local;

/// Install the browser executor; `spawn_local` panics until this has run
pub fn init_executor() {
    let _ = Executor::init_wasm_bindgen();
}

/// Shared cancellation flag, checked before every step
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Phases of an element leaving the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPhase {
    /// Start the exit animation
    Leave,
    /// Remove the element
    Detach,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<P> {
    /// Delay after the previous step
    pub delay_ms: u32,
    pub phase: P,
}

/// Ordered list of delayed phases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<P> {
    steps: Vec<Step<P>>,
}

impl<P: Copy> Chain<P> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn then(mut self, delay_ms: u32, phase: P) -> Self {
        self.steps.push(Step { delay_ms, phase });
        self
    }

    pub fn steps(&self) -> &[Step<P>] {
        &self.steps
    }

    pub fn total_delay_ms(&self) -> u32 {
        self.steps.iter().map(|s| s.delay_ms).sum()
    }

    #[cfg(test)]
    /// Absolute firing time of each phase, from the moment the chain starts
    pub fn timeline(&self) -> Vec<(u32, P)> {
        let mut at = 0;
        self.steps
            .iter()
            .map(|s| {
                at += s.delay_ms;
                (at, s.phase)
            })
            .collect()
    }
}

/// Linger on screen, then animate out, then detach
pub fn exit_chain(linger_ms: u32, exit_ms: u32) -> Chain<ExitPhase> {
    Chain::new()
        .then(linger_ms, ExitPhase::Leave)
        .then(exit_ms, ExitPhase::Detach)
}

/// Run a chain on the local executor; stops at the first step after cancellation
pub fn spawn_chain<P, F>(chain: Chain<P>, token: CancelToken, on_phase: F)
where
    P: Copy + 'static,
    F: FnMut(P) + 'static,
{
    spawn_local(run_chain(chain, token, TimeoutFuture::new, on_phase));
}

/// Drive a chain to the end, waiting on `sleep` before each step
pub async fn run_chain<P, S, W, F>(chain: Chain<P>, token: CancelToken, mut sleep: S, mut on_phase: F)
where
    P: Copy,
    S: FnMut(u32) -> W,
    W: Future<Output = ()>,
    F: FnMut(P),
{
    for step in chain.steps {
        sleep(step.delay_ms).await;
        if token.is_cancelled() {
            return;
        }
        on_phase(step.phase);
    }
}

/// Pending chains keyed by item id
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tokens: HashMap<String, CancelToken>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// New token for `id`; any chain already registered for it is cancelled
    pub fn register(&mut self, id: &str) -> CancelToken {
        let token = CancelToken::new();
        if let Some(old) = self.tokens.insert(id.to_string(), token.clone()) {
            old.cancel();
        }
        token
    }

    /// Drop the token of a chain that ran to the end
    pub fn complete(&mut self, id: &str) {
        self.tokens.remove(id);
    }

    /// Cancel every pending chain, returning the ids they belonged to
    pub fn cancel_all(&mut self) -> Vec<String> {
        self.tokens
            .drain()
            .map(|(id, token)| {
                token.cancel();
                id
            })
            .collect()
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.tokens.len()
    }
}
