//! Stack-based finite state machine
//!
//! Exactly one state is current (or none before the first load and after
//! shutdown). A `change` is only recorded as pending; the host applies it at
//! the next frame boundary with [`StateMachine::advance`]. `push` and `pop`
//! take effect immediately and suspend/resume states without discarding them.

use std::collections::HashMap;
use std::fmt;

use super::vars::SharedVars;
use crate::platform::FrameInput;

/// Every state the game can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    MainMenu,
    Levels,
    Pause,
    GameOver,
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StateId::MainMenu => "Main Menu",
            StateId::Levels => "Levels",
            StateId::Pause => "Pause",
            StateId::GameOver => "Game Over",
        };
        f.write_str(name)
    }
}

/// Lifecycle of a state.
///
/// `unload` releases transient resources only; the instance itself stays
/// registered and keeps its data, so a state resumed after `pop` sees
/// everything it had before `push`.
pub trait GameState {
    fn id(&self) -> StateId;

    fn load(&mut self, flow: &mut Flow);

    fn unload(&mut self, flow: &mut Flow);

    fn update(&mut self, flow: &mut Flow, input: &FrameInput, dt: f32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    /// None requests shutdown
    Change(Option<StateId>),
    Push(StateId),
    Pop,
}

/// What a state sees of the machine: the shared vars and a request queue.
///
/// Handed to every lifecycle call instead of a reference back to the machine.
#[derive(Debug, Default)]
pub struct Flow {
    pub vars: SharedVars,
    requests: Vec<Request>,
}

impl Flow {
    pub fn change(&mut self, id: StateId) {
        self.requests.push(Request::Change(Some(id)));
    }

    pub fn request_quit(&mut self) {
        self.requests.push(Request::Change(None));
    }

    pub fn push(&mut self, id: StateId) {
        self.requests.push(Request::Push(id));
    }

    pub fn pop(&mut self) {
        self.requests.push(Request::Pop);
    }
}

#[derive(Default)]
pub struct StateMachine {
    states: HashMap<StateId, Box<dyn GameState>>,
    current: Option<StateId>,
    pending: Option<StateId>,
    stack: Vec<StateId>,
    flow: Flow,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state. A duplicate id is reported and the existing state kept.
    pub fn register(&mut self, state: Box<dyn GameState>) -> bool {
        let id = state.id();
        if self.states.contains_key(&id) {
            log::warn!("State \"{}\" already exists", id);
            return false;
        }
        self.states.insert(id, state);
        true
    }

    pub fn deregister(&mut self, id: StateId) {
        if self.states.remove(&id).is_none() {
            log::warn!("State \"{}\" does not exist", id);
        }
    }

    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    pub fn pending(&self) -> Option<StateId> {
        self.pending
    }

    /// Suspended states, oldest first
    pub fn stack(&self) -> &[StateId] {
        &self.stack
    }

    pub fn vars(&self) -> &SharedVars {
        &self.flow.vars
    }

    pub fn vars_mut(&mut self) -> &mut SharedVars {
        &mut self.flow.vars
    }

    /// A shutdown has been requested (or nothing was ever requested)
    pub fn is_quit(&self) -> bool {
        self.pending.is_none()
    }

    /// A change is waiting for [`advance`](Self::advance)
    pub fn is_changed(&self) -> bool {
        self.current != self.pending
    }

    /// Request a transition to `id` at the next frame boundary
    pub fn change(&mut self, id: StateId) {
        if !self.states.contains_key(&id) {
            log::warn!("State \"{}\" does not exist", id);
            return;
        }
        self.request(Some(id));
    }

    /// Request shutdown at the next frame boundary
    pub fn request_quit(&mut self) {
        self.request(None);
    }

    fn request(&mut self, target: Option<StateId>) {
        if target == self.current {
            log::warn!("Change to the current state ignored");
            return;
        }
        self.pending = target;
        log::info!("Changing state... {} -> {}", name(self.current), name(target));
    }

    /// Apply a pending change: unload the current state, load the new one.
    /// Returns whether anything changed.
    pub fn advance(&mut self) -> bool {
        if !self.is_changed() {
            return false;
        }
        if let Some(id) = self.current {
            self.call(id, |state, flow| state.unload(flow));
        }
        self.current = self.pending;
        if let Some(id) = self.current {
            self.call(id, |state, flow| state.load(flow));
        }
        self.apply_requests();
        true
    }

    /// Suspend the current state and switch to `id`
    pub fn push(&mut self, id: StateId) {
        self.push_now(id);
        self.apply_requests();
    }

    /// Drop the current state and resume the most recently suspended one
    pub fn pop(&mut self) {
        self.pop_now();
        self.apply_requests();
    }

    /// Run one frame of the current state, then apply what it asked for
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        match self.current {
            Some(id) => self.call(id, |state, flow| state.update(flow, input, dt)),
            None => log::warn!("No current state to update"),
        }
        self.apply_requests();
    }

    /// Unload the current state. Without a pending change this also clears it.
    pub fn unload_current(&mut self) {
        let Some(id) = self.current else {
            log::warn!("No current state to unload");
            return;
        };
        self.call(id, |state, flow| state.unload(flow));
        if !self.is_changed() {
            self.current = None;
            self.pending = None;
        }
    }

    /// Unwind every suspended state, then unload the current one
    pub fn teardown(&mut self) {
        while let Some(id) = self.stack.pop() {
            self.call(id, |state, flow| state.unload(flow));
        }
        self.unload_current();
        self.flow.requests.clear();
    }

    fn push_now(&mut self, id: StateId) {
        if !self.states.contains_key(&id) {
            log::warn!("State \"{}\" does not exist", id);
            return;
        }
        log::info!("Pushing state: {} -> {}", name(self.current), id);
        if let Some(suspended) = self.current {
            self.stack.push(suspended);
            self.call(suspended, |state, flow| state.unload(flow));
        }
        self.current = Some(id);
        self.pending = Some(id);
        self.call(id, |state, flow| state.load(flow));
    }

    fn pop_now(&mut self) {
        let Some(resumed) = self.stack.pop() else {
            log::warn!("No states to pop");
            return;
        };
        log::info!("Popping state: {}", name(self.current));
        if let Some(id) = self.current {
            self.call(id, |state, flow| state.unload(flow));
        }
        self.current = Some(resumed);
        self.pending = Some(resumed);
        self.call(resumed, |state, flow| state.load(flow));
    }

    /// Lifecycle calls may queue further requests; drain until quiet
    fn apply_requests(&mut self) {
        loop {
            let requests = std::mem::take(&mut self.flow.requests);
            if requests.is_empty() {
                break;
            }
            for request in requests {
                match request {
                    Request::Change(Some(id)) => self.change(id),
                    Request::Change(None) => self.request_quit(),
                    Request::Push(id) => self.push_now(id),
                    Request::Pop => self.pop_now(),
                }
            }
        }
    }

    fn call(&mut self, id: StateId, f: impl FnOnce(&mut dyn GameState, &mut Flow)) {
        match self.states.get_mut(&id) {
            Some(state) => f(state.as_mut(), &mut self.flow),
            None => log::warn!("State \"{}\" does not exist", id),
        }
    }
}

fn name(id: Option<StateId>) -> String {
    id.map_or_else(|| "None".to_string(), |id| id.to_string())
}
