//! The deterministic automaton produced by subset construction.

use std::fmt;

use crate::nfa::{DebugByte, StateId};

/// A single DFA state.
#[derive(Clone, PartialEq, Eq)]
pub struct DfaState {
    accepting: bool,
    /// Sorted by byte, at most one entry per byte.
    transitions: Vec<(u8, StateId)>,
    members: Option<Box<[StateId]>>,
}

impl DfaState {
    pub(crate) fn new(
        accepting: bool,
        transitions: Vec<(u8, StateId)>,
        members: Option<Box<[StateId]>>,
    ) -> DfaState {
        debug_assert!(transitions.windows(2).all(|w| w[0].0 < w[1].0));
        DfaState { accepting, transitions, members }
    }

    /// Returns true if input ending in this state is accepted.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// The outgoing transitions in ascending byte order.
    pub fn transitions(&self) -> impl Iterator<Item = (u8, StateId)> + '_ {
        self.transitions.iter().copied()
    }

    /// The state reached on `byte`, if any.
    pub fn next(&self, byte: u8) -> Option<StateId> {
        self.transitions
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.transitions[i].1)
    }

    /// The sorted NFA states this state was built from. Only recorded when
    /// [`Config::record_members`](crate::Config::record_members) is enabled.
    pub fn members(&self) -> Option<&[StateId]> {
        self.members.as_deref()
    }
}

impl fmt::Debug for DfaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(byte, next)) in self.transitions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?} => {}", DebugByte(byte), next)?;
        }
        Ok(())
    }
}

/// A deterministic finite automaton over bytes.
///
/// State `0` is the start state. A byte without a recorded transition leads
/// nowhere, meaning the input is rejected. A `Dfa` owns all of its data and
/// stays valid after the NFA it came from is dropped.
#[derive(Clone)]
pub struct Dfa {
    states: Vec<DfaState>,
}

impl Dfa {
    pub(crate) fn new(states: Vec<DfaState>) -> Dfa {
        Dfa { states }
    }

    /// The start state, always `0`.
    pub fn start_state(&self) -> StateId {
        0
    }

    /// The number of states. Never zero.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: every DFA has at least its start state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Look up a state.
    pub fn state(&self, id: StateId) -> Option<&DfaState> {
        self.states.get(id)
    }

    /// All states, indexed by [`StateId`].
    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    /// Returns true if `id` is an accepting state. Unknown states are not.
    pub fn is_accepting(&self, id: StateId) -> bool {
        self.state(id).map_or(false, DfaState::is_accepting)
    }

    /// The state reached from `id` on `byte`, if any.
    pub fn next_state(&self, id: StateId, byte: u8) -> Option<StateId> {
        self.state(id).and_then(|state| state.next(byte))
    }
}

impl fmt::Debug for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "thompson_dfa::Dfa(")?;
        for (sid, state) in self.states.iter().enumerate() {
            let marker = if state.accepting { '*' } else { ' ' };
            writeln!(f, "{}{:06}: {:?}", marker, sid, state)?;
        }
        writeln!(f, ")")
    }
}
