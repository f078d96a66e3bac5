//! Subset construction from a frozen NFA to a DFA.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use indexmap::IndexSet;

use crate::{
    closure::EpsilonClosures,
    dfa::{Dfa, DfaState},
    nfa::{Nfa, State, StateId},
    BuildError, BuildResult,
};

/// The configuration used by a [`Determinizer`].
#[derive(Clone, Debug, Default)]
pub struct Config {
    state_limit: Option<usize>,
    record_members: bool,
}

impl Config {
    /// Return a new default configuration.
    pub fn new() -> Config {
        Config::default()
    }

    /// Limit the number of DFA states that may be discovered.
    ///
    /// Subset construction can produce exponentially many states. When a
    /// limit is set and exceeded, determinization fails with
    /// [`BuildError::TooManyStates`]. There is no limit by default.
    ///
    /// The start state is always created and is not checked against the
    /// limit, so `Some(0)` still admits a DFA with a single state.
    pub fn state_limit(mut self, limit: Option<usize>) -> Config {
        self.state_limit = limit;
        self
    }

    /// Keep the NFA member set of every DFA state, available through
    /// [`DfaState::members`]. Disabled by default.
    pub fn record_members(mut self, yes: bool) -> Config {
        self.record_members = yes;
        self
    }

    /// The configured state limit, if any.
    pub fn get_state_limit(&self) -> Option<usize> {
        self.state_limit
    }

    /// Whether member sets are recorded.
    pub fn get_record_members(&self) -> bool {
        self.record_members
    }
}

/// Converts NFAs into equivalent DFAs.
///
/// DFA states are discovered lazily in breadth first order starting from the
/// epsilon closure of the NFA start state, so only reachable subsets are ever
/// materialized.
#[derive(Clone, Debug, Default)]
pub struct Determinizer {
    config: Config,
}

impl Determinizer {
    /// Create a new determinizer with the default configuration.
    pub fn new() -> Determinizer {
        Determinizer::default()
    }

    /// Apply the given configuration.
    pub fn configure(mut self, config: Config) -> Determinizer {
        self.config = config;
        self
    }

    /// Convert `nfa` into a DFA.
    ///
    /// Fails if the NFA contains an epsilon cycle or if the configured state
    /// limit is exceeded. An NFA for the empty language yields a single
    /// non-accepting state without transitions.
    pub fn determinize(&self, nfa: &Nfa) -> BuildResult<Dfa> {
        let (start, end) = match (nfa.start(), nfa.end()) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                debug!("empty language, emitting a single dead state");
                return Ok(Dfa::new(vec![DfaState::new(false, vec![], None)]));
            }
        };
        let closures = nfa.epsilon_closures()?;
        // Member sets of the DFA states discovered so far, indexed by DFA
        // state ID in discovery order.
        let mut subsets: IndexSet<BTreeSet<StateId>> = IndexSet::new();
        let mut queue = VecDeque::new();
        let mut transitions: Vec<Vec<(u8, StateId)>> = Vec::new();

        queue.push_back(subsets.insert_full(closures.get(start).clone()).0);
        while let Some(current) = queue.pop_front() {
            let members = match subsets.get_index(current) {
                Some(members) => members,
                None => break,
            };
            let mut row = Vec::new();
            for (byte, candidate) in step(nfa, &closures, members) {
                let (next, is_new) = subsets.insert_full(candidate);
                if is_new {
                    if let Some(limit) = self.config.state_limit {
                        if subsets.len() > limit {
                            return Err(BuildError::TooManyStates { limit });
                        }
                    }
                    trace!("DFA state {} discovered from {} on byte {}", next, current, byte);
                    queue.push_back(next);
                }
                row.push((byte, next));
            }
            // States are dequeued in the order they were interned.
            debug_assert_eq!(transitions.len(), current);
            transitions.push(row);
        }

        let states = subsets
            .into_iter()
            .zip(transitions)
            .map(|(members, row)| {
                let accepting = members.contains(&end);
                let members = if self.config.record_members {
                    Some(members.into_iter().collect::<Vec<_>>().into_boxed_slice())
                } else {
                    None
                };
                DfaState::new(accepting, row, members)
            })
            .collect::<Vec<_>>();
        debug!("determinized {} NFA states into {} DFA states", nfa.len(), states.len());
        Ok(Dfa::new(states))
    }
}

/// For every byte consumed by some member of `members`, the union of the
/// closures of the states reached on it.
fn step(
    nfa: &Nfa,
    closures: &EpsilonClosures,
    members: &BTreeSet<StateId>,
) -> BTreeMap<u8, BTreeSet<StateId>> {
    let mut candidates: BTreeMap<u8, BTreeSet<StateId>> = BTreeMap::new();
    for &sid in members {
        if let Some(&State::Byte { byte, next }) = nfa.state(sid) {
            candidates.entry(byte).or_default().extend(closures.get(next).iter().copied());
        }
    }
    candidates
}
