//! Epsilon closures of every state of a frozen NFA.

use std::collections::BTreeSet;

use crate::{
    nfa::{State, StateId},
    BuildError, BuildResult,
};

/// The epsilon closure of every state of an NFA, indexed by [`StateId`].
///
/// The closure of a state is the set of states reachable from it through
/// zero or more epsilon transitions, so it always contains the state itself.
#[derive(Clone, Debug)]
pub struct EpsilonClosures {
    sets: Vec<BTreeSet<StateId>>,
}

impl EpsilonClosures {
    /// Compute the closures of `states`.
    ///
    /// The traversal is an explicit-stack depth first search. A state is
    /// resolved once all of its epsilon targets are resolved, at which point
    /// its closure is itself plus the union of their closures. Resolved
    /// states are never visited again.
    ///
    /// Along an epsilon cycle no state can ever be resolved, so the stack
    /// keeps growing. As soon as it holds more entries than there are states
    /// the computation stops with [`BuildError::EpsilonCycle`].
    pub fn new(states: &[State]) -> BuildResult<EpsilonClosures> {
        let mut sets = vec![BTreeSet::new(); states.len()];
        let mut done = vec![false; states.len()];
        let mut stack: Vec<StateId> = Vec::new();

        for root in 0..states.len() {
            if done[root] {
                continue;
            }
            stack.push(root);
            while let Some(&sid) = stack.last() {
                if stack.len() > states.len() {
                    debug!("epsilon cycle detected at state {}", sid);
                    return Err(BuildError::EpsilonCycle { state: sid });
                }
                if done[sid] {
                    stack.pop();
                    continue;
                }
                let targets = states[sid].epsilon_targets();
                if let Some(pending) = targets.iter().flatten().find(|&&t| !done[t]) {
                    stack.push(*pending);
                    continue;
                }
                let mut closure = BTreeSet::new();
                closure.insert(sid);
                for &target in targets.iter().flatten() {
                    closure.extend(sets[target].iter().copied());
                }
                sets[sid] = closure;
                done[sid] = true;
                stack.pop();
            }
        }
        debug!("computed epsilon closures for {} states", sets.len());
        Ok(EpsilonClosures { sets })
    }

    /// The closure of `sid`.
    ///
    /// # Panics
    ///
    /// Panics if `sid` is not a state of the NFA these closures were
    /// computed for.
    pub fn get(&self, sid: StateId) -> &BTreeSet<StateId> {
        &self.sets[sid]
    }

    /// The number of states covered.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if the NFA had no states.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
