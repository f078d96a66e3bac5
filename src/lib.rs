//! Thompson NFA construction and subset-construction DFA conversion.
//!
//! Patterns are not parsed from text. Instead, a caller composes automaton
//! fragments directly on an [`nfa::Builder`] using the regular-expression
//! algebra (literal, concatenation, alternation, star, optional, ranges, sets
//! and the POSIX-style ASCII classes), freezes the result into an [`Nfa`] and
//! converts it into a [`Dfa`]:
//!
//! ```
//! use thompson_dfa::nfa::Builder;
//!
//! let mut builder = Builder::new();
//! let a = builder.literal(b'a');
//! let b = builder.literal(b'b');
//! let ab = builder.concat(a, b)?;
//! let nfa = builder.build(ab)?;
//! let dfa = nfa.to_dfa()?;
//!
//! let mut sid = dfa.start_state();
//! for &byte in b"ab" {
//!     sid = dfa.next_state(sid, byte).expect("transition exists");
//! }
//! assert!(dfa.is_accepting(sid));
//! # Ok::<(), thompson_dfa::BuildError>(())
//! ```
//!
//! The alphabet is a single byte. There is no minimization and no matching
//! engine; the [`Dfa`] exposes the per-state accepting flag and the
//! byte-to-state lookup that a matcher needs.
//!
//! # Crate features
//!
//! * **logging** - Enables the `log` crate to emit messages while fragments
//!   are frozen, closures are computed and DFA states are discovered.

#[macro_use]
mod macros;

pub mod class;
pub mod closure;
pub mod determinize;
pub mod dfa;
pub mod nfa;

pub use class::Class;
pub use closure::EpsilonClosures;
pub use determinize::{Config, Determinizer};
pub use dfa::{Dfa, DfaState};
pub use nfa::{Builder, Fragment, Nfa, State, StateId};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// The result of building or converting an automaton.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can occur while composing, freezing or converting automata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A combinator was given the empty fragment produced by an empty
    /// `range` or `set_of`.
    EmptyFragment,
    /// The epsilon closure traversal grew deeper than the number of states,
    /// which only happens when the automaton contains an epsilon cycle.
    EpsilonCycle {
        /// The state on top of the traversal stack when the cycle was found.
        state: StateId,
    },
    /// A state or the root fragment refers to an index outside the arena.
    InvalidState {
        /// The state holding the reference. Equal to `target` when the root
        /// fragment itself is out of range.
        state: StateId,
        /// The offending index.
        target: StateId,
    },
    /// Subset construction discovered more DFA states than allowed by
    /// [`Config::state_limit`].
    TooManyStates {
        /// The configured limit.
        limit: usize,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::EmptyFragment => {
                write!(f, "cannot compose the empty fragment")
            }
            BuildError::EpsilonCycle { state } => {
                write!(f, "malformed automaton (epsilon cycle through state {})", state)
            }
            BuildError::InvalidState { state, target } if state == target => {
                write!(f, "fragment refers to state {} outside the automaton", target)
            }
            BuildError::InvalidState { state, target } => {
                write!(f, "state {} refers to state {} outside the automaton", state, target)
            }
            BuildError::TooManyStates { limit } => {
                write!(f, "DFA exceeded the limit of {} states", limit)
            }
        }
    }
}

impl std::error::Error for BuildError {}
