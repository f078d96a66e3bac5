use std::fmt;

use crate::{
    closure::EpsilonClosures, determinize::Determinizer, dfa::Dfa, BuildError, BuildResult,
};

/// A state ID in the NFA
pub type StateId = usize;

/// A single state of a Thompson NFA.
///
/// Every state has at most two outgoing edges. A state that consumes a byte
/// has exactly one; epsilon states have one (`Epsilon`) or two (`Split`).
/// The exit state of every fragment is `Unassigned` until a combinator links
/// it to something else.
#[derive(Clone, PartialEq, Eq)]
pub enum State {
    /// No transition has been assigned yet.
    Unassigned,
    /// Consume `byte` and move to `next`.
    Byte { byte: u8, next: StateId },
    /// Move to `next` without consuming input.
    Epsilon { next: StateId },
    /// Move to both `alt1` and `alt2` without consuming input.
    Split { alt1: StateId, alt2: StateId },
}

impl State {
    /// Returns true if this state only has epsilon transitions.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, State::Epsilon { .. } | State::Split { .. })
    }

    /// The epsilon targets of this state, in order.
    pub fn epsilon_targets(&self) -> [Option<StateId>; 2] {
        match *self {
            State::Epsilon { next } => [Some(next), None],
            State::Split { alt1, alt2 } => [Some(alt1), Some(alt2)],
            State::Unassigned | State::Byte { .. } => [None, None],
        }
    }

    /// Every target of this state, epsilon or not.
    fn targets(&self) -> impl Iterator<Item = StateId> {
        let targets = match *self {
            State::Byte { next, .. } => [Some(next), None],
            _ => self.epsilon_targets(),
        };
        targets.into_iter().flatten()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            State::Unassigned => write!(f, "unassigned"),
            State::Byte { byte, next } => write!(f, "{:?} -> {}", DebugByte(byte), next),
            State::Epsilon { next } => write!(f, "eps -> {}", next),
            State::Split { alt1, alt2 } => write!(f, "split -> {}, {}", alt1, alt2),
        }
    }
}

/// A single-entry, single-exit piece of an NFA under construction.
///
/// Fragments are handed out by a [`Builder`] and consumed by its
/// combinators. They are neither `Copy` nor `Clone`; a combinator consumes
/// its operands because it may rewrite their exit states.
///
/// An empty `range` or `set_of` produces the empty fragment, which has no
/// states at all. It denotes the empty language when frozen with
/// [`Builder::build`], but every combinator rejects it with
/// [`BuildError::EmptyFragment`].
#[derive(Debug, PartialEq, Eq)]
pub struct Fragment {
    ends: Option<(StateId, StateId)>,
}

impl Fragment {
    /// The fragment that matches nothing.
    pub const fn empty() -> Fragment {
        Fragment { ends: None }
    }

    fn new(start: StateId, end: StateId) -> Fragment {
        Fragment { ends: Some((start, end)) }
    }

    /// The entry state, or `None` for the empty fragment.
    pub fn start(&self) -> Option<StateId> {
        self.ends.map(|(start, _)| start)
    }

    /// The exit state, or `None` for the empty fragment.
    pub fn end(&self) -> Option<StateId> {
        self.ends.map(|(_, end)| end)
    }

    /// Returns true if this is the empty fragment.
    pub fn is_empty(&self) -> bool {
        self.ends.is_none()
    }
}

/// Composes NFA fragments in an append-only state arena.
///
/// Each combinator consumes one or two fragments and returns exactly one new
/// fragment. When the pattern is complete, [`Builder::build`] freezes the
/// arena together with the fragment standing for the whole pattern.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    states: Vec<State>,
}

impl Builder {
    /// Create a new builder with an empty arena.
    pub fn new() -> Builder {
        Builder::default()
    }

    /// The number of states appended so far.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if no state has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Look up a state appended by this builder.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    /// A fragment matching exactly `byte`.
    pub fn literal(&mut self, byte: u8) -> Fragment {
        let (start, end) = self.literal_ends(byte);
        Fragment::new(start, end)
    }

    /// A fragment matching `first` followed by `second`.
    ///
    /// The exit of `first` becomes an epsilon transition into the entry of
    /// `second`; no state is appended.
    pub fn concat(&mut self, first: Fragment, second: Fragment) -> BuildResult<Fragment> {
        let (start, mid) = self.ends(&first)?;
        let (next, end) = self.ends(&second)?;
        self.states[mid] = State::Epsilon { next };
        Ok(Fragment::new(start, end))
    }

    /// A fragment matching either `first` or `second`.
    pub fn alternate(&mut self, first: Fragment, second: Fragment) -> BuildResult<Fragment> {
        let first = self.ends(&first)?;
        let second = self.ends(&second)?;
        let (start, end) = self.alternate_ends(first, second);
        Ok(Fragment::new(start, end))
    }

    /// A fragment matching zero or more repetitions of `inner`.
    ///
    /// If `inner` can match the empty string, the repeat path forms an
    /// epsilon cycle and converting the finished automaton fails with
    /// [`BuildError::EpsilonCycle`].
    pub fn star(&mut self, inner: Fragment) -> BuildResult<Fragment> {
        let (start, end) = self.ends(&inner)?;
        let entry = self.states.len();
        let exit = entry + 1;
        self.states.push(State::Split { alt1: start, alt2: exit });
        self.states.push(State::Unassigned);
        self.states[end] = State::Epsilon { next: entry };
        trace!("star: entry {} loops through {}..{}, exits at {}", entry, start, end, exit);
        Ok(Fragment::new(entry, exit))
    }

    /// A fragment matching `inner` or the empty string.
    ///
    /// The exit of `inner` is reused as the exit of the result.
    pub fn optional(&mut self, inner: Fragment) -> BuildResult<Fragment> {
        let (start, end) = self.ends(&inner)?;
        let entry = self.add(State::Split { alt1: start, alt2: end });
        Ok(Fragment::new(entry, end))
    }

    /// A fragment matching any byte in `lo..=hi`.
    ///
    /// Returns the empty fragment when `lo > hi`.
    pub fn range(&mut self, lo: u8, hi: u8) -> Fragment {
        if lo > hi {
            return Fragment::empty();
        }
        self.chain(lo..=hi)
    }

    /// A fragment matching any byte of `members`.
    ///
    /// Returns the empty fragment when `members` is empty.
    pub fn set_of(&mut self, members: &[u8]) -> Fragment {
        self.chain(members.iter().copied())
    }

    /// Freeze the arena into an [`Nfa`] whose overall fragment is `root`.
    ///
    /// Freezing the empty fragment yields an automaton for the empty
    /// language.
    pub fn build(self, root: Fragment) -> BuildResult<Nfa> {
        Nfa::from_parts(self.states, root.ends)
    }

    /// Alternates two fragments, treating the empty fragment as the empty
    /// language instead of an error.
    pub(crate) fn union(&mut self, first: Fragment, second: Fragment) -> Fragment {
        match (first.ends, second.ends) {
            (Some(a), Some(b)) => {
                let (start, end) = self.alternate_ends(a, b);
                Fragment::new(start, end)
            }
            (Some(_), None) => first,
            (None, _) => second,
        }
    }

    /// Alternates a literal for every byte of `members`, in order.
    pub(crate) fn chain<I: IntoIterator<Item = u8>>(&mut self, members: I) -> Fragment {
        let mut members = members.into_iter();
        let Some(first) = members.next() else {
            return Fragment::empty();
        };
        let mut ends = self.literal_ends(first);
        for byte in members {
            let next = self.literal_ends(byte);
            ends = self.alternate_ends(ends, next);
        }
        Fragment::new(ends.0, ends.1)
    }

    fn add(&mut self, state: State) -> StateId {
        let id = self.states.len();
        self.states.push(state);
        id
    }

    fn literal_ends(&mut self, byte: u8) -> (StateId, StateId) {
        let start = self.states.len();
        let end = start + 1;
        self.states.push(State::Byte { byte, next: end });
        self.states.push(State::Unassigned);
        (start, end)
    }

    fn alternate_ends(
        &mut self,
        (start1, end1): (StateId, StateId),
        (start2, end2): (StateId, StateId),
    ) -> (StateId, StateId) {
        let entry = self.add(State::Split { alt1: start1, alt2: start2 });
        let exit = self.add(State::Unassigned);
        self.states[end1] = State::Epsilon { next: exit };
        self.states[end2] = State::Epsilon { next: exit };
        (entry, exit)
    }

    /// The ends of a fragment about to be consumed by a combinator.
    fn ends(&self, fragment: &Fragment) -> BuildResult<(StateId, StateId)> {
        let (start, end) = fragment.ends.ok_or(BuildError::EmptyFragment)?;
        for id in [start, end] {
            if id >= self.states.len() {
                return Err(BuildError::InvalidState { state: id, target: id });
            }
        }
        Ok((start, end))
    }
}

/// A frozen Thompson NFA.
///
/// An `Nfa` owns its states and the (start, end) pair of the fragment that
/// represents the whole automaton. It has no mutating methods, so epsilon
/// closures and subset construction always see a stable arena.
#[derive(Clone)]
pub struct Nfa {
    states: Vec<State>,
    root: Option<(StateId, StateId)>,
}

impl Nfa {
    /// Freeze a hand-assembled arena whose overall fragment runs from
    /// `start` to `end`.
    ///
    /// Fails if any state, or the pair itself, refers outside the arena.
    /// Nothing else is checked: an arena containing epsilon cycles is
    /// accepted here and rejected when its closures are computed.
    pub fn new(states: Vec<State>, start: StateId, end: StateId) -> BuildResult<Nfa> {
        Nfa::from_parts(states, Some((start, end)))
    }

    fn from_parts(states: Vec<State>, root: Option<(StateId, StateId)>) -> BuildResult<Nfa> {
        let len = states.len();
        for (sid, state) in states.iter().enumerate() {
            if let Some(target) = state.targets().find(|&target| target >= len) {
                return Err(BuildError::InvalidState { state: sid, target });
            }
        }
        if let Some((start, end)) = root {
            if let Some(id) = [start, end].into_iter().find(|&id| id >= len) {
                return Err(BuildError::InvalidState { state: id, target: id });
            }
        }
        debug!("froze NFA with {} states, root {:?}", len, root);
        Ok(Nfa { states, root })
    }

    /// The number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if the arena holds no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Look up a state.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    /// All states, indexed by [`StateId`].
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The entry of the overall fragment, or `None` for the empty language.
    pub fn start(&self) -> Option<StateId> {
        self.root.map(|(start, _)| start)
    }

    /// The exit of the overall fragment, or `None` for the empty language.
    pub fn end(&self) -> Option<StateId> {
        self.root.map(|(_, end)| end)
    }

    /// Compute the epsilon closure of every state.
    pub fn epsilon_closures(&self) -> BuildResult<EpsilonClosures> {
        EpsilonClosures::new(&self.states)
    }

    /// Convert this NFA into an equivalent DFA using the default
    /// [`Config`](crate::Config).
    pub fn to_dfa(&self) -> BuildResult<Dfa> {
        Determinizer::new().determinize(self)
    }
}

impl fmt::Debug for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "thompson_dfa::Nfa(")?;
        for (sid, state) in self.states.iter().enumerate() {
            let marker = match (self.start() == Some(sid), self.end() == Some(sid)) {
                (true, true) => "^$",
                (true, false) => "^ ",
                (false, true) => " $",
                (false, false) => "  ",
            };
            writeln!(f, "{}{:06}: {:?}", marker, sid, state)?;
        }
        writeln!(f, ")")
    }
}

/// Formats a byte as a quoted, escaped ASCII literal.
pub(crate) struct DebugByte(pub(crate) u8);

impl fmt::Debug for DebugByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", std::ascii::escape_default(self.0))
    }
}
