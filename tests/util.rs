use thompson_dfa::{
    nfa::{Builder, Fragment},
    Dfa, Nfa,
};

/// Runs `dfa` over all of `input` from the start state.
pub fn accepts(dfa: &Dfa, input: &[u8]) -> bool {
    let mut sid = dfa.start_state();
    for &byte in input {
        match dfa.next_state(sid, byte) {
            Some(next) => sid = next,
            None => return false,
        }
    }
    dfa.is_accepting(sid)
}

/// Builds a fragment with `build`, freezes it and converts it.
pub fn compile<F>(build: F) -> anyhow::Result<Dfa>
where
    F: FnOnce(&mut Builder) -> anyhow::Result<Fragment>,
{
    Ok(freeze(build)?.to_dfa()?)
}

/// Builds a fragment with `build` and freezes it.
pub fn freeze<F>(build: F) -> anyhow::Result<Nfa>
where
    F: FnOnce(&mut Builder) -> anyhow::Result<Fragment>,
{
    let _ = env_logger::try_init();
    let mut builder = Builder::new();
    let root = build(&mut builder)?;
    Ok(builder.build(root)?)
}

/// Every input of length one over all bytes, plus the empty input.
pub fn short_inputs() -> impl Iterator<Item = Vec<u8>> {
    std::iter::once(vec![]).chain((0..=u8::MAX).map(|b| vec![b]))
}
