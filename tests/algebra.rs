use thompson_dfa::BuildError;

use crate::util::{accepts, compile, short_inputs};

#[test]
fn literal_accepts_only_itself() -> anyhow::Result<()> {
    for c in 0..=u8::MAX {
        let dfa = compile(|b| Ok(b.literal(c)))?;
        for input in short_inputs() {
            assert_eq!(accepts(&dfa, &input), input == [c], "literal {:?} on {:?}", c, input);
        }
        assert!(!accepts(&dfa, &[c, c]));
    }
    Ok(())
}

#[test]
fn concat_accepts_sequence() -> anyhow::Result<()> {
    let dfa = compile(|b| {
        let a = b.literal(b'a');
        let bb = b.literal(b'b');
        Ok(b.concat(a, bb)?)
    })?;

    assert!(accepts(&dfa, b"ab"));
    for input in [&b""[..], b"a", b"b", b"ba", b"abb", b"aab"] {
        assert!(!accepts(&dfa, input), "{:?}", input);
    }
    Ok(())
}

#[test]
fn alternate_accepts_either() -> anyhow::Result<()> {
    let dfa = compile(|b| {
        let a = b.literal(b'a');
        let bb = b.literal(b'b');
        Ok(b.alternate(a, bb)?)
    })?;

    assert!(accepts(&dfa, b"a"));
    assert!(accepts(&dfa, b"b"));
    for input in [&b""[..], b"ab", b"c", b"ba"] {
        assert!(!accepts(&dfa, input), "{:?}", input);
    }
    Ok(())
}

#[test]
fn star_accepts_repetitions() -> anyhow::Result<()> {
    let dfa = compile(|b| {
        let a = b.literal(b'a');
        Ok(b.star(a)?)
    })?;

    for input in [&b""[..], b"a", b"aa", b"aaaa", b"aaaaaaaaaaaaaaaa"] {
        assert!(accepts(&dfa, input), "{:?}", input);
    }
    for input in [&b"b"[..], b"ab", b"ba", b"aab"] {
        assert!(!accepts(&dfa, input), "{:?}", input);
    }
    Ok(())
}

#[test]
fn optional_accepts_zero_or_one() -> anyhow::Result<()> {
    let dfa = compile(|b| {
        let a = b.literal(b'a');
        Ok(b.optional(a)?)
    })?;

    assert!(accepts(&dfa, b""));
    assert!(accepts(&dfa, b"a"));
    assert!(!accepts(&dfa, b"aa"));
    assert!(!accepts(&dfa, b"b"));
    Ok(())
}

#[test]
fn range_accepts_bounds_inclusive() -> anyhow::Result<()> {
    let dfa = compile(|b| Ok(b.range(b'a', b'c')))?;

    for input in short_inputs() {
        let expected = matches!(input[..], [b'a'..=b'c']);
        assert_eq!(accepts(&dfa, &input), expected, "{:?}", input);
    }
    assert!(!accepts(&dfa, b"ab"));
    Ok(())
}

#[test]
fn reversed_range_accepts_nothing() -> anyhow::Result<()> {
    let dfa = compile(|b| Ok(b.range(b'c', b'a')))?;

    assert_eq!(dfa.len(), 1);
    for input in short_inputs() {
        assert!(!accepts(&dfa, &input), "{:?}", input);
    }
    Ok(())
}

#[test]
fn degenerate_range_is_a_literal() -> anyhow::Result<()> {
    let dfa = compile(|b| Ok(b.range(b'm', b'm')))?;

    for input in short_inputs() {
        assert_eq!(accepts(&dfa, &input), input == b"m", "{:?}", input);
    }
    Ok(())
}

#[test]
fn set_of_accepts_members() -> anyhow::Result<()> {
    let dfa = compile(|b| Ok(b.set_of(b"xz+")))?;

    for input in short_inputs() {
        let expected = matches!(input[..], [b'x'] | [b'z'] | [b'+']);
        assert_eq!(accepts(&dfa, &input), expected, "{:?}", input);
    }
    Ok(())
}

#[test]
fn set_of_with_duplicates() -> anyhow::Result<()> {
    let dfa = compile(|b| Ok(b.set_of(b"aaa")))?;

    assert!(accepts(&dfa, b"a"));
    assert!(!accepts(&dfa, b"aa"));
    assert_eq!(dfa.state(0).unwrap().transitions().count(), 1);
    Ok(())
}

#[test]
fn empty_set_accepts_nothing() -> anyhow::Result<()> {
    let dfa = compile(|b| Ok(b.set_of(&[])))?;

    assert!(!accepts(&dfa, b""));
    assert!(!accepts(&dfa, b"a"));
    Ok(())
}

#[test]
fn combinators_reject_empty_fragment() {
    let result = compile(|b| {
        let empty = b.range(b'z', b'a');
        let x = b.literal(b'x');
        Ok(b.concat(x, empty)?)
    });
    let err = result.unwrap_err();

    assert_eq!(err.downcast_ref::<BuildError>(), Some(&BuildError::EmptyFragment));
}

#[test]
fn nested_composition() -> anyhow::Result<()> {
    // (ab|c)*d?
    let dfa = compile(|b| {
        let a = b.literal(b'a');
        let bb = b.literal(b'b');
        let ab = b.concat(a, bb)?;
        let c = b.literal(b'c');
        let alt = b.alternate(ab, c)?;
        let star = b.star(alt)?;
        let d = b.literal(b'd');
        let opt = b.optional(d)?;
        Ok(b.concat(star, opt)?)
    })?;

    for input in [&b""[..], b"d", b"ab", b"c", b"abcab", b"ccd", b"abd"] {
        assert!(accepts(&dfa, input), "{:?}", input);
    }
    for input in [&b"a"[..], b"b", b"dd", b"da", b"abab d", b"acb"] {
        assert!(!accepts(&dfa, input), "{:?}", input);
    }
    Ok(())
}

#[test]
fn starring_nullable_fragment_is_a_cycle() {
    let result = compile(|b| {
        let a = b.literal(b'a');
        let opt = b.optional(a)?;
        Ok(b.star(opt)?)
    });
    let err = result.unwrap_err();

    assert!(matches!(err.downcast_ref::<BuildError>(), Some(BuildError::EpsilonCycle { .. })));
}
