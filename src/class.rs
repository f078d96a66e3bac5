//! POSIX-style ASCII character classes built from the fragment algebra.

use crate::nfa::{Builder, Fragment};

const DIGITS: &[u8] = b"0123456789";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BLANK: &[u8] = b" \t";
const HEX_LETTERS: &[u8] = b"ABCDEFabcdef";
const PUNCT: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A named ASCII class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Class {
    Alnum,
    Alpha,
    Blank,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Upper,
    XDigit,
}

impl Class {
    /// Every class, in alphabetical order.
    pub const ALL: [Class; 10] = [
        Class::Alnum,
        Class::Alpha,
        Class::Blank,
        Class::Digit,
        Class::Graph,
        Class::Lower,
        Class::Print,
        Class::Punct,
        Class::Upper,
        Class::XDigit,
    ];

    /// The POSIX name of this class, as written inside `[: :]`.
    pub fn name(&self) -> &'static str {
        match *self {
            Class::Alnum => "alnum",
            Class::Alpha => "alpha",
            Class::Blank => "blank",
            Class::Digit => "digit",
            Class::Graph => "graph",
            Class::Lower => "lower",
            Class::Print => "print",
            Class::Punct => "punct",
            Class::Upper => "upper",
            Class::XDigit => "xdigit",
        }
    }

    /// Look up a class by its POSIX name.
    pub fn from_name(name: &str) -> Option<Class> {
        Class::ALL.into_iter().find(|class| class.name() == name)
    }
}

/// Class constructors. None of these can return the empty fragment.
impl Builder {
    /// A fragment matching any byte of `class`.
    pub fn class(&mut self, class: Class) -> Fragment {
        match class {
            Class::Alnum => self.alnum(),
            Class::Alpha => self.alpha(),
            Class::Blank => self.blank(),
            Class::Digit => self.digit(),
            Class::Graph => self.graph(),
            Class::Lower => self.lower(),
            Class::Print => self.print(),
            Class::Punct => self.punct(),
            Class::Upper => self.upper(),
            Class::XDigit => self.xdigit(),
        }
    }

    /// `[[:alnum:]]`: letters and digits.
    pub fn alnum(&mut self) -> Fragment {
        let alpha = self.alpha();
        let digit = self.digit();
        self.union(alpha, digit)
    }

    /// `[[:alpha:]]`: ASCII letters.
    pub fn alpha(&mut self) -> Fragment {
        let lower = self.lower();
        let upper = self.upper();
        self.union(lower, upper)
    }

    /// `[[:blank:]]`: space and tab.
    pub fn blank(&mut self) -> Fragment {
        self.chain(BLANK.iter().copied())
    }

    /// `[[:digit:]]`
    pub fn digit(&mut self) -> Fragment {
        self.chain(DIGITS.iter().copied())
    }

    /// `[[:graph:]]`: visible characters, i.e. letters, digits and
    /// punctuation.
    pub fn graph(&mut self) -> Fragment {
        let alnum = self.alnum();
        let punct = self.punct();
        self.union(alnum, punct)
    }

    /// `[[:lower:]]`
    pub fn lower(&mut self) -> Fragment {
        self.chain(LOWER.iter().copied())
    }

    /// `[[:print:]]`: visible characters and space.
    pub fn print(&mut self) -> Fragment {
        let graph = self.graph();
        let space = self.literal(b' ');
        self.union(graph, space)
    }

    /// `[[:punct:]]`: all 32 ASCII punctuation bytes, `~` included.
    pub fn punct(&mut self) -> Fragment {
        self.chain(PUNCT.iter().copied())
    }

    /// `[[:upper:]]`
    pub fn upper(&mut self) -> Fragment {
        self.chain(UPPER.iter().copied())
    }

    /// `[[:xdigit:]]`: decimal digits and `A-F` in either case.
    pub fn xdigit(&mut self) -> Fragment {
        let digit = self.digit();
        let letters = self.chain(HEX_LETTERS.iter().copied());
        self.union(digit, letters)
    }
}
