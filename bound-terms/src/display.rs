//! Implements [`fmt::Display`] for terms.
//!
//! Rendering is for humans and diagnostics only: atoms print bare or
//! single-quoted, floats always carry a fractional part, binaries print
//! as `hex{..}`, tuples as `(a, b)`, lists as `[a, b]`, and anything
//! unbound as `_`.

use crate::{Payload, Scalar, ScalarKind, Sequence, SequenceKind, Term};
use std::fmt;

fn is_unquoted_atom(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub(crate) fn write_atom_str(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    if s.is_empty() || !is_unquoted_atom(s) {
        let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
        write!(f, "'{}'", escaped)
    } else {
        f.write_str(s)
    }
}

pub(crate) fn write_real(f: &mut fmt::Formatter<'_>, r: f64) -> fmt::Result {
    if r.is_finite() && r.fract() == 0.0 {
        write!(f, "{:.1}", r)
    } else {
        write!(f, "{}", r)
    }
}

pub(crate) fn write_bin_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("hex{")?;
    for b in bytes {
        write!(f, "{:02X}", b)?;
    }
    f.write_str("}")
}

impl<K: ScalarKind> fmt::Display for Scalar<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Ok(v) => K::write_value(v, f),
            Err(_) => f.write_str("_"),
        }
    }
}

impl<K: SequenceKind> fmt::Display for Sequence<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_value() {
            return f.write_str("_");
        }
        let (open, close) = K::DELIMITERS;
        f.write_str(open)?;
        for (i, t) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{t}")?;
        }
        f.write_str(close)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Atom(x) => fmt::Display::fmt(x, f),
            Payload::Integer(x) => fmt::Display::fmt(x, f),
            Payload::Float(x) => fmt::Display::fmt(x, f),
            Payload::Binary(x) => fmt::Display::fmt(x, f),
            Payload::Tuple(x) => fmt::Display::fmt(x, f),
            Payload::List(x) => fmt::Display::fmt(x, f),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(p) => fmt::Display::fmt(p, f),
            None => f.write_str("_"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{list, tuple, Atom, Binary, Float, Integer, List, Term, Tuple};
    use std::fmt::Write;

    #[test]
    fn fmt_scalars() {
        assert_eq!(Term::atom("hello").to_string(), "hello");
        assert_eq!(Term::atom("Hello").to_string(), "'Hello'");
        assert_eq!(Term::atom("").to_string(), "''");
        assert_eq!(Term::atom("it's").to_string(), "'it\\'s'");
        assert_eq!(Term::atom("a\\b").to_string(), "'a\\\\b'");
        assert_eq!(Term::atom("x'\\").to_string(), "'x\\'\\\\'");
        assert_eq!(Term::int(-9001).to_string(), "-9001");
        assert_eq!(Term::float(2.0).to_string(), "2.0");
        assert_eq!(Term::float(2.5).to_string(), "2.5");
        assert_eq!(Term::float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Term::binary(vec![0xDEu8, 0xAD]).to_string(), "hex{DEAD}");
    }

    #[test]
    fn fmt_unbound() {
        assert_eq!(Term::new().to_string(), "_");
        assert_eq!(Atom::unbound().to_string(), "_");
        assert_eq!(Tuple::unbound().to_string(), "_");
        assert_eq!(Term::from(Float::unbound()).to_string(), "_");
    }

    #[test]
    fn fmt_sequences() {
        let t = tuple![
            Atom::new("point"),
            Integer::new(1),
            list![Float::new(2.0), Binary::unbound()],
            List::from_terms([]),
        ];
        assert_eq!(t.to_string(), "(point, 1, [2.0, _], [])");
        assert_eq!(tuple![].to_string(), "()");
    }

    #[test]
    fn fmt_write_into_string_buffer() {
        let t = Term::int(7);
        let mut buf = String::new();
        write!(&mut buf, "val={}", t).expect("formatting failed");
        assert_eq!(buf, "val=7");
    }
}
