use std::fmt::Display;
use std::ops::Not;

/// Result of a topological predicate.
///
/// `Unknown` is returned when an operand is missing; it is never produced by comparing two
/// well-formed geometries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ternary {
	True,
	False,
	Unknown,
}

impl Ternary {
	pub fn is_true(self) -> bool {
		self == Ternary::True
	}

	pub fn is_false(self) -> bool {
		self == Ternary::False
	}

	pub fn is_unknown(self) -> bool {
		self == Ternary::Unknown
	}
}

impl From<bool> for Ternary {
	fn from(value: bool) -> Self {
		if value { Ternary::True } else { Ternary::False }
	}
}

impl Not for Ternary {
	type Output = Ternary;

	fn not(self) -> Ternary {
		match self {
			Ternary::True => Ternary::False,
			Ternary::False => Ternary::True,
			Ternary::Unknown => Ternary::Unknown,
		}
	}
}

impl Display for Ternary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Ternary::True => "TRUE",
			Ternary::False => "FALSE",
			Ternary::Unknown => "UNKNOWN",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Ternary::True, Ternary::False)]
	#[case(Ternary::False, Ternary::True)]
	#[case(Ternary::Unknown, Ternary::Unknown)]
	fn negation(#[case] input: Ternary, #[case] expected: Ternary) {
		assert_eq!(!input, expected);
	}

	#[test]
	fn from_bool_and_display() {
		assert_eq!(Ternary::from(true), Ternary::True);
		assert_eq!(Ternary::from(false), Ternary::False);
		assert_eq!(Ternary::Unknown.to_string(), "UNKNOWN");
		assert!(Ternary::True.is_true());
		assert!(Ternary::False.is_false());
		assert!(Ternary::Unknown.is_unknown());
	}
}
