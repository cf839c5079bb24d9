//! A character tokenizer with push-back, shared by the WKT parser and the world file reader.
//!
//! Positions are character offsets into the input.

use crate::GeometryError;
use std::str::Chars;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
	/// Starts with a letter or `_` and continues with letters, digits, `_`, `.` or `-`.
	Word(String),
	/// Digits with at most one `.` and an optional leading `-`. `text` is the literal input.
	Number { value: f64, text: String },
	/// Text between double quotes.
	Quoted(String),
	Char(char),
	Eof,
}

pub struct Tokenizer<'a> {
	chars: Chars<'a>,
	peeked: Option<char>,
	position: usize,
	token_start: usize,
	pushed_back: Option<(Token, usize)>,
}

impl<'a> Tokenizer<'a> {
	pub fn new(text: &'a str) -> Self {
		let mut chars = text.chars();
		let peeked = chars.next();
		Tokenizer {
			chars,
			peeked,
			position: 0,
			token_start: 0,
			pushed_back: None,
		}
	}

	fn peek(&self) -> Option<char> {
		self.peeked
	}

	fn peek_second(&self) -> Option<char> {
		self.chars.clone().next()
	}

	fn advance(&mut self) {
		if self.peeked.is_some() {
			self.peeked = self.chars.next();
			self.position += 1;
		}
	}

	fn consume(&mut self) -> Option<char> {
		let current = self.peeked;
		self.advance();
		current
	}

	fn skip_whitespace(&mut self) {
		while let Some(c) = self.peek() {
			if c > ' ' {
				break;
			}
			self.advance();
		}
	}

	/// Offset of the first character of the last returned token.
	pub fn token_start(&self) -> usize {
		self.token_start
	}

	/// Offset of the first character after the last returned token.
	pub fn position(&self) -> usize {
		self.position
	}

	/// Returns the last token again on the next call to [`Tokenizer::next_token`].
	pub fn push_back(&mut self, token: Token) {
		self.pushed_back = Some((token, self.token_start));
	}

	pub fn next_token(&mut self) -> Token {
		if let Some((token, start)) = self.pushed_back.take() {
			self.token_start = start;
			return token;
		}

		self.skip_whitespace();
		self.token_start = self.position;

		let Some(c) = self.peek() else {
			return Token::Eof;
		};

		if c.is_ascii_alphabetic() || c == '_' {
			return Token::Word(self.read_word());
		}

		if c.is_ascii_digit() || c == '.' || (c == '-' && self.peek_second().is_some_and(|n| n.is_ascii_digit() || n == '.')) {
			return self.read_number();
		}

		if c == '"' {
			self.advance();
			let mut text = String::new();
			while let Some(c) = self.consume() {
				if c == '"' {
					break;
				}
				text.push(c);
			}
			return Token::Quoted(text);
		}

		self.advance();
		Token::Char(c)
	}

	fn read_word(&mut self) -> String {
		let mut word = String::new();
		while let Some(c) = self.peek() {
			if !(c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-') {
				break;
			}
			word.push(c);
			self.advance();
		}
		word
	}

	fn read_number(&mut self) -> Token {
		let mut text = String::new();
		if self.peek() == Some('-') {
			text.push('-');
			self.advance();
		}
		let mut seen_dot = false;
		while let Some(c) = self.peek() {
			if c == '.' && !seen_dot {
				seen_dot = true;
			} else if !c.is_ascii_digit() {
				break;
			}
			text.push(c);
			self.advance();
		}
		// a lone "." or "-." reads as zero
		let value = text.parse::<f64>().unwrap_or(0.0);
		Token::Number { value, text }
	}

	/// Reads a number. A word starting with `e` or `E` that directly follows the number is joined
	/// with it and the result is parsed again, so `5e1` reads as 50.
	///
	/// Returns `None` if the next token is not a number, the joined text is not a valid number, or
	/// the value is not finite.
	/// Either way [`Tokenizer::token_start`] points at the offending token afterwards.
	pub fn next_value(&mut self) -> Option<f64> {
		let Token::Number { value, text } = self.next_token() else {
			return None;
		};
		let start = self.token_start;
		let end = self.position;

		match self.next_token() {
			Token::Word(word) if self.token_start == end && word.starts_with(['e', 'E']) => {
				self.token_start = start;
				format!("{text}{word}").parse::<f64>().ok().filter(|v| v.is_finite())
			}
			token => {
				self.push_back(token);
				self.token_start = start;
				Some(value).filter(|v| v.is_finite())
			}
		}
	}

	/// Builds a parse error located at the start of the last token.
	pub fn error(&self, message: &str) -> GeometryError {
		GeometryError::parse(message, self.token_start)
	}
}
