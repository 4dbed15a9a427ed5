use std::io::{BufRead, ErrorKind};

use tracing::warn;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// Run of alphanumerics starting with a letter, truncated to the length limit
	Word(String),
	/// A single byte that cannot start a word
	Symbol(u8),
}

/// Pull-based word stream over a byte reader.
///
/// Characters are classified the way the C locale does: ASCII letters and
/// digits only, and `\v` counts as whitespace.
pub struct Tokenizer<R> {
	reader: R,
	pushback: Vec<u8>,
	pushback_capacity: usize,
	max_word_len: usize,
}

#[inline]
fn is_space(byte: u8) -> bool {
	byte.is_ascii_whitespace() || byte == 0x0b
}

impl<R: BufRead> Tokenizer<R> {
	/// `max_word_len` includes room for a terminator, so words keep at most
	/// `max_word_len - 1` characters.
	#[inline]
	pub fn new(reader: R, max_word_len: usize, pushback_capacity: usize) -> Self {
		Self {
			reader,
			pushback: Vec::with_capacity(pushback_capacity),
			pushback_capacity,
			max_word_len,
		}
	}

	pub fn next_token(&mut self) -> Result<Option<Token>> {
		let first = loop {
			match self.getch()? {
				Some(byte) if is_space(byte) => continue,
				Some(byte) => break byte,
				None => return Ok(None),
			}
		};

		if !first.is_ascii_alphabetic() {
			return Ok(Some(Token::Symbol(first)));
		}

		let mut word = String::with_capacity(self.max_word_len.saturating_sub(1));
		word.push(char::from(first));

		while word.len() + 1 < self.max_word_len {
			match self.getch()? {
				Some(byte) if byte.is_ascii_alphanumeric() => word.push(char::from(byte)),
				Some(byte) => {
					self.ungetch(byte);
					break;
				}
				None => break,
			}
		}

		Ok(Some(Token::Word(word)))
	}

	fn getch(&mut self) -> Result<Option<u8>> {
		if let Some(byte) = self.pushback.pop() {
			return Ok(Some(byte));
		}

		loop {
			let byte = match self.reader.fill_buf() {
				Ok(buf) => buf.first().copied(),
				Err(e) if e.kind() == ErrorKind::Interrupted => continue,
				Err(e) => return Err(e.into()),
			};

			if byte.is_some() {
				self.reader.consume(1);
			}

			return Ok(byte);
		}
	}

	fn ungetch(&mut self, byte: u8) {
		if self.pushback.len() >= self.pushback_capacity {
			warn!(capacity = self.pushback_capacity, byte, "pushback buffer full, dropping character");
		} else {
			self.pushback.push(byte);
		}
	}
}
