use std::io::{BufRead, Write};

use tracing::debug;

mod error;
mod index;
mod rank;
mod tokenizer;

pub use error::{Error, Result};
pub use index::{FrequencyIndex, WordEntry};
pub use rank::{Iter, RankedIndex};
pub use tokenizer::{Token, Tokenizer};

/// Longest word kept, terminator included.
pub const MAX_WORD_LEN: usize = 100;
/// Characters the tokenizer can push back before dropping them.
pub const PUSHBACK_CAPACITY: usize = 100;

pub struct Config<'a> {
	pub max_word_len: usize,
	pub pushback_capacity: usize,
	#[cfg(feature = "progression")]
	pub bar_step: usize,
	#[cfg(feature = "progression")]
	pub progress_bar: bool,
	#[cfg(feature = "progression")]
	pub bar_config: progression::Config<'a>,
	#[cfg(not(feature = "progression"))]
	pub _phantom: std::marker::PhantomData<&'a ()>,
}

impl Default for Config<'_> {
	#[inline]
	fn default() -> Self {
		Self {
			max_word_len: MAX_WORD_LEN,
			pushback_capacity: PUSHBACK_CAPACITY,
			#[cfg(feature = "progression")]
			bar_step: 1000,
			#[cfg(feature = "progression")]
			progress_bar: true,
			#[cfg(feature = "progression")]
			bar_config: progression::Config::default(),
			#[cfg(not(feature = "progression"))]
			_phantom: std::marker::PhantomData,
		}
	}
}

impl Config<'_> {
	pub fn validate(&self) -> Result<()> {
		if self.max_word_len < 2 {
			return Err(Error::WordLimitTooSmall { max_word_len: self.max_word_len });
		}

		Ok(())
	}
}

pub struct WordCounter<'a> {
	config: Config<'a>,
}

impl<'a> WordCounter<'a> {
	#[inline]
	pub fn new(config: Config<'a>) -> Result<Self> {
		config.validate()?;
		Ok(Self { config })
	}

	#[inline]
	pub fn tokenizer<R: BufRead>(&self, reader: R) -> Tokenizer<R> {
		Tokenizer::new(reader, self.config.max_word_len, self.config.pushback_capacity)
	}

	/// Indexes every word of `reader`. Tokens that do not start with a letter
	/// are skipped.
	pub fn build<R: BufRead>(&self, reader: R) -> Result<FrequencyIndex> {
		let mut tokenizer = self.tokenizer(reader);
		let mut index = FrequencyIndex::new();

		while let Some(token) = tokenizer.next_token()? {
			if let Token::Word(word) = token {
				index.insert(&word);
			}
		}

		debug!(distinct = index.len(), total = index.total(), "index built");
		Ok(index)
	}

	pub fn rerank(&self, index: FrequencyIndex) -> RankedIndex {
		#[cfg(feature = "progression")]
		let bar = self.config.progress_bar.then(|| progression::Bar::new(index.len() as _, self.config.bar_config.clone()));
		#[cfg(feature = "progression")]
		let bar_step = self.config.bar_step.max(1);
		#[cfg(feature = "progression")]
		let mut pending = 0;

		let ranked = index.rerank_with(|_entry| {
			#[cfg(feature = "progression")]
			if let Some(bar) = &bar {
				pending += 1;

				if pending == bar_step {
					bar.inc(pending as _);
					pending = 0;
				}
			}
		});

		#[cfg(feature = "progression")]
		if let Some(bar) = &bar {
			bar.inc(pending as _);
		}

		debug!(entries = ranked.len(), "index reranked");
		ranked
	}

	#[inline]
	pub fn count<R: BufRead>(&self, reader: R) -> Result<RankedIndex> {
		let index = self.build(reader)?;
		Ok(self.rerank(index))
	}
}

impl Default for WordCounter<'_> {
	#[inline]
	fn default() -> Self {
		Self { config: Config::default() }
	}
}

/// Counts the words of `input` and writes them to `output`, most frequent first.
#[inline]
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, config: Config) -> Result<()> {
	let counter = WordCounter::new(config)?;
	counter.count(input)?.write_to(output)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn run_str(input: &str, config: Config) -> String {
		let mut output = Vec::new();
		run(input.as_bytes(), &mut output, config).unwrap();
		String::from_utf8(output).unwrap()
	}

	#[test]
	fn it_should_count_single_word() {
		assert_eq!(run_str("a", Config::default()), "   1 a\n");
	}

	#[test]
	fn it_should_skip_tokens_starting_with_digits() {
		assert_eq!(run_str("123 abc abc", Config::default()), "   2 abc\n");
	}

	#[test]
	fn it_should_print_nothing_for_empty_input() {
		assert_eq!(run_str("", Config::default()), "");
		assert_eq!(run_str(" \n 42 !? \n", Config::default()), "");
	}

	#[test]
	fn it_should_truncate_to_word_limit() {
		let config = Config { max_word_len: 4, ..Default::default() };
		let index = WordCounter::new(config).unwrap().build("abcdefgh abc".as_bytes()).unwrap();
		assert_eq!(index.get("abc"), Some(2));
		assert_eq!(index.get("abcdefgh"), None);
	}

	#[test]
	fn it_should_rank_by_frequency() {
		let input = "the cat and the dog and the bird";
		assert_eq!(run_str(input, Config::default()), "   3 the\n   2 and\n   1 bird\n   1 dog\n   1 cat\n");
	}

	#[test]
	fn it_should_reject_tiny_word_limit() {
		let config = Config { max_word_len: 1, ..Default::default() };
		assert!(matches!(WordCounter::new(config), Err(Error::WordLimitTooSmall { max_word_len: 1 })));
	}

	#[test]
	fn it_should_count_with_default_counter() {
		let ranked = WordCounter::default().count("x y x".as_bytes()).unwrap();
		let words: Vec<_> = ranked.iter().map(|e| (e.word(), e.count())).collect();
		assert_eq!(words, [("x", 2), ("y", 1)]);
	}
}
