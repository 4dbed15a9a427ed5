use thiserror::Error;

/// Errors raised while counting words
#[derive(Debug, Error)]
pub enum Error {
	/// Reading input or writing the ranking failed
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// The word length limit leaves no room for a single character
	#[error("Word length limit too small: {max_word_len} (must be >= 2)")]
	WordLimitTooSmall {
		/// The rejected limit
		max_word_len: usize,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
