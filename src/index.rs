use std::cmp::Ordering;

use crate::rank::RankedIndex;

/// A distinct word and the number of times it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
	word: String,
	count: u64,
}

impl WordEntry {
	#[inline]
	fn new(word: &str) -> Self {
		Self { word: word.to_owned(), count: 1 }
	}

	#[inline]
	pub fn word(&self) -> &str {
		&self.word
	}

	#[inline]
	pub fn count(&self) -> u64 {
		self.count
	}
}

struct BuildNode {
	entry: WordEntry,
	less: Option<Box<BuildNode>>,
	greater: Option<Box<BuildNode>>,
}

impl BuildNode {
	#[inline]
	fn new(word: &str) -> Box<Self> {
		Box::new(Self { entry: WordEntry::new(word), less: None, greater: None })
	}
}

/// Unbalanced binary search tree keyed by byte order of the word.
///
/// Depth follows the order words arrive in, so sorted input degrades to a
/// list. Every walk over the tree uses an explicit stack.
#[derive(Default)]
pub struct FrequencyIndex {
	root: Option<Box<BuildNode>>,
	len: usize,
	total: u64,
}

enum Visit {
	Expand(Box<BuildNode>),
	Emit(WordEntry),
}

impl FrequencyIndex {
	#[inline]
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of distinct words.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Number of words inserted, repeats included.
	#[inline]
	pub fn total(&self) -> u64 {
		self.total
	}

	pub fn insert(&mut self, word: &str) {
		self.total += 1;
		let mut slot = &mut self.root;

		while let Some(node) = slot {
			match word.cmp(node.entry.word()) {
				Ordering::Equal => {
					node.entry.count += 1;
					return;
				}
				Ordering::Less => slot = &mut node.less,
				Ordering::Greater => slot = &mut node.greater,
			}
		}

		*slot = Some(BuildNode::new(word));
		self.len += 1;
	}

	pub fn get(&self, word: &str) -> Option<u64> {
		let mut node = self.root.as_deref();

		while let Some(n) = node {
			node = match word.cmp(n.entry.word()) {
				Ordering::Equal => return Some(n.entry.count),
				Ordering::Less => n.less.as_deref(),
				Ordering::Greater => n.greater.as_deref(),
			};
		}

		None
	}

	#[inline]
	pub fn rerank(self) -> RankedIndex {
		self.rerank_with(|_| {})
	}

	/// Moves every entry into a tree ordered by count.
	///
	/// Entries leave the build tree less subtree first, then greater subtree,
	/// then the node itself. That order decides how ties line up in the output
	/// and `visit` observes it.
	pub fn rerank_with<F: FnMut(&WordEntry)>(mut self, mut visit: F) -> RankedIndex {
		let mut ranked = RankedIndex::new();
		let mut stack: Vec<Visit> = self.root.take().map(Visit::Expand).into_iter().collect();

		while let Some(step) = stack.pop() {
			match step {
				Visit::Expand(node) => {
					let BuildNode { entry, less, greater } = *node;
					stack.push(Visit::Emit(entry));
					stack.extend(greater.map(Visit::Expand));
					stack.extend(less.map(Visit::Expand));
				}
				Visit::Emit(entry) => {
					visit(&entry);
					ranked.insert(entry);
				}
			}
		}

		ranked
	}
}

impl Drop for FrequencyIndex {
	fn drop(&mut self) {
		let mut stack: Vec<_> = self.root.take().into_iter().collect();

		while let Some(mut node) = stack.pop() {
			stack.extend(node.less.take());
			stack.extend(node.greater.take());
		}
	}
}
