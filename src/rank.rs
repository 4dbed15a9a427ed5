use std::cmp::Ordering;
use std::io::Write;

use crate::error::Result;
use crate::index::WordEntry;

struct RankNode {
	entry: WordEntry,
	higher: Option<Box<RankNode>>,
	tied: Option<Box<RankNode>>,
	lower: Option<Box<RankNode>>,
}

/// Words ordered by descending count.
///
/// The first entry inserted stays the root. Entries with the root's count
/// (or any node's count) chain off `tied` in insertion order.
pub struct RankedIndex {
	root: Option<Box<RankNode>>,
	len: usize,
}

impl RankedIndex {
	#[inline]
	pub(crate) fn new() -> Self {
		Self { root: None, len: 0 }
	}

	pub(crate) fn insert(&mut self, entry: WordEntry) {
		let mut slot = &mut self.root;

		while let Some(node) = slot {
			slot = match entry.count().cmp(&node.entry.count()) {
				Ordering::Equal => &mut node.tied,
				Ordering::Greater => &mut node.higher,
				Ordering::Less => &mut node.lower,
			};
		}

		*slot = Some(Box::new(RankNode { entry, higher: None, tied: None, lower: None }));
		self.len += 1;
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	#[inline]
	pub fn iter(&self) -> Iter<'_> {
		Iter { stack: self.root.as_deref().map(Step::Descend).into_iter().collect() }
	}

	/// Writes one `count word` line per entry, count right-aligned to width 4.
	pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
		for entry in self {
			writeln!(output, "{:4} {}", entry.count(), entry.word())?;
		}

		Ok(())
	}
}

impl Drop for RankedIndex {
	fn drop(&mut self) {
		let mut stack: Vec<_> = self.root.take().into_iter().collect();

		while let Some(mut node) = stack.pop() {
			stack.extend(node.higher.take());
			stack.extend(node.tied.take());
			stack.extend(node.lower.take());
		}
	}
}

enum Step<'a> {
	Descend(&'a RankNode),
	Yield(&'a WordEntry),
}

/// Entries from highest count to lowest: higher subtree, the node, its tied
/// chain, then the lower subtree.
pub struct Iter<'a> {
	stack: Vec<Step<'a>>,
}

impl<'a> Iterator for Iter<'a> {
	type Item = &'a WordEntry;

	fn next(&mut self) -> Option<Self::Item> {
		while let Some(step) = self.stack.pop() {
			match step {
				Step::Yield(entry) => return Some(entry),
				Step::Descend(node) => {
					self.stack.extend(node.lower.as_deref().map(Step::Descend));
					self.stack.extend(node.tied.as_deref().map(Step::Descend));
					self.stack.push(Step::Yield(&node.entry));
					self.stack.extend(node.higher.as_deref().map(Step::Descend));
				}
			}
		}

		None
	}
}

impl<'a> IntoIterator for &'a RankedIndex {
	type Item = &'a WordEntry;
	type IntoIter = Iter<'a>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use crate::index::FrequencyIndex;

	fn rank(words: &[&str]) -> Vec<(u64, String)> {
		let mut index = FrequencyIndex::new();

		for word in words {
			index.insert(word);
		}

		index.rerank().iter().map(|e| (e.count(), e.word().to_string())).collect()
	}

	fn pairs(expected: &[(u64, &str)]) -> Vec<(u64, String)> {
		expected.iter().map(|&(c, w)| (c, w.to_string())).collect()
	}

	#[test]
	fn it_should_chain_ties_in_rerank_order() {
		assert_eq!(rank(&["b", "a", "c"]), pairs(&[(1, "a"), (1, "c"), (1, "b")]));
	}

	#[test]
	fn it_should_put_higher_counts_first() {
		assert_eq!(rank(&["b", "a", "c", "c"]), pairs(&[(2, "c"), (1, "a"), (1, "b")]));
	}

	#[test]
	fn it_should_order_mixed_counts() {
		let words = ["d", "b", "f", "a", "c", "e", "g", "b", "f", "f"];
		assert_eq!(rank(&words), pairs(&[
			(3, "f"),
			(2, "b"),
			(1, "a"),
			(1, "c"),
			(1, "e"),
			(1, "g"),
			(1, "d"),
		]));
	}

	#[test]
	fn it_should_keep_ties_below_a_higher_node() {
		// a(1) is the root; b(3) and d(2) hang off its higher side, c(3) ties with b.
		let words = ["c", "b", "a", "b", "b", "c", "c", "d", "d"];
		assert_eq!(rank(&words), pairs(&[(3, "b"), (3, "c"), (2, "d"), (1, "a")]));
	}

	#[test]
	fn it_should_format_counts_right_aligned() {
		let mut index = FrequencyIndex::new();

		for _ in 0..12345 {
			index.insert("many");
		}

		index.insert("one");
		let mut output = Vec::new();
		index.rerank().write_to(&mut output).unwrap();
		assert_eq!(String::from_utf8(output).unwrap(), "12345 many\n   1 one\n");
	}
}
