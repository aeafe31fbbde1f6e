use crate::{
	neighbors::{offset_between, Offset},
	Point,
};
use hashbrown::HashMap;

/// Extra connections between cells that are not adjacent.
///
/// A cell with an entry uses that entry instead of the regular offsets when it is expanded.
/// Every entry starts out as a copy of the regular offsets, with the teleport offsets appended.
#[derive(Clone, Debug, Default)]
pub(crate) struct TeleportTable {
	width: usize,
	entries: HashMap<usize, Vec<Offset>>,
}

impl TeleportTable {
	pub fn new(width: usize) -> TeleportTable {
		TeleportTable {
			width,
			entries: HashMap::new(),
		}
	}

	/// Connects `a` and `b` in both directions.
	pub fn register(&mut self, a: Point, b: Point, base: &[Offset]) {
		self.insert(a, offset_between(a, b), base);
		self.insert(b, offset_between(b, a), base);
	}

	fn insert(&mut self, point: Point, offset: Offset, base: &[Offset]) {
		let index = self.index(point);
		self.entries
			.entry(index)
			.or_insert_with(|| base.to_vec())
			.push(offset);
	}

	/// The offsets to use when expanding `point`, if it has any teleports.
	pub fn offsets_at(&self, point: Point) -> Option<&[Offset]> {
		if self.entries.is_empty() {
			return None;
		}
		self.entries.get(&self.index(point)).map(Vec::as_slice)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	fn index(&self, (x, y): Point) -> usize {
		x + y * self.width
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::neighbors::{CARDINAL, MOORE};

	#[test]
	fn register_both_ends() {
		let mut table = TeleportTable::new(8);
		table.register((1, 1), (6, 6), &MOORE);

		let entry = table.offsets_at((1, 1)).unwrap();
		assert_eq!(&entry[..8], &MOORE[..]);
		assert_eq!(entry[8], (5, 5));

		let exit = table.offsets_at((6, 6)).unwrap();
		assert_eq!(&exit[..8], &MOORE[..]);
		assert_eq!(exit[8], (-5, -5));

		assert_eq!(table.offsets_at((0, 0)), None);
		assert_eq!(table.len(), 2);
	}

	#[test]
	fn repeated_registration_appends() {
		let mut table = TeleportTable::new(5);
		table.register((0, 0), (4, 0), &CARDINAL);
		table.register((0, 0), (0, 4), &CARDINAL);

		let offsets = table.offsets_at((0, 0)).unwrap();
		assert_eq!(offsets.len(), CARDINAL.len() + 2);
		assert_eq!(&offsets[4..], &[(4, 0), (0, 4)]);
		assert_eq!(table.len(), 3);
	}
}
