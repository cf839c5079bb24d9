use super::Coordinates;
use std::fmt::Debug;

/// An ordered sequence of coordinates, either open (a path) or closed (a boundary).
///
/// A closed ring does not need to repeat its first coordinate; [`Ring::boundary`] adds the
/// closing coordinate where it is missing.
#[derive(Clone, PartialEq)]
pub struct Ring {
	coords: Vec<Coordinates>,
	closed: bool,
}

impl Ring {
	#[must_use]
	pub fn open(coords: Vec<Coordinates>) -> Self {
		Self { coords, closed: false }
	}

	#[must_use]
	pub fn closed(coords: Vec<Coordinates>) -> Self {
		Self { coords, closed: true }
	}

	/// Creates a closed ring and appends the first coordinate if the last one does not coincide
	/// with it.
	#[must_use]
	pub fn auto_closed(mut coords: Vec<Coordinates>) -> Self {
		close_coordinates(&mut coords);
		Self { coords, closed: true }
	}

	pub fn coords(&self) -> &[Coordinates] {
		&self.coords
	}

	pub fn into_coords(self) -> Vec<Coordinates> {
		self.coords
	}

	pub fn is_closed(&self) -> bool {
		self.closed
	}

	pub fn len(&self) -> usize {
		self.coords.len()
	}

	pub fn is_empty(&self) -> bool {
		self.coords.is_empty()
	}

	/// Returns the coordinates of the ring, with a trailing copy of the start coordinate if the
	/// ring is closed and does not repeat it already.
	pub fn boundary(&self) -> Vec<Coordinates> {
		let mut coords = self.coords.clone();
		if self.closed {
			close_coordinates(&mut coords);
		}
		coords
	}

	/// Compares two rings coordinate by coordinate within [`super::EPSILON`].
	pub fn coincides(&self, other: &Ring) -> bool {
		if self.closed != other.closed {
			return false;
		}
		let a = self.boundary();
		let b = other.boundary();
		a.len() == b.len() && a.iter().zip(b.iter()).all(|(p, q)| p.coincides(q))
	}

	pub fn bounds(&self) -> Option<[f64; 4]> {
		let first = self.coords.first()?;
		let mut bounds = [first.x(), first.y(), first.x(), first.y()];
		for coord in &self.coords[1..] {
			bounds[0] = bounds[0].min(coord.x());
			bounds[1] = bounds[1].min(coord.y());
			bounds[2] = bounds[2].max(coord.x());
			bounds[3] = bounds[3].max(coord.y());
		}
		Some(bounds)
	}

	/// Even-odd crossing test. Open rings are treated as implicitly closed.
	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		let coords = &self.coords;
		if coords.len() < 3 {
			return false;
		}

		let mut inside = false;
		let mut j = coords.len() - 1;

		for i in 0..coords.len() {
			let xi = coords[i].x();
			let yi = coords[i].y();
			let xj = coords[j].x();
			let yj = coords[j].y();

			if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
				inside = !inside;
			}
			j = i;
		}

		inside
	}
}

fn close_coordinates(coords: &mut Vec<Coordinates>) {
	if let (Some(first), Some(last)) = (coords.first(), coords.last())
		&& !first.coincides(last)
	{
		let first = *first;
		coords.push(first);
	}
}

impl Debug for Ring {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.closed {
			f.write_str("closed ")?;
		}
		f.debug_list().entries(&self.coords).finish()
	}
}
