use crate::{GeometryError, Shape, wkt::WriteWkt};
use anyhow::Result;
use std::fmt::Debug;

use super::PointGeometry;

/// Defines the basic interface shared by all geometry variants.
pub trait GeometryTrait: Debug + Clone + WriteWkt {
	/// Topological dimension: 0 for points, 1 for lines, 2 for areas.
	fn dimension(&self) -> u8;

	/// Canonical uppercase WKT keyword of the variant.
	fn type_tag(&self) -> &'static str;

	/// Renders the geometry into rings. The returned shape is an independent copy.
	fn as_shape(&self) -> Shape;

	/// Verifies the structural validity of the geometry, e.g. that no ring is empty.
	fn verify(&self) -> Result<()>;

	/// Compares two geometries of the same variant within [`crate::EPSILON`].
	///
	/// Area geometries whose rings differ (e.g. in start point or orientation) still coincide
	/// when they cover the same area.
	fn coincides(&self, other: &Self) -> bool;

	/// Compute the bounding box of this geometry.
	///
	/// Returns `Some([x_min, y_min, x_max, y_max])`, or `None` if the geometry has no coordinates.
	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.as_shape().bounding_box()
	}

	/// Center of the bounding box.
	fn center_point(&self) -> Option<PointGeometry> {
		let [x_min, y_min, x_max, y_max] = self.compute_bounds()?;
		Some(PointGeometry::from([(x_min + x_max) / 2.0, (y_min + y_max) / 2.0]))
	}

	/// Formats the geometry as well-known text. Use [`crate::wkt::format_geometry`] to reject
	/// geometries whose text would not parse back.
	fn as_text(&self) -> String {
		let mut text = String::from(self.type_tag());
		self.write_wkt_body(&mut text);
		text
	}
}

/// Represents geometries that can be wrapped into a corresponding multi-geometry.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	fn into_multi(self) -> Multi;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}

	/// Appends a child at the end.
	fn add_child(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Removes the first child that coincides with `item` and returns whether one was found.
	fn remove_child(&mut self, item: &Item) -> bool
	where
		Item: GeometryTrait,
	{
		let children = self.as_mut_vec();
		if let Some(index) = children.iter().position(|child| child.coincides(item)) {
			children.remove(index);
			true
		} else {
			false
		}
	}

	/// Returns the child at `index`.
	fn child_at(&self, index: usize) -> Result<&Item, GeometryError> {
		let children = self.as_vec();
		children.get(index).ok_or(GeometryError::IndexOutOfRange {
			index,
			count: children.len(),
		})
	}

	fn child_count(&self) -> usize {
		self.as_vec().len()
	}
}
