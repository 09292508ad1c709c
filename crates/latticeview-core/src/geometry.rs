use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three lattice axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Right-hand side of a componentwise operation: either a scalar applied
/// uniformly or a value with one component per axis.
pub trait Operand {
    fn component(&self, axis: Axis) -> f64;
}

impl Operand for f64 {
    fn component(&self, _axis: Axis) -> f64 {
        *self
    }
}

impl Operand for [f64; 3] {
    fn component(&self, axis: Axis) -> f64 {
        self[axis.index()]
    }
}

/// Componentwise arithmetic shared by [`Vec3`], [`Pos`] and [`Size`].
///
/// Every operation returns a new value; the receiver is never modified.
/// The `*_on` variants restrict the operation to a subset of axes and copy
/// the remaining components through unchanged.
pub trait Vector3D: Copy {
    fn from_array(v: [f64; 3]) -> Self;

    fn to_array(&self) -> [f64; 3];

    fn get(&self, axis: Axis) -> f64 {
        self.to_array()[axis.index()]
    }

    fn with(&self, axis: Axis, value: f64) -> Self {
        let mut v = self.to_array();
        v[axis.index()] = value;
        Self::from_array(v)
    }

    fn operate<O, F>(&self, operation: F, n: &O, basis: &[Axis]) -> Self
    where
        O: Operand + ?Sized,
        F: Fn(f64, f64) -> f64,
    {
        let mut v = self.to_array();
        for &axis in basis {
            v[axis.index()] = operation(v[axis.index()], n.component(axis));
        }
        Self::from_array(v)
    }

    fn add<O: Operand>(&self, n: O) -> Self {
        self.add_on(n, &Axis::ALL)
    }

    fn add_on<O: Operand>(&self, n: O, basis: &[Axis]) -> Self {
        self.operate(|a, b| a + b, &n, basis)
    }

    fn sub<O: Operand>(&self, n: O) -> Self {
        self.sub_on(n, &Axis::ALL)
    }

    fn sub_on<O: Operand>(&self, n: O, basis: &[Axis]) -> Self {
        self.operate(|a, b| a - b, &n, basis)
    }

    fn mul<O: Operand>(&self, n: O) -> Self {
        self.mul_on(n, &Axis::ALL)
    }

    fn mul_on<O: Operand>(&self, n: O, basis: &[Axis]) -> Self {
        self.operate(|a, b| a * b, &n, basis)
    }

    fn div<O: Operand>(&self, n: O) -> Self {
        self.div_on(n, &Axis::ALL)
    }

    fn div_on<O: Operand>(&self, n: O, basis: &[Axis]) -> Self {
        self.operate(|a, b| a / b, &n, basis)
    }

    /// Componentwise remainder (`%`, sign follows the dividend).
    fn rem<O: Operand>(&self, n: O) -> Self {
        self.rem_on(n, &Axis::ALL)
    }

    fn rem_on<O: Operand>(&self, n: O, basis: &[Axis]) -> Self {
        self.operate(|a, b| a % b, &n, basis)
    }
}

macro_rules! vector3d {
    ($name:ident) => {
        impl $name {
            pub const fn new(x: f64, y: f64, z: f64) -> Self {
                Self { x, y, z }
            }
        }

        impl Vector3D for $name {
            fn from_array(v: [f64; 3]) -> Self {
                Self::new(v[0], v[1], v[2])
            }

            fn to_array(&self) -> [f64; 3] {
                [self.x, self.y, self.z]
            }
        }

        impl Operand for $name {
            fn component(&self, axis: Axis) -> f64 {
                self.get(axis)
            }
        }

        impl From<[f64; 3]> for $name {
            fn from(v: [f64; 3]) -> Self {
                Self::from_array(v)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({}, {}, {})", self.x, self.y, self.z)
            }
        }
    };
}

/// A plain real-valued triple.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A lattice or world coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pos {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Extents along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

vector3d!(Vec3);
vector3d!(Pos);
vector3d!(Size);

fn compare_component(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl Pos {
    /// Z-major lexicographic order: z, then y, then x.
    ///
    /// This is the canonical order for edge endpoints, vertex sets and
    /// anything else that must be sequenced deterministically.
    pub fn compare(a: &Pos, b: &Pos) -> Ordering {
        compare_component(a.z, b.z)
            .then_with(|| compare_component(a.y, b.y))
            .then_with(|| compare_component(a.x, b.x))
    }

    pub fn is_less_than(&self, other: &Pos) -> bool {
        Pos::compare(self, other) == Ordering::Less
    }

    pub fn min(a: Pos, b: Pos) -> Pos {
        if a.is_less_than(&b) {
            a
        } else {
            b
        }
    }

    pub fn max(a: Pos, b: Pos) -> Pos {
        if a.is_less_than(&b) {
            b
        } else {
            a
        }
    }

    /// Axes on which the two positions disagree, in x, y, z order.
    pub fn differing_axes(&self, other: &Pos) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|&axis| self.get(axis) != other.get(axis))
            .collect()
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Pos::compare(self, other))
    }
}

impl Size {
    pub const UNIT: Size = Size::new(1.0, 1.0, 1.0);

    /// Open span strictly between two unit cells, per axis.
    pub fn diff(a: &Pos, b: &Pos) -> Size {
        let w = ((a.x - b.x).abs() - 1.0).abs();
        let h = ((a.y - b.y).abs() - 1.0).abs();
        let d = ((a.z - b.z).abs() - 1.0).abs();
        Size::new(w, h, d)
    }

    pub fn is_non_negative(&self) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.z >= 0.0
    }
}

/// An axis-aligned bounding box in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of the given extents centered on `center`.
    pub fn centered(center: Vec3, extents: Vec3) -> Self {
        let half = extents.div(2.0);
        Self::new(center.sub(half), center.add(half))
    }

    pub fn extents(&self) -> Vec3 {
        self.max.sub(self.min)
    }

    pub fn center(&self) -> Vec3 {
        self.min.add(self.max).div(2.0)
    }

    pub fn contains_point(&self, p: &Vec3) -> bool {
        Axis::ALL
            .into_iter()
            .all(|axis| p.get(axis) >= self.min.get(axis) && p.get(axis) <= self.max.get(axis))
    }

    pub fn union(&self, other: &BBox) -> Self {
        Self {
            min: Vec3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Vec3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_return_new_values() {
        let p = Pos::new(1.0, 2.0, 3.0);
        let q = p.add(1.0);
        assert_eq!(p, Pos::new(1.0, 2.0, 3.0));
        assert_eq!(q, Pos::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_operation_on_subset_of_axes() {
        let p = Pos::new(2.0, 4.0, 6.0);
        assert_eq!(p.mul_on(10.0, &[Axis::Y]), Pos::new(2.0, 40.0, 6.0));
        assert_eq!(p.div_on(2.0, &[Axis::X, Axis::Z]), Pos::new(1.0, 4.0, 3.0));
    }

    #[test]
    fn test_per_axis_operand() {
        let p = Pos::new(5.0, 7.0, 9.0);
        assert_eq!(p.sub([1.0, 2.0, 3.0]), Pos::new(4.0, 5.0, 6.0));
        assert_eq!(p.rem(Size::new(2.0, 4.0, 5.0)), Pos::new(1.0, 3.0, 4.0));
        let a = Pos::new(0.0, 0.0, 0.0);
        let b = Pos::new(0.0, 0.0, 4.0);
        assert_eq!(a.add_on(b, &[Axis::Z]).div_on(2.0, &[Axis::Z]), Pos::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_compare_is_z_major() {
        let a = Pos::new(9.0, 9.0, 0.0);
        let b = Pos::new(0.0, 0.0, 1.0);
        assert_eq!(Pos::compare(&a, &b), Ordering::Less);
        assert!(a.is_less_than(&b));

        let c = Pos::new(5.0, 0.0, 1.0);
        let d = Pos::new(0.0, 1.0, 1.0);
        assert_eq!(Pos::compare(&c, &d), Ordering::Less);

        assert_eq!(Pos::compare(&a, &a), Ordering::Equal);
        assert!(!a.is_less_than(&a));
    }

    #[test]
    fn test_pos_min_max() {
        let a = Pos::new(1.0, 0.0, 0.0);
        let b = Pos::new(0.0, 0.0, 0.0);
        assert_eq!(Pos::min(a, b), b);
        assert_eq!(Pos::max(a, b), a);
    }

    #[test]
    fn test_differing_axes() {
        let a = Pos::new(0.0, 0.0, 0.0);
        assert_eq!(a.differing_axes(&Pos::new(0.0, 2.0, 0.0)), vec![Axis::Y]);
        assert!(a.differing_axes(&a).is_empty());
        assert_eq!(a.differing_axes(&Pos::new(1.0, 0.0, 1.0)).len(), 2);
    }

    #[test]
    fn test_size_diff() {
        let s = Size::diff(&Pos::new(0.0, 0.0, 0.0), &Pos::new(0.0, 0.0, 4.0));
        assert_eq!(s, Size::new(1.0, 1.0, 3.0));
    }

    #[test]
    fn test_bbox_union_and_center() {
        let a = BBox::centered(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0));
        let b = BBox::centered(Vec3::new(4.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0));
        let u = a.union(&b);
        assert_eq!(u.min, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(u.max, Vec3::new(5.0, 1.0, 1.0));
        assert!((u.center().x - 2.0).abs() < 1e-10);
        assert!(u.contains_point(&Vec3::new(3.0, 0.5, 0.0)));
        assert!(!u.contains_point(&Vec3::new(3.0, 2.0, 0.0)));
    }
}
