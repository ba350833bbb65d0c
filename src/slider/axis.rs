//! The closed set of positioning axes and a fixed per-axis table.
//!
//! Every slide in a slider is positioned on exactly seven axes: three
//! translations and four rotations. [`AxisMap`] stores one value per axis in a
//! fixed-size array, so a table can never hold fewer or more entries than
//! there are axes.

use phf::phf_map;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Number of recognized axes.
pub const AXIS_COUNT: usize = 7;

/// A spatial or rotational dimension a slide can be positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
    Rotate,
    RotateX,
    RotateY,
    RotateZ,
}

static AXIS_BY_NAME: phf::Map<&'static str, Axis> = phf_map! {
    "x" => Axis::X,
    "y" => Axis::Y,
    "z" => Axis::Z,
    "rotate" => Axis::Rotate,
    "rotate-x" => Axis::RotateX,
    "rotate-y" => Axis::RotateY,
    "rotate-z" => Axis::RotateZ,
};

impl Axis {
    /// All axes, in resolution order.
    pub const ALL: [Axis; AXIS_COUNT] = [
        Axis::X,
        Axis::Y,
        Axis::Z,
        Axis::Rotate,
        Axis::RotateX,
        Axis::RotateY,
        Axis::RotateZ,
    ];

    /// The axis name as it appears in slider declarations (`"rotate-x"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::Rotate => "rotate",
            Axis::RotateX => "rotate-x",
            Axis::RotateY => "rotate-y",
            Axis::RotateZ => "rotate-z",
        }
    }

    /// Look up an axis by its declaration name.
    #[inline]
    pub fn from_name(name: &str) -> Option<Axis> {
        AXIS_BY_NAME.get(name).copied()
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown axis name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown axis '{0}'")]
pub struct UnknownAxis(pub String);

impl FromStr for Axis {
    type Err = UnknownAxis;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Axis::from_name(s).ok_or_else(|| UnknownAxis(s.to_string()))
    }
}

/// One value per axis.
///
/// Indexed by [`Axis`]. Serialized as a mapping keyed by axis name; when
/// deserialized, missing axes take `T::default()` and unknown keys are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisMap<T>([T; AXIS_COUNT]);

/// Resolved numeric positions, one per axis.
pub type AxisValues = AxisMap<f64>;

impl<T> AxisMap<T> {
    /// Build a table by computing the value of every axis.
    pub fn from_fn(f: impl FnMut(Axis) -> T) -> Self {
        Self(Axis::ALL.map(f))
    }

    /// Iterate `(axis, value)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().zip(self.0.iter())
    }

    /// Produce a new table by transforming every entry.
    pub fn map<U>(&self, mut f: impl FnMut(Axis, &T) -> U) -> AxisMap<U> {
        AxisMap::from_fn(|axis| f(axis, &self[axis]))
    }

    /// Number of entries, always [`AXIS_COUNT`].
    #[inline]
    pub const fn len(&self) -> usize {
        AXIS_COUNT
    }

    /// Always false; present for API symmetry with collections.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl<T> Index<Axis> for AxisMap<T> {
    type Output = T;

    #[inline]
    fn index(&self, axis: Axis) -> &T {
        &self.0[axis.index()]
    }
}

impl<T> IndexMut<Axis> for AxisMap<T> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self.0[axis.index()]
    }
}

impl<T: Serialize> Serialize for AxisMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AXIS_COUNT))?;
        for (axis, value) in self.iter() {
            map.serialize_entry(axis.name(), value)?;
        }
        map.end()
    }
}

impl<'de, T> Deserialize<'de> for AxisMap<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AxisMapVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for AxisMapVisitor<T>
        where
            T: Deserialize<'de> + Default,
        {
            type Value = AxisMap<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of axis names to values")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(AxisMap::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(AxisMap::default())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_map(self)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = AxisMap::<T>::default();
                while let Some(key) = access.next_key::<String>()? {
                    match Axis::from_name(&key) {
                        Some(axis) => table[axis] = access.next_value()?,
                        None => {
                            log::debug!("ignoring unknown axis key '{}'", key);
                            access.next_value::<IgnoredAny>()?;
                        },
                    }
                }
                Ok(table)
            }
        }

        deserializer.deserialize_option(AxisMapVisitor(PhantomData))
    }
}
