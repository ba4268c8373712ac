use std::fmt;

/// An element of the abyss.
///
/// A double bubble is always flat: its elements are plain scalars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bubble {
    /// A single 32-bit value.
    Single(i32),
    /// An ordered collection of values occupying one abyss slot.
    Double(Vec<i32>),
}

impl Bubble {
    /// Create a single bubble.
    pub fn single(v: i32) -> Self {
        Bubble::Single(v)
    }

    /// Create a double bubble.
    pub fn double(values: impl Into<Vec<i32>>) -> Self {
        Bubble::Double(values.into())
    }

    /// Try to get as a single value.
    pub fn as_single(&self) -> Option<i32> {
        match self {
            Bubble::Single(v) => Some(*v),
            Bubble::Double(_) => None,
        }
    }

    /// Number of elements: zero for a single bubble.
    pub fn count(&self) -> usize {
        match self {
            Bubble::Single(_) => 0,
            Bubble::Double(values) => values.len(),
        }
    }

    /// The scalar contents in order: a single bubble yields itself.
    pub fn into_flat(self) -> Vec<i32> {
        match self {
            Bubble::Single(v) => vec![v],
            Bubble::Double(values) => values,
        }
    }

    /// Append the scalar contents to `out`.
    pub fn flatten_into(self, out: &mut Vec<i32>) {
        match self {
            Bubble::Single(v) => out.push(v),
            Bubble::Double(values) => out.extend(values),
        }
    }
}

impl From<i32> for Bubble {
    fn from(v: i32) -> Self {
        Bubble::Single(v)
    }
}

impl From<Vec<i32>> for Bubble {
    fn from(values: Vec<i32>) -> Self {
        Bubble::Double(values)
    }
}

impl fmt::Display for Bubble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bubble::Single(v) => write!(f, "{}", v),
            Bubble::Double(values) => {
                f.write_str("[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_str("]")
            }
        }
    }
}
