/// A parameter container: a bare scalar or an arbitrarily nested sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(f64),
    Seq(Vec<Value>),
}

impl Value {
    /// Number of scalars a depth-first traversal visits.
    pub fn leaf_count(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Seq(items) => items.iter().map(Value::leaf_count).sum(),
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(x) => Some(*x),
            Value::Seq(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(x)
    }
}

impl From<Vec<f64>> for Value {
    fn from(xs: Vec<f64>) -> Self {
        Value::Seq(xs.into_iter().map(Value::Scalar).collect())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

/// Whether an argument participates in optimization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trainability {
    Trainable,
    Fixed,
}

/// One optimizer argument: a container plus its trainability tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub value: Value,
    pub tag: Trainability,
}

impl Param {
    pub fn trainable(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            tag: Trainability::Trainable,
        }
    }

    pub fn fixed(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            tag: Trainability::Fixed,
        }
    }

    pub fn is_trainable(&self) -> bool {
        self.tag == Trainability::Trainable
    }
}
