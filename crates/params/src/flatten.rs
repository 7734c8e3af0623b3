use crate::value::Value;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UnflattenError {
    #[error("flat sequence holds {got} scalars, template needs {needed}")]
    TooFewElements { got: usize, needed: usize },
    #[error("flat sequence holds {got} scalars, template takes only {needed}")]
    LeftoverElements { got: usize, needed: usize },
}

/// Depth-first traversal of a nested container into a flat scalar sequence.
pub fn flatten(value: &Value) -> Vec<f64> {
    let mut out = Vec::with_capacity(value.leaf_count());
    collect(value, &mut out);
    out
}

fn collect(value: &Value, out: &mut Vec<f64>) {
    match value {
        Value::Scalar(x) => out.push(*x),
        Value::Seq(items) => {
            for item in items {
                collect(item, out);
            }
        }
    }
}

/// Rebuild the template's nested shape from a flat sequence.
///
/// Exact contract: the sequence must hold precisely the template's leaf
/// count, so `unflatten(&flatten(&v), &v)` reproduces `v`.
pub fn unflatten(flat: &[f64], template: &Value) -> Result<Value, UnflattenError> {
    let needed = template.leaf_count();
    if flat.len() < needed {
        return Err(UnflattenError::TooFewElements {
            got: flat.len(),
            needed,
        });
    }
    if flat.len() > needed {
        return Err(UnflattenError::LeftoverElements {
            got: flat.len(),
            needed,
        });
    }

    let mut pos = 0;
    Ok(rebuild(flat, &mut pos, template))
}

/// Rebuild the template's shape from a possibly short flat sequence.
///
/// Leaves are filled depth-first; once the sequence runs out, the
/// template's own scalars are kept. Extra trailing scalars are ignored.
pub fn unflatten_truncating(flat: &[f64], template: &Value) -> Value {
    let mut pos = 0;
    rebuild(flat, &mut pos, template)
}

fn rebuild(flat: &[f64], pos: &mut usize, template: &Value) -> Value {
    match template {
        Value::Scalar(old) => {
            if *pos < flat.len() {
                let v = flat[*pos];
                *pos += 1;
                Value::Scalar(v)
            } else {
                Value::Scalar(*old)
            }
        }
        Value::Seq(items) => Value::Seq(items.iter().map(|t| rebuild(flat, pos, t)).collect()),
    }
}
