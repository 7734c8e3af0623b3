use params::{flatten, unflatten, Param, Trainability, Value};

#[test]
fn flatten_is_depth_first() {
    let v = Value::Seq(vec![
        Value::Seq(vec![Value::Scalar(1.0), Value::Scalar(2.0)]),
        Value::Scalar(3.0),
        Value::Seq(vec![Value::Seq(vec![Value::Scalar(4.0)]), Value::Scalar(5.0)]),
    ]);
    assert_eq!(flatten(&v), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn flatten_unflatten_roundtrip() {
    let v = Value::Seq(vec![
        Value::Scalar(0.5),
        Value::Seq(vec![
            Value::Scalar(-1.25),
            Value::Seq(vec![Value::Scalar(3.0), Value::Scalar(4.5)]),
        ]),
        Value::Seq(vec![]),
        Value::Scalar(7.0),
    ]);

    let rebuilt = unflatten(&flatten(&v), &v).unwrap();
    assert_eq!(rebuilt, v);
}

#[test]
fn scalar_roundtrip() {
    let v = Value::Scalar(2.5);
    assert_eq!(flatten(&v), vec![2.5]);
    assert_eq!(unflatten(&[9.0], &v).unwrap(), Value::Scalar(9.0));
}

#[test]
fn leaf_count_matches_flatten() {
    let v = Value::Seq(vec![
        Value::from(vec![1.0, 2.0, 3.0]),
        Value::Scalar(4.0),
    ]);
    assert_eq!(v.leaf_count(), flatten(&v).len());
}

#[test]
fn param_constructors_carry_tags() {
    let p = Param::trainable(vec![1.0, 2.0]);
    assert!(p.is_trainable());
    assert_eq!(p.tag, Trainability::Trainable);

    let q = Param::fixed(3.0);
    assert!(!q.is_trainable());
    assert_eq!(q.value.as_scalar(), Some(3.0));
}
