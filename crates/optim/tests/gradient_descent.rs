use optim::{
    CentralDifference, ForwardDifference, GradError, GradientDescent, MismatchPolicy,
    ParameterShift,
};
use params::{flatten, Param, Value};

fn square(args: &[Param]) -> f64 {
    let x = args[0].value.as_scalar().expect("scalar argument");
    x * x
}

#[test]
fn scalar_step_descends_the_parabola() {
    // eta = 0.1, f(x) = x^2, x = 5.0: one step lands on 4.0.
    let opt = GradientDescent::new(0.1);
    let arg = Param::trainable(5.0);

    let new = opt
        .step_single(&CentralDifference::default(), |p: &Param| {
            let x = p.value.as_scalar().expect("scalar argument");
            x * x
        }, &arg)
        .unwrap();

    let x = new.value.as_scalar().unwrap();
    assert!((x - 4.0).abs() < 1e-6, "x = {}", x);
}

#[test]
fn step_with_supplied_gradient_is_exact() {
    let opt = GradientDescent::new(0.1);
    let args = vec![Param::trainable(5.0)];

    let grad_fn = |args: &[Param]| {
        let x = args[0].value.as_scalar().expect("scalar argument");
        vec![Value::Scalar(2.0 * x)]
    };

    let new = opt.step_with_grad(grad_fn, &args).unwrap();
    assert_eq!(new[0].value, Value::Scalar(4.0));
}

#[test]
fn step_and_cost_reports_the_pre_step_value() {
    let opt = GradientDescent::new(0.1);
    let args = vec![Param::trainable(5.0)];

    let (new, cost) = opt
        .step_and_cost(&CentralDifference::default(), square, &args)
        .unwrap();

    assert_eq!(cost, 25.0);
    let x = new[0].value.as_scalar().unwrap();
    assert!((x - 4.0).abs() < 1e-6, "x = {}", x);
}

#[test]
fn forward_difference_exposes_the_forward_value() {
    let objective = |args: &[Param]| square(args);
    let args = vec![Param::trainable(5.0)];

    let (grads, forward) =
        GradientDescent::compute_grad(&objective, &args, &ForwardDifference::default(), None);

    assert_eq!(forward, Some(25.0));
    let g = grads[0].as_scalar().unwrap();
    assert!((g - 10.0).abs() < 1e-4, "g = {}", g);
}

#[test]
fn supplied_gradient_skips_the_forward_pass() {
    let objective = |_: &[Param]| -> f64 { panic!("objective must not be evaluated") };
    let grad_fn = |_: &[Param]| vec![Value::Scalar(10.0)];
    let args = vec![Param::trainable(5.0)];

    let (grads, forward) =
        GradientDescent::compute_grad(&objective, &args, &ParameterShift, Some(&grad_fn));

    assert_eq!(forward, None);
    assert_eq!(grads, vec![Value::Scalar(10.0)]);
}

#[test]
fn two_argument_update_matches_by_position() {
    // x = [1.0, 2.0], y = 3.0, grads [0.5, 0.5] and 1.0, eta = 1.0.
    let opt = GradientDescent::new(1.0);
    let args = vec![Param::trainable(vec![1.0, 2.0]), Param::trainable(3.0)];

    let grad_fn =
        |_: &[Param]| vec![Value::from(vec![0.5, 0.5]), Value::Scalar(1.0)];

    let new = opt.step_with_grad(grad_fn, &args).unwrap();
    assert_eq!(new[0].value, Value::from(vec![0.5, 1.5]));
    assert_eq!(new[1].value, Value::Scalar(2.0));
}

#[test]
fn fixed_arguments_pass_through_unchanged() {
    let opt = GradientDescent::new(0.5);
    let args = vec![Param::fixed(vec![7.0, 8.0]), Param::trainable(1.0)];

    // One gradient entry only: fixed arguments consume none.
    let grad_fn = |_: &[Param]| vec![Value::Scalar(2.0)];

    let new = opt.step_with_grad(grad_fn, &args).unwrap();
    assert_eq!(new[0], args[0]);
    assert_eq!(new[1].value, Value::Scalar(0.0));
}

#[test]
fn nested_shapes_survive_the_update() {
    let opt = GradientDescent::new(1.0);
    let shape = Value::Seq(vec![
        Value::Scalar(1.0),
        Value::Seq(vec![Value::Scalar(2.0), Value::Scalar(3.0)]),
    ]);
    let args = vec![Param::trainable(shape)];

    let grad_fn = |args: &[Param]| {
        let flat = flatten(&args[0].value);
        vec![Value::from(flat)]
    };

    let new = opt.step_with_grad(grad_fn, &args).unwrap();
    let expected = Value::Seq(vec![
        Value::Scalar(0.0),
        Value::Seq(vec![Value::Scalar(0.0), Value::Scalar(0.0)]),
    ]);
    assert_eq!(new[0].value, expected);
}

#[test]
fn update_stepsize_affects_later_steps_only() {
    let mut opt = GradientDescent::new(0.1);
    let args = vec![Param::trainable(5.0)];
    let grad_fn = |args: &[Param]| {
        let x = args[0].value.as_scalar().expect("scalar argument");
        vec![Value::Scalar(2.0 * x)]
    };

    let first = opt.step_with_grad(grad_fn, &args).unwrap();
    assert_eq!(first[0].value, Value::Scalar(4.0));

    opt.update_stepsize(0.25);
    assert_eq!(opt.stepsize(), 0.25);

    // The earlier result stands; the same starting point now steps further.
    assert_eq!(first[0].value, Value::Scalar(4.0));
    let second = opt.step_with_grad(grad_fn, &args).unwrap();
    assert_eq!(second[0].value, Value::Scalar(2.5));
}

#[test]
fn permissive_truncation_keeps_trailing_leaves() {
    let opt = GradientDescent::new(1.0);
    assert_eq!(opt.policy(), MismatchPolicy::Permissive);

    let args = vec![Param::trainable(vec![1.0, 2.0, 3.0])];
    let grad_fn = |_: &[Param]| vec![Value::from(vec![1.0, 1.0])];

    let new = opt.step_with_grad(grad_fn, &args).unwrap();
    assert_eq!(new[0].value, Value::from(vec![0.0, 1.0, 3.0]));
}

#[test]
fn permissive_ignores_extra_gradient_leaves() {
    let opt = GradientDescent::new(1.0);
    let args = vec![Param::trainable(vec![1.0, 2.0])];
    let grad_fn = |_: &[Param]| vec![Value::from(vec![1.0, 1.0, 9.0])];

    let new = opt.step_with_grad(grad_fn, &args).unwrap();
    assert_eq!(new[0].value, Value::from(vec![0.0, 1.0]));
}

#[test]
fn strict_policy_rejects_shape_mismatch() {
    let opt = GradientDescent::strict(1.0);
    let args = vec![Param::trainable(vec![1.0, 2.0, 3.0])];
    let grad_fn = |_: &[Param]| vec![Value::from(vec![1.0, 1.0])];

    let err = opt.step_with_grad(grad_fn, &args).unwrap_err();
    assert_eq!(err, GradError::ShapeMismatch { param: 3, grad: 2 });
}

#[test]
fn missing_gradient_entries_fail_in_both_policies() {
    let args = vec![Param::trainable(1.0), Param::trainable(2.0)];
    let grads = vec![Value::Scalar(0.5)];

    for opt in [GradientDescent::new(0.1), GradientDescent::strict(0.1)] {
        let err = opt.apply_grad(&grads, &args).unwrap_err();
        assert_eq!(err, GradError::MissingGradient { expected: 2, got: 1 });
    }
}

#[test]
fn parameter_shift_is_exact_on_sinusoids() {
    let objective = |args: &[Param]| args[0].value.as_scalar().expect("scalar").cos();
    let args = vec![Param::trainable(0.3)];

    let (grads, forward) =
        GradientDescent::compute_grad(&objective, &args, &ParameterShift, None);

    assert_eq!(forward, None);
    let g = grads[0].as_scalar().unwrap();
    assert!((g - (-0.3f64.sin())).abs() < 1e-12, "g = {}", g);
}

#[test]
fn batch_step_preserves_argument_count() {
    let opt = GradientDescent::new(0.1);
    let args = vec![Param::trainable(1.0), Param::trainable(2.0)];

    let new = opt
        .step(&CentralDifference::default(), square, &args)
        .unwrap();
    assert_eq!(new.len(), 2);
}
