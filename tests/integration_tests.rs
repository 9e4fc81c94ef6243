use descent_anim::config::RunConfig;
use descent_anim::derivative_descent::*;
use descent_anim::render::{frame_label, Animation, Scene, FRAME_INTERVAL};
use descent_anim::utils::{quadratic, square_derivative};
use std::process::Command;
use std::time::Instant;

#[test]
fn default_arguments_produce_expected_opening() {
    let config = RunConfig::from_args(Vec::<String>::new()).unwrap();
    let descent = descend(&quadratic(), &config);
    assert_eq!(descent.history[0], 10.0);
    assert!((descent.history[1] - 8.0).abs() < 1e-12);
    assert!((descent.history[2] - 6.4).abs() < 1e-12);
    assert!(descent.history.len() <= config.n_iter + 1);
}

#[test]
fn eager_and_config_driven_runs_agree() {
    let config = RunConfig::from_args(vec!["-7.5", "0.3", "40"]).unwrap();
    let descent = descend(&quadratic(), &config);
    let history = gradient_descent(
        square_derivative,
        config.start_point,
        config.learning_rate,
        config.n_iter,
        config.tolerance,
    );
    assert_eq!(descent.history, history);
}

#[test]
fn unit_learning_rate_runs_to_the_cap() {
    let config = RunConfig::from_args(vec!["10", "1.0", "50"]).unwrap();
    let descent = descend(&quadratic(), &config);
    assert_eq!(descent.termination, Termination::IterationCap { steps: 50 });
    assert_eq!(descent.history.len(), 51);
}

#[test]
fn first_frame_shows_start_point() {
    let problem = quadratic();
    let descent = descend(&problem, &RunConfig::default());
    let scene = Scene::new(&problem);
    let animation = Animation::new(&problem, &descent.history, FRAME_INTERVAL, Instant::now());
    let (x, fx) = animation.current().unwrap();
    assert!(scene.x_range.contains(&x) && scene.y_range.contains(&fx));
    assert_eq!(frame_label(x, fx), "Minimizing: x=10.00, f(x)=100.00");
}

#[test]
fn non_numeric_argument_exits_with_status_one() {
    let output = Command::new(env!("CARGO_BIN_EXE_descent_anim"))
        .arg("abc")
        .output()
        .expect("failed to run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("abc"));
}
