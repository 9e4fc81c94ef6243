//! Print the iterates the animation would replay, without opening a window.
use descent_anim::config::RunConfig;
use descent_anim::derivative_descent::*;
use descent_anim::utils::quadratic;
use streaming_iterator::*;

fn main() {
    let config = RunConfig::from_args(std::env::args().skip(1)).expect("numeric arguments");

    let problem = quadratic();
    let mut dd = DerivativeDescent::new(
        &problem.derivative,
        config.learning_rate,
        config.start_point,
        config.n_iter,
        config.tolerance,
    );
    let mut count = 0;
    while let Some(curr) = dd.next() {
        println!("x_{} = {:.2}; f(x_{}) = {:.4}", count, curr.x, count, problem.value(curr.x));
        count += 1;
    }
    println!("{:?}", dd.termination());
}
