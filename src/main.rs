use descent_anim::config::RunConfig;
use descent_anim::derivative_descent::descend;
use descent_anim::render::animate;
use descent_anim::utils::quadratic;
use log::info;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };
    info!(
        "start point {}, learning rate {}, at most {} iterations",
        config.start_point, config.learning_rate, config.n_iter
    );

    let problem = quadratic();
    let descent = descend(&problem, &config);
    animate(&problem, &descent.history)
}
