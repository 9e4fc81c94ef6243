//! Log lines emitted while configuring and running a descent.
use descent_anim::config::RunConfig;
use descent_anim::derivative_descent::descend;
use descent_anim::utils::quadratic;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

struct Recorder;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static RECORDER: Recorder = Recorder;
static INSTALL: Once = Once::new();

impl Log for Recorder {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

fn record_logs() {
    INSTALL.call_once(|| {
        log::set_logger(&RECORDER).expect("no other logger in this test binary");
        log::set_max_level(LevelFilter::Trace);
    });
}

fn logged(level: Level, message: &str) -> bool {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .any(|(l, m)| *l == level && m == message)
}

#[test]
fn surplus_arguments_warn() {
    record_logs();
    let config = RunConfig::from_args(vec!["1", "0.2", "3", "extra", "more"]).unwrap();
    assert_eq!(config.n_iter, 3);
    assert!(logged(Level::Warn, "ignoring 2 extra argument(s)"));
}

#[test]
fn descent_logs_iterates_and_termination() {
    record_logs();
    let config = RunConfig::from_args(vec!["4", "0.25", "2"]).unwrap();
    let descent = descend(&quadratic(), &config);
    assert_eq!(descent.history, vec![4.0, 2.0, 1.0]);
    assert!(logged(Level::Debug, "x_0 = 4.000000; f(x_0) = 16.000000"));
    assert!(logged(Level::Debug, "x_2 = 1.000000; f(x_2) = 1.000000"));
    assert!(logged(
        Level::Info,
        "IterationCap { steps: 2 } with 3 positions in history"
    ));
}
