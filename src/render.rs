//! Replay a descent history against the curve it descends, in a window.
//!
//! Frames are drawn with plotters into an RGB buffer and shown with minifb.
//! Everything except [`animate`] works without a display.

use crate::utils::ScalarProblem;
use log::info;
use minifb::{Key, Window, WindowOptions};
use plotters::prelude::*;
use std::error::Error;
use std::ops::{Range, RangeInclusive};
use std::time::{Duration, Instant};

pub const DOMAIN: RangeInclusive<f64> = -10.0..=10.0;
pub const CURVE_SAMPLES: usize = 400;
pub const FRAME_INTERVAL: Duration = Duration::from_millis(200);
pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 600;

const TITLE: &str = "Gradient Descent";
const CURVE_LABEL: &str = "Function f(x) = x^2";
const MARKER_LABEL: &str = "Gradient Descent";
// Fraction of the axis span added on each side of the curve's extent.
const AXIS_MARGIN: f64 = 0.05;

/// Readout shown alongside the marker.
pub fn frame_label(x: f64, fx: f64) -> String {
    format!("Minimizing: x={:.2}, f(x)={:.2}", x, fx)
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    let pad = (hi - lo) * AXIS_MARGIN;
    (lo - pad)..(hi + pad)
}

/// The static part of the plot: the sampled curve and fixed axes.
#[derive(Debug, Clone)]
pub struct Scene {
    pub curve: Vec<(f64, f64)>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

impl Scene {
    pub fn new<V, D>(problem: &ScalarProblem<V, D>) -> Scene
    where
        V: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let curve = problem.sample(DOMAIN, CURVE_SAMPLES);
        let (y_lo, y_hi) = curve
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        Scene {
            x_range: padded(*DOMAIN.start(), *DOMAIN.end()),
            y_range: padded(y_lo, y_hi),
            curve,
        }
    }

    /// Whether `point` lies inside the fixed axes.
    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        self.x_range.contains(&x) && self.y_range.contains(&y)
    }
}

/// Which frame is showing, advanced by wall-clock time. Wraps around
/// after the last frame.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<(f64, f64)>,
    index: usize,
    interval: Duration,
    shown_at: Instant,
}

impl Animation {
    pub fn new<V, D>(
        problem: &ScalarProblem<V, D>,
        history: &[f64],
        interval: Duration,
        now: Instant,
    ) -> Animation
    where
        V: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        Animation {
            frames: history.iter().map(|&x| (x, problem.value(x))).collect(),
            index: 0,
            interval,
            shown_at: now,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<(f64, f64)> {
        self.frames.get(self.index).copied()
    }

    /// Moves to the next frame once `interval` has passed since the current
    /// one was shown. Returns whether the frame changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.frames.len() < 2 || now.saturating_duration_since(self.shown_at) < self.interval {
            return false;
        }
        self.index = (self.index + 1) % self.frames.len();
        self.shown_at = now;
        true
    }
}

/// An RGB pixel buffer for plotters to draw into.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    rgb: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas {
            width,
            height,
            rgb: vec![0; width * height * 3],
        }
    }

    pub fn draw_frame(&mut self, scene: &Scene, point: (f64, f64)) -> Result<(), Box<dyn Error>> {
        let size = (self.width as u32, self.height as u32);
        let root = BitMapBackend::with_buffer(&mut self.rgb, size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(scene.x_range.clone(), scene.y_range.clone())?;
        chart.configure_mesh().draw()?;

        chart
            .draw_series(LineSeries::new(scene.curve.iter().copied(), &RED))?
            .label(CURVE_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
        // Off-scale or non-finite iterates only show up in the readout.
        let on_axes = scene.contains(point);
        chart
            .draw_series(
                std::iter::once(Circle::new(point, 5, BLUE.filled())).filter(|_| on_axes),
            )?
            .label(MARKER_LABEL)
            .legend(|(x, y)| Circle::new((x + 10, y), 4, BLUE.filled()));
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        // Axes-fraction (0.02, 0.95), measured from the bottom left.
        let (xs, ys) = chart.plotting_area().get_pixel_range();
        let text_x = xs.start + ((xs.end - xs.start) as f64 * 0.02) as i32;
        let text_y = ys.start + ((ys.end - ys.start) as f64 * 0.05) as i32;
        root.draw(&Text::new(
            frame_label(point.0, point.1),
            (text_x, text_y),
            ("sans-serif", 16).into_font(),
        ))?;

        root.present()?;
        Ok(())
    }

    /// The buffer in minifb's 0RGB pixel layout.
    pub fn to_argb(&self) -> Vec<u32> {
        self.rgb
            .chunks_exact(3)
            .map(|p| (p[0] as u32) << 16 | (p[1] as u32) << 8 | p[2] as u32)
            .collect()
    }
}

/// Open a window and replay `history` until it is closed or Escape is
/// pressed.
pub fn animate<V, D>(problem: &ScalarProblem<V, D>, history: &[f64]) -> Result<(), Box<dyn Error>>
where
    V: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let scene = Scene::new(problem);
    let mut animation = Animation::new(problem, history, FRAME_INTERVAL, Instant::now());
    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    let mut window = Window::new(TITLE, WIDTH, HEIGHT, WindowOptions::default())?;
    window.set_target_fps(60);
    info!("animating {} frames", history.len());

    let mut buffer = Vec::new();
    let mut dirty = true;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        dirty |= animation.tick(Instant::now());
        if dirty {
            if let Some(point) = animation.current() {
                canvas.draw_frame(&scene, point)?;
                buffer = canvas.to_argb();
            }
            dirty = false;
        }
        window.update_with_buffer(&buffer, WIDTH, HEIGHT)?;
    }
    Ok(())
}
