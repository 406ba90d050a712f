extern crate mandelbrot;
extern crate rand;

use mandelbrot::{ColorScheme, PlaneMapper, Renderer, Viewport};
use rand::Rng;

const FULL_PICTURE: (f64, f64, f64, f64) = (-2.5, 1.5, -2.0, 2.0);

fn renderer(bounds: (f64, f64, f64, f64), resolution: usize, scheme: u32) -> Renderer {
    let viewport = Viewport::new(bounds.0, bounds.1, bounds.2, bounds.3).unwrap();
    Renderer::new(
        PlaneMapper::new(viewport, resolution).unwrap(),
        ColorScheme::new(scheme).unwrap(),
    )
}

#[test]
fn full_picture_is_identical_for_one_four_and_sixteen_threads() {
    let renderer = renderer(FULL_PICTURE, 16, 0);
    let one = renderer.render_threaded(1).unwrap();
    assert_eq!(one.len(), 256);
    assert_eq!(renderer.render_threaded(4).unwrap(), one);
    assert_eq!(renderer.render_threaded(16).unwrap(), one);
    assert_eq!(renderer.render_single().unwrap(), one);
    assert_eq!(renderer.render_rayon(4).unwrap(), one);
}

#[test]
fn full_picture_is_symmetric_about_the_real_axis() {
    // Row 8 is the axis; rows 8 - k and 8 + k mirror each other.
    let buffer = renderer(FULL_PICTURE, 16, 0).render_single().unwrap();
    for k in 1..8 {
        assert_eq!(buffer.row(8 - k), buffer.row(8 + k), "k = {}", k);
    }
}

#[test]
fn random_viewports_are_deterministic() {
    let mut rng = rand::thread_rng();
    for _ in 0..8 {
        let x_min = rng.gen_range(-2.5, 0.5);
        let y_min = rng.gen_range(-1.5, 1.0);
        let span = rng.gen_range(0.001, 1.5);
        let resolution = rng.gen_range(1, 40);
        let scheme = rng.gen_range(0, ColorScheme::COUNT);
        let threads = rng.gen_range(2, 12);

        let renderer = renderer((x_min, x_min + span, y_min, y_min + span), resolution, scheme);
        let baseline = renderer.render_single().unwrap();
        assert_eq!(renderer.render_threaded(threads).unwrap(), baseline);
        assert_eq!(renderer.render_rayon(threads).unwrap(), baseline);
    }
}
