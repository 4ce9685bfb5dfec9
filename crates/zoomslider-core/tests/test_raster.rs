use approx::assert_abs_diff_eq;
use ndarray::{Array2, Array3};

use zoomslider_core::raster::rasterize;
use zoomslider_core::sample::ImageSample;

fn ramp(h: usize, w: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(r, c)| (r * w + c) as f32)
}

#[test]
fn test_rasterize_block_mean() {
    let sample = ImageSample::Gray(ramp(4, 4));
    let ImageSample::Gray(out) = rasterize(&sample, 2, 2) else {
        panic!("expected gray output");
    };
    assert_eq!(out.dim(), (2, 2));
    assert_abs_diff_eq!(out[[0, 0]], 2.5, epsilon = 1e-6);
    assert_abs_diff_eq!(out[[0, 1]], 4.5, epsilon = 1e-6);
    assert_abs_diff_eq!(out[[1, 0]], 10.5, epsilon = 1e-6);
    assert_abs_diff_eq!(out[[1, 1]], 12.5, epsilon = 1e-6);
}

#[test]
fn test_rasterize_uneven_cells() {
    // Five columns into two cells: [0, 2) and [2, 5).
    let sample = ImageSample::Gray(ramp(1, 5));
    let ImageSample::Gray(out) = rasterize(&sample, 1, 2) else {
        panic!("expected gray output");
    };
    assert_abs_diff_eq!(out[[0, 0]], 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(out[[0, 1]], 3.0, epsilon = 1e-6);
}

#[test]
fn test_rasterize_same_size_is_identity() {
    let data = ramp(3, 5);
    let sample = ImageSample::Gray(data.clone());
    let ImageSample::Gray(out) = rasterize(&sample, 3, 5) else {
        panic!("expected gray output");
    };
    assert_eq!(out, data);
}

#[test]
fn test_rasterize_rgb_per_channel() {
    let mut data = Array3::<f32>::zeros((2, 2, 3));
    for r in 0..2 {
        for c in 0..2 {
            data[[r, c, 0]] = 1.0;
            data[[r, c, 1]] = if r == 0 { 1.0 } else { 0.0 };
            data[[r, c, 2]] = 0.0;
        }
    }
    let sample = ImageSample::Rgb(data);
    let ImageSample::Rgb(out) = rasterize(&sample, 1, 1) else {
        panic!("expected rgb output");
    };
    assert_eq!(out.dim(), (1, 1, 3));
    assert_abs_diff_eq!(out[[0, 0, 0]], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(out[[0, 0, 1]], 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(out[[0, 0, 2]], 0.0, epsilon = 1e-6);
}

#[test]
fn test_rasterize_large_image_parallel_path() {
    let sample = ImageSample::Gray(Array2::from_elem((300, 300), 0.25));
    let out = rasterize(&sample, 30, 30);
    assert_eq!(out.shape(), vec![30, 30]);
    let ImageSample::Gray(out) = out else {
        panic!("expected gray output");
    };
    for &v in out.iter() {
        assert_abs_diff_eq!(v, 0.25, epsilon = 1e-6);
    }
}
