use ndarray::{s, Array2, Array3, ArrayView2, Axis};
use rayon::prelude::*;

use crate::consts::{COLOR_CHANNEL_COUNT, PARALLEL_PIXEL_THRESHOLD};
use crate::sample::ImageSample;

/// Decimate a sample onto a `rows x cols` grid by area averaging.
///
/// Each output cell is the mean of the source pixels it covers. A grid equal
/// to the source shape returns an unchanged copy.
pub fn rasterize(sample: &ImageSample, rows: usize, cols: usize) -> ImageSample {
    if rows == sample.height() && cols == sample.width() {
        return sample.clone();
    }

    match sample {
        ImageSample::Gray(data) => ImageSample::Gray(decimate_plane(data.view(), rows, cols)),
        ImageSample::Rgb(data) => {
            let mut out = Array3::<f32>::zeros((rows, cols, COLOR_CHANNEL_COUNT));
            for ch in 0..COLOR_CHANNEL_COUNT {
                let plane = decimate_plane(data.index_axis(Axis(2), ch), rows, cols);
                out.index_axis_mut(Axis(2), ch).assign(&plane);
            }
            ImageSample::Rgb(out)
        }
    }
}

/// Source index range `[start, end)` covered by output cell `index`.
fn cell_bounds(index: usize, out_len: usize, in_len: usize) -> (usize, usize) {
    let start = index * in_len / out_len;
    let end = ((index + 1) * in_len / out_len).max(start + 1).min(in_len);
    (start, end)
}

fn decimate_plane(plane: ArrayView2<f32>, rows: usize, cols: usize) -> Array2<f32> {
    let (h, w) = plane.dim();

    let decimate_row = |row: usize| -> Vec<f32> {
        let (r0, r1) = cell_bounds(row, rows, h);
        (0..cols)
            .map(|col| {
                let (c0, c1) = cell_bounds(col, cols, w);
                plane.slice(s![r0..r1, c0..c1]).mean().unwrap_or(0.0)
            })
            .collect()
    };

    let row_data: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..rows).into_par_iter().map(&decimate_row).collect()
    } else {
        (0..rows).map(&decimate_row).collect()
    };

    let mut out = Array2::<f32>::zeros((rows, cols));
    for (row, values) in row_data.into_iter().enumerate() {
        for (col, val) in values.into_iter().enumerate() {
            out[[row, col]] = val;
        }
    }
    out
}
