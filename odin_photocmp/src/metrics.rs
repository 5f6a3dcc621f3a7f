/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! image similarity metrics between two RGB images of identical dimensions:
//!   - mean structural similarity (SSIM) of the luma channel, computed over a uniform sliding window
//!   - mean squared error (MSE) per RGB channel, averaged over the three channels
//!
//! the SSIM formulation follows the standard Wang et al. definition with the (common) choices
//! K1=0.01, K2=0.03, sample covariance normalization and a border of win_size/2 pixels that is
//! excluded from the mean

use image::RgbImage;
use ndarray::{Array2, Zip};
use odin_common::pow2;
use crate::errors::{Result, OdinPhotoCmpError};

pub const DEFAULT_WIN_SIZE: usize = 7;

const K1: f64 = 0.01;
const K2: f64 = 0.03;

/// ITU-R BT.709 luma weights for R,G,B
const LUMA_WEIGHTS: [f64;3] = [0.2125, 0.7154, 0.0721];

const R: usize = 0;
const G: usize = 1;
const B: usize = 2;

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Scores {
    pub ssim: f64,
    pub mse: f64
}

/// the seam between corpus walking and scoring
pub trait Scorer {
    fn score (&mut self, reference: &RgbImage, comparison: &RgbImage)->Result<Scores>;
}

/// the SSIM/MSE engine with a configurable SSIM window size
#[derive(Debug,Clone,Copy)]
pub struct MetricEngine {
    pub win_size: usize
}

impl MetricEngine {
    pub fn new (win_size: usize)->Self { MetricEngine{ win_size } }
}

impl Default for MetricEngine {
    fn default()->Self { MetricEngine::new( DEFAULT_WIN_SIZE) }
}

impl Scorer for MetricEngine {
    fn score (&mut self, reference: &RgbImage, comparison: &RgbImage)->Result<Scores> {
        score_with_window( reference, comparison, self.win_size)
    }
}

pub fn check_equal_dimensions (img1: &RgbImage, img2: &RgbImage)->Result<()> {
    if img1.dimensions() != img2.dimensions() {
        Err( OdinPhotoCmpError::InvalidDimensions( format!("image dimensions differ: {:?} vs {:?}", img1.dimensions(), img2.dimensions())))
    } else {
        Ok(())
    }
}

/// compute (ssim,mse) with the default 7x7 window
pub fn score (reference: &RgbImage, comparison: &RgbImage)->Result<Scores> {
    score_with_window( reference, comparison, DEFAULT_WIN_SIZE)
}

/// compute full precision (ssim,mse) of `comparison` relative to `reference`. The SSIM data range
/// is taken from the reference luma (max - min). Non-finite results are reported as errors
pub fn score_with_window (reference: &RgbImage, comparison: &RgbImage, win_size: usize)->Result<Scores> {
    check_equal_dimensions( reference, comparison)?;

    let ref_luma = to_luma_f64( reference);
    let comp_luma = to_luma_f64( comparison);
    let data_range = value_range( &ref_luma);

    let ssim = mean_ssim( &ref_luma, &comp_luma, win_size, data_range)?;
    let mse = mean_rgb_mse( reference, comparison)?;

    if !ssim.is_finite() {
        return Err( OdinPhotoCmpError::OpFailed( format!("non-finite SSIM (data range {data_range})")))
    }
    if !mse.is_finite() {
        return Err( OdinPhotoCmpError::OpFailed( "non-finite MSE".into()))
    }

    Ok( Scores{ ssim, mse } )
}

/// luma in [0..1] as a (height,width) array
pub fn to_luma_f64 (img: &RgbImage)->Array2<f64> {
    let (w,h) = img.dimensions();

    Array2::from_shape_fn( (h as usize, w as usize), |(y,x)| {
        let px = img.get_pixel( x as u32, y as u32).0;
        LUMA_WEIGHTS[R] * (px[R] as f64 / 255.0)
            + LUMA_WEIGHTS[G] * (px[G] as f64 / 255.0)
            + LUMA_WEIGHTS[B] * (px[B] as f64 / 255.0)
    })
}

/// max - min of all array values (0 for empty arrays)
pub fn value_range (a: &Array2<f64>)->f64 {
    if a.is_empty() { return 0.0 }

    let (min,max) = a.iter().fold( (f64::MAX, f64::MIN), |(min,max), &v| (min.min(v), max.max(v)));
    max - min
}

/// mean SSIM of two equally shaped gray images over all full `win_size` x `win_size` windows
pub fn mean_ssim (x: &Array2<f64>, y: &Array2<f64>, win_size: usize, data_range: f64)->Result<f64> {
    if x.dim() != y.dim() {
        return Err( OdinPhotoCmpError::InvalidDimensions( format!("gray image dimensions differ: {:?} vs {:?}", x.dim(), y.dim())))
    }
    if win_size < 3 || win_size % 2 == 0 {
        return Err( OdinPhotoCmpError::IllegalArgument( format!("window size has to be odd and >= 3: {win_size}")))
    }
    let (h,w) = x.dim();
    if h < win_size || w < win_size {
        return Err( OdinPhotoCmpError::InvalidDimensions( format!("image {w}x{h} smaller than window {win_size}x{win_size}")))
    }

    let n = (win_size * win_size) as f64;
    let cov_norm = n / (n - 1.0);
    let c1 = pow2(K1 * data_range);
    let c2 = pow2(K2 * data_range);

    let xx = x * x;
    let yy = y * y;
    let xy = x * y;

    let ux = box_mean( x, win_size);
    let uy = box_mean( y, win_size);
    let uxx = box_mean( &xx, win_size);
    let uyy = box_mean( &yy, win_size);
    let uxy = box_mean( &xy, win_size);

    let sum = Zip::from(&ux).and(&uy).and(&uxx).and(&uyy).and(&uxy)
        .fold( 0.0, |acc, &ux, &uy, &uxx, &uyy, &uxy| {
            let vx = cov_norm * (uxx - ux * ux);
            let vy = cov_norm * (uyy - uy * uy);
            let vxy = cov_norm * (uxy - ux * uy);

            let a1 = 2.0 * ux * uy + c1;
            let a2 = 2.0 * vxy + c2;
            let b1 = ux * ux + uy * uy + c1;
            let b2 = vx + vy + c2;

            acc + (a1 * a2) / (b1 * b2)
        });

    Ok( sum / ux.len() as f64 )
}

/// mean over all full windows ('valid' region), result has dimensions (h-win_size+1, w-win_size+1).
/// This is separable so we first sum rows, then columns
fn box_mean (a: &Array2<f64>, win_size: usize)->Array2<f64> {
    let (h,w) = a.dim();
    let ow = w + 1 - win_size;
    let oh = h + 1 - win_size;
    let n = (win_size * win_size) as f64;

    let row_sums = Array2::from_shape_fn( (h, ow), |(y,x)| {
        (x..x+win_size).map( |i| a[[y,i]]).sum::<f64>()
    });

    Array2::from_shape_fn( (oh, ow), |(y,x)| {
        (y..y+win_size).map( |j| row_sums[[j,x]]).sum::<f64>() / n
    })
}

/// MSE of raw 8bit intensities per channel, averaged over R,G,B
pub fn mean_rgb_mse (img1: &RgbImage, img2: &RgbImage)->Result<f64> {
    check_equal_dimensions( img1, img2)?;

    let (w,h) = img1.dimensions();
    let n_pixels = (w as usize) * (h as usize);
    if n_pixels == 0 {
        return Err( OdinPhotoCmpError::InvalidDimensions("empty image".into()))
    }

    let mut sq_sums = [0.0f64; 3];
    for (p1,p2) in img1.pixels().zip( img2.pixels()) {
        for c in [R,G,B] {
            let d = p1.0[c] as f64 - p2.0[c] as f64;
            sq_sums[c] += d * d;
        }
    }

    let n = n_pixels as f64;
    let channel_mse = [sq_sums[R] / n, sq_sums[G] / n, sq_sums[B] / n];

    Ok( (channel_mse[R] + channel_mse[G] + channel_mse[B]) / 3.0 )
}
