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

use std::{fs::File, io::BufWriter, path::{Path,PathBuf}};
use image::{codecs::jpeg::JpegEncoder, imageops::{self, FilterType}, Rgb, RgbImage};
use odin_common::fs::{ensure_writable_dir, extension, filename, filestem, has_extension_in, sorted_files_in_dir};
use crate::{
    config::PhotoCmpConfig,
    errors::{Result, OdinPhotoCmpError},
    load_rgb_image,
    reporter::Reporter
};

const PAD_COLOR: Rgb<u8> = Rgb([255,255,255]);

/// phone image formats without a decoder, reported when skipped
pub const UNSUPPORTED_EXTENSIONS: [&str;2] = ["heic", "heif"];

/// make an image square with side length = image height. Wide images are center-cropped, tall
/// images are centered horizontally on a white canvas
pub fn square_image (img: &RgbImage)->RgbImage {
    let (w,h) = img.dimensions();

    if w > h {
        let x = (w - h) / 2;
        imageops::crop_imm( img, x, 0, h, h).to_image()
    } else if w < h {
        let mut canvas = RgbImage::from_pixel( h, h, PAD_COLOR);
        let x = (h - w) / 2;
        imageops::overlay( &mut canvas, img, x as i64, 0);
        canvas
    } else {
        img.clone()
    }
}

/// square and resample to `target_size` x `target_size`
pub fn normalize_image (img: &RgbImage, target_size: u32)->Result<RgbImage> {
    if target_size == 0 {
        return Err( OdinPhotoCmpError::IllegalArgument("target size must be > 0".into()))
    }
    if img.width() == 0 || img.height() == 0 {
        return Err( OdinPhotoCmpError::InvalidDimensions( format!("empty image {:?}", img.dimensions())))
    }

    let sq = square_image( img);
    if sq.width() == target_size {
        Ok( sq )
    } else {
        Ok( imageops::resize( &sq, target_size, target_size, FilterType::Lanczos3) )
    }
}

pub fn save_jpeg<P: AsRef<Path>> (img: &RgbImage, path: P, quality: u8)->Result<()> {
    let writer = BufWriter::new( File::create( path.as_ref())?);
    let encoder = JpegEncoder::new_with_quality( writer, quality);
    img.write_with_encoder( encoder)?;
    Ok(())
}

#[derive(Debug,Default,Clone,Copy,PartialEq,Eq)]
pub struct ResizeStats {
    pub processed: usize,
    pub errors: usize,
}

/// normalize all images with accepted extensions in `src_dir` into `tgt_dir` as `<stem>.jpg`.
/// Per-file failures are reported and counted
pub fn resize_dir<P,Q> (src_dir: P, tgt_dir: Q, config: &PhotoCmpConfig, reporter: &mut dyn Reporter)->Result<ResizeStats>
    where P: AsRef<Path>, Q: AsRef<Path>
{
    let src_dir = src_dir.as_ref();
    let tgt_dir = tgt_dir.as_ref();
    let rc = &config.resize;

    let files = sorted_files_in_dir( src_dir)?;
    ensure_writable_dir( tgt_dir)?;
    reporter.info( &format!("processing folder: {} -> {}", src_dir.display(), tgt_dir.display()));

    let mut stats = ResizeStats::default();

    for path in files {
        let fname = filename( &path).unwrap_or_default();
        if !has_extension_in( &path, &rc.source_extensions) {
            if is_unsupported_image( &path) {
                reporter.warn( &format!("  skipped {fname}: no HEIF decoder, convert to jpg first"));
            }
            continue
        }

        match resize_file( &path, tgt_dir, rc.target_size, rc.jpeg_quality) {
            Ok(tgt_path) => {
                stats.processed += 1;
                reporter.info( &format!("  processed: {fname} -> {}", filename( &tgt_path).unwrap_or_default()));
            }
            Err(e) => {
                stats.errors += 1;
                reporter.error( &format!("  failed to process {fname}: {e}"));
            }
        }
    }

    reporter.info( &format!("folder {}: {} images processed, {} errors", src_dir.display(), stats.processed, stats.errors));
    Ok( stats )
}

fn is_unsupported_image (path: &Path)->bool {
    extension( path).map( |ext| UNSUPPORTED_EXTENSIONS.contains( &ext.to_lowercase().as_str())).unwrap_or(false)
}

fn resize_file (path: &Path, tgt_dir: &Path, target_size: u32, quality: u8)->Result<PathBuf> {
    let stem = filestem( path).ok_or_else( || OdinPhotoCmpError::IllegalArgument( format!("no file stem: {}", path.display())))?;
    let img = load_rgb_image( path)?;
    let out_img = normalize_image( &img, target_size)?;

    let tgt_path = tgt_dir.join( format!("{stem}.jpg"));
    save_jpeg( &out_img, &tgt_path, quality)?;
    Ok( tgt_path )
}

/// run `resize_dir` for all configured source folders, writing into "<dir><object_dir_suffix>".
/// Missing source folders are reported and skipped
pub fn resize_corpus (config: &PhotoCmpConfig, reporter: &mut dyn Reporter)->Result<ResizeStats> {
    let mut total = ResizeStats::default();

    for dir in &config.resize.source_dirs {
        let src_dir = config.base_dir.join( dir);
        if !src_dir.is_dir() {
            reporter.warn( &format!("folder '{}' not found, skipping", src_dir.display()));
            continue
        }

        let tgt_dir = config.base_dir.join( format!("{dir}{}", config.object_dir_suffix));
        match resize_dir( &src_dir, &tgt_dir, config, reporter) {
            Ok(stats) => {
                total.processed += stats.processed;
                total.errors += stats.errors;
            }
            Err(e) => reporter.error( &format!("failed to process folder {}: {e}", src_dir.display()))
        }
    }

    reporter.info("processing finished");
    Ok( total )
}
