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

use std::path::Path;
use image::RgbImage;
use odin_common::fs::{filename, has_extension_in, path_to_lossy_string, sorted_files_in_dir};
use crate::{
    config::PhotoCmpConfig,
    load_rgb_image,
    metrics::{MetricEngine, Scorer},
    reference::{select_reference, LightCategory},
    report::MetricRecord,
    reporter::Reporter
};

/// walks object folders of the form
/// ```text
///   <object>_resize/
///       amarela/  <object>_INC100_DSC-H50.jpg  <object>_INC40_15PRO.jpg ...
///       branca/   <object>_D65_DSC-H50.jpg     <object>_D50_S24.jpg ...
/// ```
/// and scores each image against the reference of its light category. Failures are reported
/// and skipped at the smallest possible unit (file, category), they never abort the walk
pub struct CorpusWalker<'a> {
    config: &'a PhotoCmpConfig,
    reporter: &'a mut dyn Reporter,
    scorer: Box<dyn Scorer + 'a>,
}

impl<'a> CorpusWalker<'a> {
    pub fn new (config: &'a PhotoCmpConfig, reporter: &'a mut dyn Reporter)->Self {
        let scorer = Box::new( MetricEngine::new( config.ssim_window));
        CorpusWalker { config, reporter, scorer }
    }

    /// replace the default metric engine
    pub fn with_scorer (mut self, scorer: Box<dyn Scorer + 'a>)->Self {
        self.scorer = scorer;
        self
    }

    /// walk all configured object folders in order. Missing folders are reported and skipped
    pub fn walk_all (&mut self)->Vec<MetricRecord> {
        let mut records = Vec::new();

        for object_dir in self.config.object_paths() {
            if object_dir.is_dir() {
                let mut object_records = self.walk( &object_dir);
                records.append( &mut object_records);
            } else {
                self.reporter.warn( &format!("object folder not found: {}", object_dir.display()));
            }
        }

        records
    }

    /// walk a single object folder
    pub fn walk (&mut self, object_dir: &Path)->Vec<MetricRecord> {
        let dir_name = filename( &object_dir).map( |s| s.to_string()).unwrap_or_else( || path_to_lossy_string( object_dir));
        let object_name = self.config.object_name( &dir_name);
        let mut records = Vec::new();

        self.reporter.info( &format!("processing object: {object_name}"));

        for category in LightCategory::ALL {
            self.walk_category( object_dir, &object_name, category, &mut records);
        }

        records
    }

    fn walk_category (&mut self, object_dir: &Path, object_name: &str, category: LightCategory, records: &mut Vec<MetricRecord>) {
        let category_dir = object_dir.join( category.dir_name());
        if !category_dir.is_dir() {
            self.reporter.warn( &format!("subfolder not found: {}", category_dir.display()));
            return
        }

        let files = match sorted_files_in_dir( &category_dir) {
            Ok(files) => files,
            Err(e) => {
                self.reporter.error( &format!("failed to list {}: {e}", category_dir.display()));
                return
            }
        };

        let Some(ref_path) = select_reference( &files, object_name, category, &self.config.reference_camera) else {
            self.reporter.warn( &format!("reference image not found for {object_name}/{category}"));
            return
        };

        let ref_img = match load_rgb_image( &ref_path) {
            Ok(img) => img,
            Err(e) => {
                self.reporter.error( &format!("failed to load reference image {}: {e}", ref_path.display()));
                return
            }
        };
        self.reporter.info( &format!("loaded reference: {}", filename( &ref_path).unwrap_or_default()));

        for path in files.iter().filter( |p| **p != ref_path) {
            if !has_extension_in( path, &self.config.image_extensions) {
                continue
            }
            if let Some(rec) = self.score_file( &ref_img, path, object_name) {
                records.push( rec);
            }
        }
    }

    fn score_file (&mut self, ref_img: &RgbImage, path: &Path, object_name: &str)->Option<MetricRecord> {
        let fname = filename( &path).unwrap_or_default();

        let img = match load_rgb_image( path) {
            Ok(img) => img,
            Err(e) => {
                self.reporter.error( &format!("failed to load {fname}: {e}"));
                return None
            }
        };

        if img.dimensions() != ref_img.dimensions() {
            self.reporter.warn( &format!("different sizes: {fname} {:?} vs reference {:?}", img.dimensions(), ref_img.dimensions()));
            return None
        }

        match self.scorer.score( ref_img, &img) {
            Ok(scores) => {
                self.reporter.info( &format!("  processed: {fname} - SSIM: {:.4}, MSE: {:.2}", scores.ssim, scores.mse));
                Some( MetricRecord::new( object_name, fname, scores) )
            }
            Err(e) => {
                self.reporter.error( &format!("failed to compute metrics for {fname}: {e}"));
                None
            }
        }
    }
}
