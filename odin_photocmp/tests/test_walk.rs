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
#![allow(unused)]

use std::{cell::Cell, fs, path::{Path,PathBuf}};
use image::{Rgb, RgbImage};
use odin_photocmp::{
    metrics::score, reporter::Level,
    run_corpus, CorpusWalker, OdinPhotoCmpError, PhotoCmpConfig, RecordingReporter, Result, Scorer, Scores
};

// run with "cargo test test_xx -- --nocapture"

fn textured (w: u32, h: u32, shift: u8)->RgbImage {
    RgbImage::from_fn( w, h, |x,y| {
        Rgb([ ((x * 7 + y * 3) % 180 + 20) as u8 + shift,
              ((x * 11 + y * 5) % 160 + 30) as u8 + shift,
              ((x * 3 + y * 13) % 170 + 25) as u8 + shift ])
    })
}

fn save (img: &RgbImage, path: &Path) {
    fs::create_dir_all( path.parent().unwrap()).unwrap();
    img.save( path).unwrap();
}

fn config_for (base_dir: &Path, object_dirs: &[&str])->PhotoCmpConfig {
    PhotoCmpConfig {
        base_dir: base_dir.to_path_buf(),
        object_dirs: object_dirs.iter().map( |d| d.to_string()).collect(),
        output_file: base_dir.join("resultados_metricas.csv"),
        ..PhotoCmpConfig::default()
    }
}

/// checks that it never sees images of different size and counts how often it was called
struct CheckingScorer<'a> {
    calls: &'a Cell<usize>
}

impl<'a> Scorer for CheckingScorer<'a> {
    fn score (&mut self, reference: &RgbImage, comparison: &RgbImage)->Result<Scores> {
        assert_eq!( reference.dimensions(), comparison.dimensions(), "scorer got mismatched images");
        self.calls.set( self.calls.get() + 1);
        score( reference, comparison)
    }
}

/// always fails, as the engine does for a flat reference
struct FailingScorer;

impl Scorer for FailingScorer {
    fn score (&mut self, _reference: &RgbImage, _comparison: &RgbImage)->Result<Scores> {
        Err( OdinPhotoCmpError::OpFailed( "zero data range".into()))
    }
}

#[test]
fn test_walk_urso () {
    let tmp = tempfile::tempdir().unwrap();
    let amarela = tmp.path().join("urso_resize/amarela");
    save( &textured( 48, 48, 0), &amarela.join("urso_INC100_DSC-H50.jpg"));
    save( &textured( 48, 48, 8), &amarela.join("urso_INC40_15PRO.jpg"));

    let config = config_for( tmp.path(), &["urso_resize"]);
    let mut reporter = RecordingReporter::new();
    let records = CorpusWalker::new( &config, &mut reporter).walk_all();

    for r in &records { println!("{r:?}") }
    assert_eq!( records.len(), 1);

    let r = &records[0];
    assert_eq!( r.object, "urso");
    assert_eq!( r.camera, "iPhone 15 Pro");
    assert_eq!( r.light_code, "INC40");
    assert_eq!( r.light_classification, "amarela fraca");
    assert!( r.ssim > 0.0 && r.ssim <= 1.0);
    assert!( r.mse >= 0.0);

    // there is no branca/ subfolder
    assert!( reporter.contains( Level::Warn, "subfolder not found"));
    assert_eq!( reporter.count( Level::Error), 0);
}

#[test]
fn test_walker_filters_mismatched_sizes () {
    let tmp = tempfile::tempdir().unwrap();
    let branca = tmp.path().join("caneca_resize/branca");
    save( &textured( 40, 40, 0), &branca.join("caneca_D65_DSC-H50.png"));
    save( &textured( 40, 40, 5), &branca.join("caneca_D50_15PRO.png"));
    save( &textured( 40, 32, 5), &branca.join("caneca_D50_S24.png"));
    save( &textured( 32, 40, 5), &branca.join("caneca_D65_S20FE.png"));
    fs::write( branca.join("caneca_notes.txt"), "not an image").unwrap();

    let config = config_for( tmp.path(), &["caneca_resize"]);
    let calls = Cell::new(0);
    let mut reporter = RecordingReporter::new();
    let records = CorpusWalker::new( &config, &mut reporter)
        .with_scorer( Box::new( CheckingScorer{ calls: &calls }))
        .walk_all();

    assert_eq!( calls.get(), 1);
    assert_eq!( records.len(), 1);
    assert_eq!( records[0].camera, "iPhone 15 Pro");
    assert_eq!( records[0].light_classification, "branca fraca");

    assert_eq!( reporter.messages( Level::Warn).iter().filter( |m| m.contains("different sizes")).count(), 2);
}

#[test]
fn test_missing_reference_skips_category () {
    let tmp = tempfile::tempdir().unwrap();
    let obj_dir = tmp.path().join("jk_resize");
    save( &textured( 24, 24, 0), &obj_dir.join("amarela/jk_INC40_15PRO.jpg"));
    save( &textured( 24, 24, 0), &obj_dir.join("amarela/jk_INC40_S24.jpg"));
    save( &textured( 24, 24, 0), &obj_dir.join("branca/jk_D65_DSC-H50.jpg"));
    save( &textured( 24, 24, 3), &obj_dir.join("branca/jk_D50_S24.jpg"));

    let config = config_for( tmp.path(), &["jk_resize"]);
    let mut reporter = RecordingReporter::new();
    let records = CorpusWalker::new( &config, &mut reporter).walk_all();

    assert!( reporter.contains( Level::Warn, "reference image not found for jk/amarela"));
    assert_eq!( records.len(), 1);
    assert_eq!( records[0].camera, "Samsung S24");
    assert_eq!( records[0].light_code, "D50");
}

#[test]
fn test_corrupt_file_is_skipped () {
    let tmp = tempfile::tempdir().unwrap();
    let amarela = tmp.path().join("stitch_resize/amarela");
    save( &textured( 20, 20, 0), &amarela.join("stitch_INC100_DSC-H50.png"));
    save( &textured( 20, 20, 4), &amarela.join("stitch_INC100_S24.png"));
    fs::write( amarela.join("stitch_INC40_15PRO.jpg"), b"definitely not a jpeg").unwrap();

    let config = config_for( tmp.path(), &["stitch_resize"]);
    let mut reporter = RecordingReporter::new();
    let records = CorpusWalker::new( &config, &mut reporter).walk_all();

    assert_eq!( records.len(), 1);
    assert_eq!( records[0].camera, "Samsung S24");
    assert!( reporter.contains( Level::Error, "stitch_INC40_15PRO.jpg"));
}

#[test]
fn test_metric_failure_emits_no_record () {
    let tmp = tempfile::tempdir().unwrap();
    let amarela = tmp.path().join("urso_resize/amarela");
    save( &textured( 24, 24, 0), &amarela.join("urso_INC100_DSC-H50.png"));
    save( &textured( 24, 24, 2), &amarela.join("urso_INC40_S24.png"));

    let config = config_for( tmp.path(), &["urso_resize"]);
    let mut reporter = RecordingReporter::new();
    let records = CorpusWalker::new( &config, &mut reporter)
        .with_scorer( Box::new( FailingScorer))
        .walk_all();

    assert!( records.is_empty());
    let errors = reporter.messages( Level::Error);
    assert_eq!( errors.len(), 1);
    assert!( errors[0].contains("failed to compute metrics for urso_INC40_S24.png"));
}

#[test]
fn test_corrupt_reference_skips_category () {
    let tmp = tempfile::tempdir().unwrap();
    let obj_dir = tmp.path().join("urso_resize");
    save( &textured( 24, 24, 0), &obj_dir.join("amarela/urso_INC100_DSC-H50.jpg"));
    save( &textured( 24, 24, 4), &obj_dir.join("amarela/urso_INC40_S24.jpg"));
    fs::create_dir_all( obj_dir.join("branca")).unwrap();
    fs::write( obj_dir.join("branca/urso_D65_DSC-H50.jpg"), b"not a jpeg either").unwrap();
    save( &textured( 24, 24, 4), &obj_dir.join("branca/urso_D50_S24.jpg"));

    let config = config_for( tmp.path(), &["urso_resize"]);
    let mut reporter = RecordingReporter::new();
    let records = CorpusWalker::new( &config, &mut reporter).walk_all();

    assert_eq!( records.len(), 1);
    assert_eq!( records[0].light_code, "INC40");
    assert!( records.iter().all( |r| !r.light_classification.starts_with("branca")));
    assert!( reporter.contains( Level::Error, "failed to load reference image"));
    assert!( reporter.contains( Level::Error, "urso_D65_DSC-H50.jpg"));
}

#[test]
fn test_empty_corpus () {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_for( tmp.path(), &["caneca_resize", "urso_resize"]);
    let mut reporter = RecordingReporter::new();

    let res = run_corpus( &config, &mut reporter).unwrap();

    assert!( res.is_none());
    assert!( !config.output_file.exists());
    assert!( reporter.contains( Level::Warn, "object folder not found"));
    assert!( reporter.contains( Level::Warn, "no metric records"));
}
