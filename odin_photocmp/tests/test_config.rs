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

use std::{fs, path::PathBuf};
use odin_photocmp::PhotoCmpConfig;

// run with "cargo test test_xx -- --nocapture"

#[test]
fn test_defaults () {
    let config = PhotoCmpConfig::default();
    assert_eq!( config.object_dirs.len(), 5);
    assert_eq!( config.object_dirs[0], "caneca_resize");
    assert_eq!( config.object_name("urso_resize"), "urso");
    assert_eq!( config.ssim_window, 7);
    assert_eq!( config.output_file, PathBuf::from("resultados_metricas.csv"));
    assert_eq!( config.resize.target_size, 1944);
}

#[test]
fn test_partial_ron () {
    let config = PhotoCmpConfig::from_ron_str( r#"PhotoCmpConfig( base_dir: "/tmp/photos", object_dirs: ["urso_resize"], resize: ( target_size: 512 ) )"#).unwrap();
    assert_eq!( config.base_dir, PathBuf::from("/tmp/photos"));
    assert_eq!( config.object_paths(), vec![PathBuf::from("/tmp/photos/urso_resize")]);
    assert_eq!( config.reference_camera, "DSC-H50");
    assert_eq!( config.resize.target_size, 512);
    assert_eq!( config.resize.jpeg_quality, 95);
}

#[test]
fn test_invalid_ron () {
    assert!( PhotoCmpConfig::from_ron_str("PhotoCmpConfig( ssim_window: \"seven\" )").is_err());
}

#[test]
fn test_load_or_default () {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("photocmp.ron");
    fs::write( &path, "PhotoCmpConfig( output_file: \"metrics.csv\", ssim_window: 11 )").unwrap();

    let config = PhotoCmpConfig::load_or_default( Some(&path)).unwrap();
    assert_eq!( config.output_file, PathBuf::from("metrics.csv"));
    assert_eq!( config.ssim_window, 11);

    let config = PhotoCmpConfig::load_or_default( None::<PathBuf>).unwrap();
    assert_eq!( config, PhotoCmpConfig::default());

    assert!( PhotoCmpConfig::load_or_default( Some(tmp.path().join("missing.ron"))).is_err());
}
