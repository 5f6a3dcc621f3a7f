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

use std::fs;
use std::path::Path;
use odin_common::fs::{ensure_writable_dir, filename, filestem, has_extension_in, sorted_files_in_dir, filepath_contents_as_string};

// run with "cargo test test_xx -- --nocapture"

#[test]
fn test_sorted_files() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();

    for name in ["c.jpg", "a.png", "B.bmp", "b.jpg"] {
        fs::write( dir.join(name), b"x").unwrap();
    }
    fs::create_dir( dir.join("a_subdir")).unwrap();

    let files = sorted_files_in_dir( dir).unwrap();
    let names: Vec<&str> = files.iter().filter_map( |p| filename(p)).collect();
    for n in &names { println!("{n}") }

    assert_eq!( names, vec!["B.bmp", "a.png", "b.jpg", "c.jpg"]);
}

#[test]
fn test_sorted_files_missing_dir() {
    let tmp = tempfile::tempdir().unwrap();
    assert!( sorted_files_in_dir( tmp.path().join("nope")).is_err());
}

#[test]
fn test_extensions() {
    let exts: Vec<String> = vec!["jpg".into(), "png".into()];

    assert!( has_extension_in( "foo/urso_INC40_15PRO.JPG", &exts));
    assert!( has_extension_in( Path::new("a.png"), &exts));
    assert!( !has_extension_in( "a.gif", &exts));
    assert!( !has_extension_in( "jpg", &exts));

    assert_eq!( filestem( Path::new("x/urso_D65_S24.heic")), Some("urso_D65_S24"));
}

#[test]
fn test_ensure_writable_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("tables/nested");

    ensure_writable_dir( &dir).unwrap();
    assert!( dir.is_dir());
    ensure_writable_dir( &dir).unwrap(); // existing is fine

    let path = dir.join("t.txt");
    fs::write( &path, "hello").unwrap();
    assert_eq!( filepath_contents_as_string( &path).unwrap(), "hello");
}
