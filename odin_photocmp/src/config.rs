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

use std::path::{Path,PathBuf};
use serde::{Serialize,Deserialize};
use odin_common::fs::filepath_contents_as_string;
use crate::{errors::Result, metrics::DEFAULT_WIN_SIZE, reference::DEFAULT_REFERENCE_CAMERA};

pub const DEFAULT_OUTPUT_FILE: &'static str = "resultados_metricas.csv";
pub const DEFAULT_OBJECT_DIR_SUFFIX: &'static str = "_resize";
pub const DEFAULT_TABLE_DIR: &'static str = "tabelas_resultado";
pub const DEFAULT_TARGET_SIZE: u32 = 1944;
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// configuration of a comparison run. All fields have defaults so that a RON config only
/// has to list what differs, e.g.
/// ```ron
/// PhotoCmpConfig(
///     base_dir: "/data/photos",
///     object_dirs: ["caneca_resize", "urso_resize"],
/// )
/// ```
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct PhotoCmpConfig {
    /// directory that contains the object folders
    pub base_dir: PathBuf,

    /// object folders (relative to base_dir) to process in this order
    pub object_dirs: Vec<String>,

    /// suffix that is stripped from object folder names to get the object name
    pub object_dir_suffix: String,

    /// camera token of reference images
    pub reference_camera: String,

    /// accepted (lower case) extensions of comparison images
    pub image_extensions: Vec<String>,

    pub ssim_window: usize,

    /// report CSV, relative paths are resolved against the current working dir
    pub output_file: PathBuf,

    pub resize: ResizeConfig,
}

impl Default for PhotoCmpConfig {
    fn default()->Self {
        PhotoCmpConfig {
            base_dir: PathBuf::from("."),
            object_dirs: ["caneca", "controle", "jk", "stitch", "urso"].iter()
                .map( |o| format!("{o}{DEFAULT_OBJECT_DIR_SUFFIX}"))
                .collect(),
            object_dir_suffix: DEFAULT_OBJECT_DIR_SUFFIX.to_string(),
            reference_camera: DEFAULT_REFERENCE_CAMERA.to_string(),
            image_extensions: ["jpg", "jpeg", "png", "bmp"].iter().map( |e| e.to_string()).collect(),
            ssim_window: DEFAULT_WIN_SIZE,
            output_file: PathBuf::from( DEFAULT_OUTPUT_FILE),
            resize: ResizeConfig::default(),
        }
    }
}

impl PhotoCmpConfig {
    pub fn from_ron_str (s: &str)->Result<Self> {
        Ok( ron::from_str(s)? )
    }

    pub fn from_ron_file<P: AsRef<Path>> (path: P)->Result<Self> {
        let contents = filepath_contents_as_string( &path)?;
        Self::from_ron_str( &contents)
    }

    /// load from optional path, falling back to defaults
    pub fn load_or_default<P: AsRef<Path>> (opt_path: Option<P>)->Result<Self> {
        match opt_path {
            Some(path) => Self::from_ron_file( path),
            None => Ok( Self::default() )
        }
    }

    pub fn object_paths (&self)->Vec<PathBuf> {
        self.object_dirs.iter().map( |d| self.base_dir.join(d)).collect()
    }

    /// the display name of an object folder, e.g. "caneca" for "caneca_resize"
    pub fn object_name (&self, dir_name: &str)->String {
        dir_name.replace( &self.object_dir_suffix, "")
    }
}

/// settings for the square normalization stage that produces the object folders
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct ResizeConfig {
    /// source folders (relative to base_dir), output goes to "<dir><object_dir_suffix>"
    pub source_dirs: Vec<String>,

    pub target_size: u32,

    pub jpeg_quality: u8,

    /// accepted (lower case) extensions of source images
    pub source_extensions: Vec<String>,
}

impl Default for ResizeConfig {
    fn default()->Self {
        ResizeConfig {
            source_dirs: ["caneca", "controle", "jk", "stitch", "urso"].iter().map( |d| d.to_string()).collect(),
            target_size: DEFAULT_TARGET_SIZE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            source_extensions: ["jpg", "jpeg", "png", "bmp", "gif"].iter().map( |e| e.to_string()).collect(),
        }
    }
}
