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

use std::{fmt, path::{Path,PathBuf}};
use odin_common::fs::filename;

pub const DEFAULT_REFERENCE_CAMERA: &'static str = "DSC-H50";

/// the coarse light category. This is also the name of the per-object subfolder that holds
/// all images taken under lights of this category
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub enum LightCategory {
    Amarela,
    Branca
}

impl LightCategory {
    /// the order in which we process categories
    pub const ALL: [LightCategory;2] = [LightCategory::Amarela, LightCategory::Branca];

    pub fn dir_name (&self)->&'static str {
        match self {
            LightCategory::Amarela => "amarela",
            LightCategory::Branca => "branca"
        }
    }

    /// the light code the reference image of this category was taken with
    pub fn reference_light_code (&self)->&'static str {
        match self {
            LightCategory::Amarela => "INC100",
            LightCategory::Branca => "D65"
        }
    }

    /// derive the category from a light classification string such as "amarela fraca"
    pub fn from_classification (classification: &str)->Self {
        if classification.to_lowercase().contains("amarela") { LightCategory::Amarela } else { LightCategory::Branca }
    }
}

impl fmt::Display for LightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}", self.dir_name())
    }
}

/// the (case insensitive) filename fragment that identifies the reference image, e.g. "caneca_INC100_DSC-H50"
pub fn reference_fragment (object_name: &str, category: LightCategory, reference_camera: &str)->String {
    format!("{}_{}_{}", object_name, category.reference_light_code(), reference_camera)
}

/// return the first entry of `files` whose filename contains the reference fragment for the given
/// object and category. Callers are responsible for the order of `files`
pub fn select_reference<P: AsRef<Path>> (files: &[P], object_name: &str, category: LightCategory, reference_camera: &str)->Option<PathBuf> {
    let fragment = reference_fragment( object_name, category, reference_camera).to_lowercase();

    files.iter()
        .map( |p| p.as_ref())
        .find( |p| filename(p).map( |name| name.to_lowercase().contains( &fragment)).unwrap_or(false))
        .map( |p| p.to_path_buf())
}
