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

//! camera and light identification from `<object>_<lightcode>_<cameratoken>[..].<ext>` filenames.
//! All lookups are first-match-wins over ordered tables, fallback heuristics are separate functions

pub const UNKNOWN: &'static str = "Desconhecida";

/// (lower case filename substring, camera display name), tested in this order
pub const CAMERA_PATTERNS: &[(&str, &str)] = &[
    ("dsc-h50", "Sony DSC-H50"),
    ("15pro",   "iPhone 15 Pro"),
    ("s24",     "Samsung S24"),
    ("s20fe",   "Samsung S20 FE"),
];

/// (lower case light code, light classification), tested in this order.
/// `inc100` has to come before `inc40` and `d65` before `d50` to keep the match deterministic
pub const LIGHT_CODES: &[(&str, &str)] = &[
    ("inc100", "amarela forte"),
    ("inc40",  "amarela fraca"),
    ("d65",    "branca forte"),
    ("d50",    "branca fraca"),
];

pub fn classify_camera (filename: &str)->String {
    let name = filename.to_lowercase();

    for (pattern, camera) in CAMERA_PATTERNS {
        if name.contains( pattern) {
            return camera.to_string()
        }
    }

    fallback_camera( &name)
}

/// take the last '_' token without extension if we have at least 3 tokens
pub fn fallback_camera (filename: &str)->String {
    let name = filename.to_lowercase();
    let tokens: Vec<&str> = name.split('_').collect();

    if tokens.len() >= 3 {
        let last = tokens[tokens.len()-1];
        let stem = last.split('.').next().unwrap_or(last);
        stem.to_uppercase()
    } else {
        UNKNOWN.to_string()
    }
}

/// returns (light code, light classification)
pub fn classify_light (filename: &str)->(String,String) {
    let name = filename.to_lowercase();

    for (code, classification) in LIGHT_CODES {
        if name.contains( code) {
            return (code.to_uppercase(), classification.to_string())
        }
    }

    fallback_light( &name)
}

/// coarse warm/cool bucket for names without a known light code.
/// Note the 'd' test matches almost any name that contains a 'd' anywhere (e.g. "caneca_led_s9").
/// Narrow this once it is clear which unknown codes should really map to 'branca'
pub fn fallback_light (filename: &str)->(String,String) {
    let name = filename.to_lowercase();

    if name.contains("inc") {
        ("INC".to_string(), "amarela".to_string())
    } else if name.contains('d') {
        ("D".to_string(), "branca".to_string())
    } else {
        (UNKNOWN.to_string(), UNKNOWN.to_string())
    }
}
