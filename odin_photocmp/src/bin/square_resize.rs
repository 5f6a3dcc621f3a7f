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

use std::path::PathBuf;
use anyhow::Result;
use odin_common::{define_cli, check_cli};
use odin_photocmp::{init_tracing, resize::resize_corpus, PhotoCmpConfig, TracingReporter};

define_cli! { ARGS [about="square-crop/pad and resize source photo folders into their <dir>_resize counterparts"] =
    config: Option<String> [help="pathname of RON config (defaults are used if not set)", long, short],
    base_dir: Option<String> [help="directory that contains the source folders", long],
    size: Option<u32> [help="side length of output images in pixels", long, short]
}

fn main()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let mut config = PhotoCmpConfig::load_or_default( ARGS.config.as_ref())?;
    if let Some(base_dir) = &ARGS.base_dir { config.base_dir = PathBuf::from( base_dir) }
    if let Some(size) = ARGS.size { config.resize.target_size = size }

    let stats = resize_corpus( &config, &mut TracingReporter)?;
    println!("{} images processed, {} errors", stats.processed, stats.errors);

    Ok(())
}
