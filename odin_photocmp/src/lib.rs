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

//! photo comparison pipeline: images of the same objects taken with several cameras under several
//! lights are scored (SSIM,MSE) against a reference camera image of the same light category, and
//! the results are aggregated into a CSV report

use std::path::Path;
use image::RgbImage;
use tracing_subscriber::EnvFilter;

mod errors;
pub use errors::*;

pub mod identity;
pub mod reference;
pub mod metrics;
pub mod config;
pub mod reporter;
pub mod report;
pub mod walker;
pub mod resize;
pub mod tables;

pub use config::PhotoCmpConfig;
pub use metrics::{MetricEngine, Scorer, Scores};
pub use report::{MetricRecord, ReportTable, aggregate, read_report};
pub use reporter::{Reporter, TracingReporter, RecordingReporter};
pub use walker::CorpusWalker;

/// open any supported image format and normalize to 8bit RGB
pub fn load_rgb_image<P: AsRef<Path>> (path: P)->Result<RgbImage> {
    Ok( image::open( path.as_ref())?.to_rgb8() )
}

/// walk all configured object folders, aggregate and (if there are records) write the report
/// to the configured output file
pub fn run_corpus (config: &PhotoCmpConfig, reporter: &mut dyn Reporter)->Result<Option<ReportTable>> {
    let records = CorpusWalker::new( config, reporter).walk_all();

    match aggregate( records, reporter) {
        Some(table) => {
            table.persist( &config.output_file)?;
            reporter.info( &format!("report saved to {} ({} records)", config.output_file.display(), table.len()));
            Ok( Some(table) )
        }
        None => Ok( None )
    }
}

/// install a fmt subscriber that uses RUST_LOG to set the max level, "info" if not set
pub fn init_tracing () {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info"));
    // this only fails if there already is a global subscriber
    let _ = tracing_subscriber::fmt().with_env_filter( filter).try_init();
}
