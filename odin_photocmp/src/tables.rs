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

//! per (object, light category) tables derived from a metrics report

use std::{collections::BTreeMap, path::{Path,PathBuf}};
use serde::Serialize;
use odin_common::fs::ensure_writable_dir;
use crate::{
    errors::Result,
    reference::LightCategory,
    report::{MetricRecord, SSIM_DECIMALS, MSE_DECIMALS},
    reporter::Reporter
};

/// a table row with pre-formatted scores
#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct GroupRow {
    #[serde(rename="Objeto")]
    pub object: String,

    #[serde(rename="Luz")]
    pub light_code: String,

    #[serde(rename="Camera")]
    pub camera: String,

    #[serde(rename="SSIM")]
    pub ssim: String,

    #[serde(rename="MSE")]
    pub mse: String,
}

impl From<&MetricRecord> for GroupRow {
    fn from (r: &MetricRecord)->Self {
        GroupRow {
            object: r.object.clone(),
            light_code: r.light_code.clone(),
            camera: r.camera.clone(),
            ssim: format!("{:.*}", SSIM_DECIMALS as usize, r.ssim),
            mse: format!("{:.*}", MSE_DECIMALS as usize, r.mse),
        }
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct MetricGroup {
    pub object: String,
    pub category: LightCategory,
    pub rows: Vec<GroupRow>
}

impl MetricGroup {
    pub fn file_name (&self)->String {
        format!("{}_{}.csv", self.object, self.category)
    }

    pub fn write_csv<P: AsRef<Path>> (&self, dir: P)->Result<PathBuf> {
        let path = dir.as_ref().join( self.file_name());
        let mut csv_writer = csv::Writer::from_path( &path)?;
        for row in &self.rows {
            csv_writer.serialize( row)?;
        }
        csv_writer.flush()?;
        Ok( path )
    }
}

/// group records by (object, category derived from the light classification), ordered by
/// object and category. Rows within a group are ordered by (camera, light code)
pub fn group_records (records: &[MetricRecord])->Vec<MetricGroup> {
    let mut map: BTreeMap<(String,LightCategory), Vec<&MetricRecord>> = BTreeMap::new();

    for r in records {
        let category = LightCategory::from_classification( &r.light_classification);
        map.entry( (r.object.clone(), category)).or_default().push( r);
    }

    map.into_iter().map( |((object,category), mut recs)| {
        recs.sort_by( |a,b| (a.camera.as_str(), a.light_code.as_str()).cmp( &(b.camera.as_str(), b.light_code.as_str())));
        let rows = recs.into_iter().map( GroupRow::from).collect();
        MetricGroup { object, category, rows }
    }).collect()
}

/// write one CSV per group into `dir`, returning the paths of the written files.
/// Failing groups are reported and skipped
pub fn write_group_tables<P: AsRef<Path>> (records: &[MetricRecord], dir: P, reporter: &mut dyn Reporter)->Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    ensure_writable_dir( dir)?;

    let mut paths = Vec::new();
    for group in group_records( records) {
        match group.write_csv( dir) {
            Ok(path) => {
                reporter.info( &format!("created {}", group.file_name()));
                paths.push( path);
            }
            Err(e) => reporter.error( &format!("failed to create {}: {e}", group.file_name()))
        }
    }

    Ok( paths )
}
