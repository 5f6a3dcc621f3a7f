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

use std::{fs::File, path::Path};
use serde::{Serialize,Deserialize};
use odin_common::round_to;
use crate::{
    errors::Result,
    identity::{classify_camera, classify_light},
    metrics::Scores,
    reporter::Reporter
};

pub const SSIM_DECIMALS: i32 = 4;
pub const MSE_DECIMALS: i32 = 2;

/// one scored comparison image. Serialized field names are the report column headers,
/// `Objeto` is accepted on input for reports written by older tools
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct MetricRecord {
    #[serde(rename="Object", alias="Objeto")]
    pub object: String,

    #[serde(rename="Camera")]
    pub camera: String,

    #[serde(rename="Luz")]
    pub light_code: String,

    #[serde(rename="Classificacao_Luz")]
    pub light_classification: String,

    #[serde(rename="SSIM")]
    pub ssim: f64,

    #[serde(rename="MSE")]
    pub mse: f64,
}

impl MetricRecord {
    /// classify camera and light from the comparison image filename and round the scores
    pub fn new (object: &str, filename: &str, scores: Scores)->Self {
        let (light_code, light_classification) = classify_light( filename);

        MetricRecord {
            object: object.to_string(),
            camera: classify_camera( filename),
            light_code,
            light_classification,
            ssim: round_to( scores.ssim, SSIM_DECIMALS),
            mse: round_to( scores.mse, MSE_DECIMALS),
        }
    }

    fn sort_key (&self)->(&str,&str,&str) {
        (self.object.as_str(), self.camera.as_str(), self.light_code.as_str())
    }
}

/// the final, ordered report. Only constructed through `aggregate`, which guarantees it is not empty
#[derive(Debug,Clone,PartialEq)]
pub struct ReportTable {
    records: Vec<MetricRecord>
}

impl ReportTable {
    pub const COLUMNS: [&'static str;6] = ["Object", "Camera", "Luz", "Classificacao_Luz", "SSIM", "MSE"];

    pub fn records (&self)->&[MetricRecord] { &self.records }

    pub fn len (&self)->usize { self.records.len() }

    /// write as UTF-8 CSV with header row
    pub fn persist<P: AsRef<Path>> (&self, path: P)->Result<()> {
        let file = File::create( path.as_ref())?;
        self.write_csv( file)
    }

    pub fn write_csv<W: std::io::Write> (&self, writer: W)->Result<()> {
        let mut csv_writer = csv::Writer::from_writer( writer);
        for rec in &self.records {
            csv_writer.serialize( rec)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// sort records by (object,camera,light code). Returns None (and warns) if there is nothing to report
pub fn aggregate (mut records: Vec<MetricRecord>, reporter: &mut dyn Reporter)->Option<ReportTable> {
    if records.is_empty() {
        reporter.warn("no metric records to report");
        None
    } else {
        records.sort_by( |a,b| a.sort_key().cmp( &b.sort_key()));
        Some( ReportTable{ records } )
    }
}

/// read a report CSV back in
pub fn read_report<P: AsRef<Path>> (path: P)->Result<Vec<MetricRecord>> {
    let mut csv_reader = csv::Reader::from_path( path.as_ref())?;
    let mut records = Vec::new();

    for res in csv_reader.deserialize::<MetricRecord>() {
        records.push( res?);
    }

    Ok( records )
}
