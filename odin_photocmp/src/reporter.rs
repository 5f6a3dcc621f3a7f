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

use tracing::{info,warn,error};

/// the diagnostics sink of a single run, passed into walkers and processing stages
pub trait Reporter {
    fn info (&mut self, msg: &str);
    fn warn (&mut self, msg: &str);
    fn error (&mut self, msg: &str);
}

/// the default reporter that forwards to `tracing`
#[derive(Debug,Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info (&mut self, msg: &str) { info!("{msg}") }
    fn warn (&mut self, msg: &str) { warn!("{msg}") }
    fn error (&mut self, msg: &str) { error!("{msg}") }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Level { Info, Warn, Error }

/// a reporter that keeps all messages, mostly used to verify skip behavior
#[derive(Debug,Default)]
pub struct RecordingReporter {
    pub entries: Vec<(Level,String)>
}

impl RecordingReporter {
    pub fn new()->Self { RecordingReporter::default() }

    pub fn count (&self, level: Level)->usize {
        self.entries.iter().filter( |(l,_)| *l == level).count()
    }

    pub fn messages (&self, level: Level)->Vec<&str> {
        self.entries.iter().filter( |(l,_)| *l == level).map( |(_,m)| m.as_str()).collect()
    }

    pub fn contains (&self, level: Level, fragment: &str)->bool {
        self.entries.iter().any( |(l,m)| *l == level && m.contains( fragment))
    }
}

impl Reporter for RecordingReporter {
    fn info (&mut self, msg: &str) { self.entries.push( (Level::Info, msg.to_string())) }
    fn warn (&mut self, msg: &str) { self.entries.push( (Level::Warn, msg.to_string())) }
    fn error (&mut self, msg: &str) { self.entries.push( (Level::Error, msg.to_string())) }
}
