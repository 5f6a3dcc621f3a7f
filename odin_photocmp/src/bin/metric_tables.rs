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

use anyhow::Result;
use odin_common::{define_cli, check_cli};
use odin_photocmp::{
    config::{DEFAULT_OUTPUT_FILE, DEFAULT_TABLE_DIR},
    init_tracing, read_report, tables::write_group_tables, TracingReporter
};

define_cli! { ARGS [about="split a metrics report into per (object,light category) tables"] =
    output_dir: String [help="directory for the table files", long, short, default_value=DEFAULT_TABLE_DIR],
    report: String [help="pathname of the metrics report CSV", default_value=DEFAULT_OUTPUT_FILE]
}

fn main()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let records = read_report( &ARGS.report)?;
    let paths = write_group_tables( &records, &ARGS.output_dir, &mut TracingReporter)?;
    println!("{} tables written to {}", paths.len(), ARGS.output_dir);

    Ok(())
}
