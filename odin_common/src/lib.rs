/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

pub mod macros;
pub mod fs;

// syntactic sugar - this is just more readable in many cases
#[inline(always)] pub fn pow2(x:f64) -> f64 { x*x }

/// round to the given number of decimal places (half away from zero)
#[inline]
pub fn round_to (x: f64, decimals: i32)->f64 {
    let f = 10f64.powi(decimals);
    (x * f).round() / f
}
