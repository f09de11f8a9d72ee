#![no_main]

use libfuzzer_sys::fuzz_target;
use rice_codes::fuzz::codes::*;

fuzz_target!(|data: FuzzCase| harness(data));
