//! TOML → JSON conversion module.
//!
//! Build with `cargo build --release --target wasm32-unknown-unknown`.
//! Exports:
//! - `bazel_wasm_allocate(size: u32) -> ptr` (null if the size is refused)
//! - `toml_to_json(input_ptr, input_len, output_ptr_ptr, output_len_ptr) -> i32`
//! - `_initialize()`

use tomlwasm_convert::TomlToJson;
use tomlwasm_sdk::{export_bridge_alloc, export_bridge_initialize, export_converter};

export_bridge_alloc!();
export_converter!(toml_to_json, TomlToJson);
export_bridge_initialize!(include_str!("../bridge.toml"));
