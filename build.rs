//! Build script to generate the group color registry.
//!
//! Reads the canonical table from `groups.json`, rejects keys or channels
//! that fall outside the valid range, and generates a static map of group
//! keys to their RGB colors.

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use phf_codegen::Map;

#[path = "src/table.rs"]
mod table;

const TABLE: &str = "groups.json";

fn main() {
    println!("cargo:rerun-if-changed={TABLE}");
    println!("cargo:rerun-if-changed=src/table.rs");

    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("group_colors.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    let json = std::fs::read_to_string(TABLE).unwrap();
    let colors = table::parse_table(&json).unwrap_or_else(|e| panic!("{TABLE}: {e}"));

    let values: Vec<(u32, String)> = colors
        .into_iter()
        .map(|(key, [r, g, b])| (key, format!("Rgb::new({r}, {g}, {b})")))
        .collect();

    let mut color_map = Map::new();
    for (key, value) in &values {
        color_map.entry(*key, value);
    }

    writeln!(
        &mut file,
        "static GROUP_COLORS: phf::Map<u32, Rgb> = \n{};\n",
        color_map.build()
    )
    .unwrap();
}
