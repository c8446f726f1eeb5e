//! Human-readable registry dump for debugging and documentation.
//!
//! Two sections:
//! - `[stypes]`: one row per storage type in tag order
//!   (tag, code, logical type, element width, metadata record, fixed/var, NA)
//! - `[ltypes]`: each logical type with the codes that map onto it

use std::fmt::Write as _;

use colstore_core::Colors;

use crate::ltype::LType;
use crate::registry::{STypeInfo, TypeRegistry};

/// Generate a human-readable dump of the registry.
pub fn dump(registry: &TypeRegistry, colors: Colors) -> String {
    let mut out = String::new();
    dump_stypes(&mut out, registry, &colors);
    dump_ltypes(&mut out, registry, &colors);
    out
}

/// Number of decimal digits needed to print indices below `count`.
fn width_for_count(count: usize) -> usize {
    count.saturating_sub(1).max(1).ilog10() as usize + 1
}

fn dump_stypes(out: &mut String, registry: &TypeRegistry, c: &Colors) {
    let w = width_for_count(registry.len());

    writeln!(out, "{}[stypes]{}", c.blue, c.reset).unwrap();
    for (i, info) in registry.iter().enumerate() {
        let code = c.paint(c.blue, info.code());
        let ltype = info.ltype().name();
        let meta = match info.meta() {
            Some(m) => format!("{:<7}", m.name()),
            None => c.paint(c.dim, &format!("{:<7}", "-")),
        };
        let layout = if info.is_varwidth() { "var" } else { "fix" };
        let na = format_na(info, c);
        writeln!(
            out,
            "T{i:0w$} {code}  {ltype:<8}  {}  {meta}  {layout}  {na}",
            info.elemsize()
        )
        .unwrap();
    }
    out.push('\n');
}

fn format_na(info: &STypeInfo, c: &Colors) -> String {
    match info.na() {
        Some(na) => c.paint(c.green, &format!("{}={:#x}", na.name(), na.bits())),
        None => c.paint(c.dim, "-"),
    }
}

fn dump_ltypes(out: &mut String, registry: &TypeRegistry, c: &Colors) {
    writeln!(out, "{}[ltypes]{}", c.blue, c.reset).unwrap();
    for ltype in LType::ALL {
        let codes: Vec<String> = registry
            .iter()
            .filter(|info| info.ltype() == ltype)
            .map(|info| c.paint(c.blue, info.code()))
            .collect();
        writeln!(
            out,
            "L{} {:<8}  {}",
            ltype as u8,
            ltype.name(),
            codes.join(" ")
        )
        .unwrap();
    }
}
