use std::fmt::Write;

use crate::{BuildInfo, TagComponent};

/// The header declaring `struct WntrBuildInfo` and the accessor functions.
pub const HEADER_NAME: &str = "wntr_build_info.h";

/// Renders the C source exposing the build info to the firmware.
///
/// The names of the constants, struct fields and functions are what the firmware compiles
/// against and must not change.
///
/// # Arguments
/// * `info` - The build info to render.
pub fn render_c_source(info: &BuildInfo) -> String {
    let mut out = String::new();

    write_c_source(&mut out, info).expect("writing into a String cannot fail");

    out
}

fn write_c_source(out: &mut String, info: &BuildInfo) -> std::fmt::Result {
    let release = info.get_release();

    writeln!(
        out,
        "/* This file is generated by generate-build-info - don't edit it directly!! */\n"
    )?;
    writeln!(out, "#include \"{}\"\n", HEADER_NAME)?;

    let constants = [
        ("compiler", info.compiler()),
        ("revision", info.get_revision().to_owned()),
        ("date", info.get_build_date().to_owned()),
        ("machine", info.get_machine().to_string()),
        ("release", release.get_text().to_owned()),
        ("build_info", info.summary()),
    ];
    for (name, value) in constants.iter() {
        writeln!(
            out,
            "static const char {}[] = \"{}\";",
            name,
            escape_c_string(value)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "struct WntrBuildInfo wntr_build_info() {{")?;
    writeln!(out, "    return (struct WntrBuildInfo){{")?;
    writeln!(out, "        .revision = revision,")?;
    writeln!(out, "        .date = date,")?;
    writeln!(out, "        .compiler = compiler,")?;
    writeln!(out, "        .machine = machine,")?;
    writeln!(out, "        .release = release,")?;
    writeln!(
        out,
        "        .release_year = {},",
        c_integer_literal(release.get_year())
    )?;
    writeln!(
        out,
        "        .release_month = {},",
        c_integer_literal(release.get_month())
    )?;
    writeln!(
        out,
        "        .release_day = {},",
        c_integer_literal(release.get_day())
    )?;
    writeln!(out, "    }};")?;
    writeln!(out, "}}\n")?;

    writeln!(
        out,
        "const char* wntr_build_info_string() {{ return build_info; }}"
    )
}

/// Escapes the given text for use inside a C string literal.
///
/// Quotes and backslashes are escaped, other control characters become three-digit octal
/// escapes.
///
/// # Arguments
/// * `text` - The text to escape.
pub fn escape_c_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_ascii_control() => escaped.push_str(&format!("\\{:03o}", c as u32)),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Returns the C integer literal for a release tag component. The spelling from the tag is kept
/// as long as C reads it as the same number, so "04" stays "04" but "08", which C would reject as
/// an octal literal, becomes "8".
///
/// # Arguments
/// * `component` - The component of the release tag.
pub fn c_integer_literal(component: &TagComponent) -> String {
    let spelling = component.get_spelling();
    let is_octal = spelling.len() > 1 && spelling.starts_with('0');

    if !is_octal || u32::from_str_radix(spelling, 8).ok() == Some(component.get_value()) {
        spelling.to_owned()
    } else {
        component.get_value().to_string()
    }
}
