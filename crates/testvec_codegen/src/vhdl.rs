//! VHDL text rendering over an explicit port schema.
//!
//! Field order in every snippet is the schema's declaration order, which is
//! also the token order of the test-vector records; the generated procedures
//! therefore parse records positionally without any name matching.

use testvec_model::{Bfm, Mode, Signal};

const TAB: &str = "    ";
const BANNER: &str = "-- This procedure is auto-generated. DO NOT EDIT.";

/// Renders the `<entity>_bfm` record type plus its `bfm` signal declaration.
///
/// Single-ended fields are typed `std_logic`; buses are typed
/// `std_logic_vector` with the explicit `downto`/`to` bounds when set, or
/// `width-1 downto 0` otherwise. Field names are column-aligned.
pub fn record_snippet(bfm: &Bfm) -> String {
    let longest = bfm.fields().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str("-- This record is auto-generated. DO NOT EDIT.\n");
    out.push_str(&format!("type {}_bfm is record\n", bfm.entity()));
    for (name, signal) in bfm.fields() {
        out.push_str(TAB);
        out.push_str(name);
        out.push_str(&" ".repeat(longest - name.len() + 1));
        out.push_str(&field_type(signal));
        out.push_str(";\n");
    }
    out.push_str("end record;\n");
    out.push('\n');
    out.push_str(&format!("signal bfm : {}_bfm;\n", bfm.entity()));
    out
}

/// Renders the `drive_transaction` procedure that reads one stimulus record
/// and drives each input field in declaration order.
pub fn driver_snippet(bfm: &Bfm) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str("procedure drive_transaction(file fd: text) is\n");
    out.push_str(&format!("{TAB}variable row : line;\n"));
    out.push_str("begin\n");
    out.push_str(&format!("{TAB}if endfile(fd) = false then\n"));
    out.push_str(&format!("{TAB}{TAB}-- drive a transaction\n"));
    out.push_str(&format!("{TAB}{TAB}readline(fd, row);\n"));
    for (name, signal) in bfm.fields_by_mode(Mode::Input) {
        let procedure = if signal.is_single_ended() {
            "drive_single"
        } else {
            "drive_vector"
        };
        out.push_str(&format!("{TAB}{TAB}{procedure}(row, bfm.{name});\n"));
    }
    out.push_str(&format!("{TAB}end if;\n"));
    out.push_str("end procedure;\n");
    out
}

/// Renders the `scoreboard` procedure that loads one expected-output record
/// into an `ideal` record and asserts each output field against the model.
pub fn scoreboard_snippet(bfm: &Bfm) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str("procedure scoreboard(file fd: text) is\n");
    out.push_str(&format!("{TAB}variable row : line;\n"));
    out.push_str(&format!("{TAB}variable ideal : {}_bfm;\n", bfm.entity()));
    out.push_str("begin\n");
    out.push_str(&format!("{TAB}if endfile(fd) = false then\n"));
    out.push_str(&format!(
        "{TAB}{TAB}-- compare expected outputs and inputs\n"
    ));
    out.push_str(&format!("{TAB}{TAB}readline(fd, row);\n"));
    for (name, signal) in bfm.fields_by_mode(Mode::Output) {
        if signal.is_single_ended() {
            out.push_str(&format!("{TAB}{TAB}load_single(row, ideal.{name});\n"));
            out.push_str(&format!(
                "{TAB}{TAB}assert_eq(as_logics(bfm.{name}), as_logics(ideal.{name}), \"{name}\");\n"
            ));
        } else {
            out.push_str(&format!("{TAB}{TAB}load_vector(row, ideal.{name});\n"));
            out.push_str(&format!(
                "{TAB}{TAB}assert_eq(bfm.{name}, ideal.{name}, \"{name}\");\n"
            ));
        }
    }
    out.push_str(&format!("{TAB}end if;\n"));
    out.push_str("end procedure;\n");
    out
}

/// Formats the VHDL type of one field, honoring explicit range bounds.
fn field_type(signal: &Signal) -> String {
    if signal.is_single_ended() {
        return ": std_logic".to_string();
    }
    let range = if let Some((msb, lsb)) = signal.downto() {
        format!("{msb} downto {lsb}")
    } else if let Some((low, high)) = signal.to_bounds() {
        format!("{low} to {high}")
    } else {
        format!("{} downto 0", signal.width() - 1)
    };
    format!(": std_logic_vector({range})")
}
