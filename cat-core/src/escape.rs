//! Caret and meta notation for control, DEL and high bytes.

use crate::options::DisplayOptions;

const DEL: u8 = 0x7F;
const META: u8 = 0x80;
const CARET_OFFSET: u8 = 0x40;

/// Appends the visible form of `byte` to `out`.
///
/// The newline byte is a line terminator and must not be passed here.
///
/// | input                  | `show_nonprinting` | output                   |
/// |------------------------|--------------------|--------------------------|
/// | `0x20..0x7F`           | any                | the byte                 |
/// | TAB                    | any                | `^I` with `show_tabs`    |
/// | other `0x00..0x20`     | yes                | `^` + (byte + 0x40)      |
/// | `0x7F`                 | yes                | `^?`                     |
/// | `0x80..=0xFF`          | yes                | `M-` + low seven bits    |
/// | anything else          | no                 | the byte                 |
pub fn escape_byte(byte: u8, show_nonprinting: bool, show_tabs: bool, out: &mut Vec<u8>) {
    if byte == b'\t' {
        if show_tabs {
            out.extend_from_slice(b"^I");
        } else {
            out.push(byte);
        }
        return;
    }

    if !show_nonprinting {
        out.push(byte);
        return;
    }

    if byte >= META {
        out.extend_from_slice(b"M-");
    }
    push_caret(byte & !META, out);
}

/// Renders a seven-bit value, using caret notation for controls and DEL.
fn push_caret(low: u8, out: &mut Vec<u8>) {
    match low {
        DEL => out.extend_from_slice(b"^?"),
        0x20..=0x7E => out.push(low),
        _ => out.extend_from_slice(&[b'^', low + CARET_OFFSET]),
    }
}

/// Appends every byte of `line` to `out`, escaped according to `options`.
///
/// `line` must not contain the terminating newline.
pub fn escape_into(line: &[u8], options: &DisplayOptions, out: &mut Vec<u8>) {
    let show_nonprinting = options.show_nonprinting();
    let show_tabs = options.show_tabs();
    out.reserve(line.len());
    for &byte in line {
        escape_byte(byte, show_nonprinting, show_tabs, out);
    }
}
