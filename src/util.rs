use std::fmt;

pub(crate) const INDENT: &str = "  ";

/// Width of one rendered literal, `0xNN,`.
pub(crate) const LITERAL_LENGTH: usize = 5;

pub(crate) fn write_hex(mut target: impl fmt::Write, byte: u8) -> fmt::Result {
    let high = (byte & 0xf0) >> 4;
    let low = byte & 0x0f;

    for part in &[high, low] {
        write!(target, "{:x}", part)?;
    }

    Ok(())
}

pub(crate) fn write_literal(mut target: impl fmt::Write, byte: u8) -> fmt::Result {
    target.write_str("0x")?;
    write_hex(&mut target, byte)?;
    target.write_char(',')
}

/// Output size for `count` bytes, so the buffer is allocated once.
pub(crate) fn rendered_len(count: usize, per_line: usize) -> usize {
    if count == 0 {
        return 0;
    }

    let rows = row_count(count, per_line);
    // one separator between neighbours; a row break is "\n  " instead of " "
    count * LITERAL_LENGTH + INDENT.len() + (count - rows) + (rows - 1) * (1 + INDENT.len())
}

pub(crate) fn row_count(count: usize, per_line: usize) -> usize {
    count / per_line + usize::from(count % per_line != 0)
}
