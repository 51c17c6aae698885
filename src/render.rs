use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use std::io::{self, Cursor, Write};

use crate::fixed::Q1x15;
use crate::utils::consts::{ARRAY_NAME, BYTES_PER_SAMPLE, ELEMENT_TYPE};

const FOOTER: &str = "};";

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

fn header(len: usize) -> String {
    format!("const {ELEMENT_TYPE} {ARRAY_NAME}[{len}] = {{")
}

/// Quantize samples to Q1.15 and pack them as little-endian i16.
pub fn pack_samples(samples: &[f64]) -> Vec<u8> {
    let raw: Vec<i16> = samples
        .iter()
        .map(|&s| Q1x15::from_f64(s).raw())
        .collect();
    let mut bytes = vec![0u8; std::mem::size_of_val(raw.as_slice())];
    LittleEndian::write_i16_into(&raw, &mut bytes);
    bytes
}

/// Lowercase hex, two digits per byte, no separators.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Write the table as a three-line C array declaration.
pub fn write_table<W: Write>(out: &mut W, samples: &[f64]) -> io::Result<()> {
    let bytes = pack_samples(samples);
    tracing::debug!(
        "Packed {} samples into {} bytes",
        samples.len(),
        bytes.len()
    );

    writeln!(out, "{}", header(samples.len()))?;
    writeln!(out, "{}", encode_hex(&bytes))?;
    writeln!(out, "{FOOTER}")?;
    Ok(())
}

/// Print the table to stdout.
pub fn format_and_print(samples: &[f64]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, samples)?;
    out.flush()
}

/// Read back the output of [`write_table`].
pub fn parse_table(text: &str) -> io::Result<Vec<Q1x15>> {
    let mut lines = text.lines();

    let head = lines
        .next()
        .ok_or_else(|| invalid("missing array header"))?;
    let prefix = format!("const {ELEMENT_TYPE} {ARRAY_NAME}[");
    let count: usize = head
        .strip_prefix(prefix.as_str())
        .and_then(|rest| rest.strip_suffix("] = {"))
        .ok_or_else(|| invalid(format!("unexpected header: {head:?}")))?
        .parse()
        .map_err(|err| invalid(format!("bad element count: {err}")))?;

    let data = lines
        .next()
        .ok_or_else(|| invalid("missing data line"))?;
    match lines.next() {
        Some(FOOTER) => {}
        Some(other) => return Err(invalid(format!("unexpected footer: {other:?}"))),
        None => return Err(invalid("missing closing delimiter")),
    }
    if lines.any(|line| !line.trim().is_empty()) {
        return Err(invalid("trailing content after closing delimiter"));
    }

    let bytes = hex::decode(data.trim()).map_err(|err| invalid(format!("{err}")))?;
    let expected = count
        .checked_mul(BYTES_PER_SAMPLE)
        .ok_or_else(|| invalid(format!("element count {count} is too large")))?;
    if bytes.len() != expected {
        return Err(invalid(format!(
            "header declares {count} elements but data holds {} bytes",
            bytes.len()
        )));
    }

    let len = bytes.len() / BYTES_PER_SAMPLE;
    let mut rdr = Cursor::new(bytes);
    let mut samples = Vec::with_capacity(len);
    for _ in 0..len {
        samples.push(Q1x15::from_raw(rdr.read_i16::<LittleEndian>()?));
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_little_endian() {
        let bytes = pack_samples(&[0.0, 1.0, -1.0, 0.5]);
        assert_eq!(
            bytes,
            vec![0x00, 0x00, 0xff, 0x7f, 0x01, 0x80, 0x00, 0x40]
        );
    }

    #[test]
    fn test_encode_hex_lowercase() {
        assert_eq!(encode_hex(&[0x00, 0xab, 0x7f, 0x80]), "00ab7f80");
    }

    #[test]
    fn test_write_table_layout() {
        let mut out = Vec::new();
        write_table(&mut out, &[0.0, 1.0]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "const float sine_wave[2] = {\n0000ff7f\n};\n");
    }

    #[test]
    fn test_parse_written_table() {
        let mut out = Vec::new();
        write_table(&mut out, &[0.0, 0.5, -1.0]).unwrap();
        let parsed = parse_table(&String::from_utf8(out).unwrap()).unwrap();
        let raw: Vec<i16> = parsed.iter().map(|q| q.raw()).collect();
        assert_eq!(raw, vec![0, 16384, -32767]);
    }

    #[test]
    fn test_parse_rejects_count_mismatch() {
        let err = parse_table("const float sine_wave[3] = {\n0000ff7f\n};\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_parse_rejects_bad_layout() {
        for text in [
            "",
            "int sine_wave[1] = {\n0000\n};",
            "const float sine_wave[1] = {\n0000",
            "const float sine_wave[1] = {\n0000\n}",
            "const float sine_wave[1] = {\nzz00\n};",
            "const float sine_wave[1] = {\n0000\n};\nextra",
            "const float sine_wave[9223372036854775808] = {\n\n};\n",
            "const float sine_wave[18446744073709551615] = {\n0000\n};\n",
            "const float sine_wave[99999999999999999999] = {\n0000\n};\n",
        ] {
            let err = parse_table(text).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidData, "{text:?}");
        }
    }
}
