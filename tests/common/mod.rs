#![allow(dead_code)]

use rand::Rng;
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes an edit script with the `event,text` header.
pub fn write_script(rows: &[(&str, &str)]) -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create script file");
    let mut wtr = csv::Writer::from_writer(file.reopen().expect("Failed to reopen script file"));
    wtr.write_record(["event", "text"]).unwrap();
    for (event, text) in rows {
        wtr.write_record([*event, *text]).unwrap();
    }
    wtr.flush().unwrap();
    file
}

/// Writes a JSON field configuration.
pub fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create config file");
    write!(file, "{json}").unwrap();
    file.flush().unwrap();
    file
}

pub fn random_digits(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
