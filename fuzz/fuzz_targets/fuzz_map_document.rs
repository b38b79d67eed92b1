#![no_main]

use libfuzzer_sys::fuzz_target;
use seat_map_editor::{read_map_document, write_map_document};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Darf nie paniken; gelesene Dokumente müssen sich wieder schreiben lassen
    if let Ok(map) = read_map_document(text) {
        let _ = write_map_document(&map);
    }
});
