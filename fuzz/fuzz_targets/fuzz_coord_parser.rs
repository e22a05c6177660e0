#![no_main]

use libfuzzer_sys::fuzz_target;
use node_manager::csv_io::parse_coords;

fuzz_target!(|data: &[u8]| {
    for row in parse_coords(data).flatten() {
        assert!(row.position.is_finite());
        assert!(row.id >= -2);
        assert!(row.labels.iter().all(|label| !label.is_empty()));
    }
});
