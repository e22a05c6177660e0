#![no_main]

use libfuzzer_sys::fuzz_target;
use node_manager::app::use_cases::file_io;
use node_manager::AppState;

fuzz_target!(|data: &[u8]| {
    // Erste Hälfte: Koordinaten, zweite Hälfte: Verbindungen
    let (coords, connections) = data.split_at(data.len() / 2);
    let mut state = AppState::new();
    // In-Memory-Quellen haben keine I/O-Fehler, alles andere ist eine Diagnose
    let report = file_io::import_graph(&mut state, coords, connections)
        .expect("Import aus dem Speicher darf nicht scheitern");
    assert!(state.registry.is_consistent());
    assert!(state.registry.corners().is_some());
    assert!(report.nodes <= state.registry.len());
});
