//! Fuzz target: relay decision engine
//!
//! Drives `RelayLogic::evaluate` with arbitrary input/time sequences and
//! verifies:
//! - No panics, including across clock wrap
//! - Engine running always yields all-off
//! - Cold mode without the manual switch always yields all-off
//! - The timer is never running and latched at once
//!
//! cargo fuzz run fuzz_relay_logic

#![no_main]

use heaterctl::config::REMOTE_RUN_DURATION_MS;
use heaterctl::control::{RelayCommand, RelayLogic, SensorSnapshot};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    // First four bytes pick the starting clock, so wrap is reachable.
    let mut now = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let mut logic = RelayLogic::new(REMOTE_RUN_DURATION_MS);

    // Each 3-byte chunk: [input bits][dt lo][dt hi], dt scaled to reach
    // the run window within a few hundred cycles.
    for chunk in data[4..].chunks_exact(3) {
        let bits = chunk[0];
        let snap = SensorSnapshot::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
        let dt = u32::from(u16::from_le_bytes([chunk[1], chunk[2]]));
        now = now.wrapping_add(if bits & 16 != 0 { dt * 100 } else { dt });

        let cmd = logic.evaluate(&snap, now);

        if snap.engine_running {
            assert_eq!(cmd, RelayCommand::OFF, "engine running must cut both relays");
        }
        if snap.heater_cold_mode && !snap.manual_gas_switch {
            assert_eq!(cmd, RelayCommand::OFF, "cold mode must cut both relays");
        }
        let timer = logic.timer();
        assert!(
            !(timer.is_running() && timer.is_blocked()),
            "timer running and latched at once"
        );
    }
});
