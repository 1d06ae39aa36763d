//! End-to-end remote start scenarios through ControllerService.
//!
//! The clock starts at zero and the first cycle runs at 50 ms, so the
//! relay throttle is due and the first command reaches the relays.

use super::mock_hw::{FakeClock, MockInputs, MockRelays, RecordingSink};

use heaterctl::app::events::AppEvent;
use heaterctl::app::ports::Clock;
use heaterctl::app::service::ControllerService;
use heaterctl::config::{ControllerConfig, REMOTE_RUN_DURATION_MS};
use heaterctl::control::{RelayCommand, RemoteTimerState};

const FIRST_CYCLE_MS: u32 = 50;

struct Vehicle {
    app: ControllerService,
    inputs: MockInputs,
    relays: MockRelays,
    sink: RecordingSink,
    clock: FakeClock,
}

impl Vehicle {
    fn parked() -> Self {
        let clock = FakeClock::starting_at(0);
        let mut sink = RecordingSink::new();
        let mut app = ControllerService::new(ControllerConfig::default(), clock.now_ms());
        app.start(&mut sink);
        Self {
            app,
            inputs: MockInputs::new(),
            relays: MockRelays::new(),
            sink,
            clock,
        }
    }

    fn cycle_at(&mut self, now_ms: u32) -> RelayCommand {
        let delta = now_ms.wrapping_sub(self.clock.now_ms());
        self.clock.advance(delta);
        self.app
            .tick(&mut self.inputs, &mut self.relays, &mut self.sink, now_ms)
    }

    fn state(&self) -> RemoteTimerState {
        self.app.timer_state()
    }

    /// Start a run on the first cycle and hold the remote for `until_ms`,
    /// cycling once per second.
    fn hold_remote_until(&mut self, until_ms: u32) {
        self.inputs.set(false, false, false, true);
        let mut now = FIRST_CYCLE_MS;
        while now < until_ms {
            self.cycle_at(now);
            now += 1_000;
        }
    }
}

// ── Scenario 1: remote request starts a run ───────────────────

#[test]
fn remote_request_starts_run() {
    let mut v = Vehicle::parked();
    v.inputs.set(false, false, false, true);

    let cmd = v.cycle_at(FIRST_CYCLE_MS);
    assert_eq!(cmd, RelayCommand::new(true, true));
    assert_eq!(v.state(), RemoteTimerState::CountingDown);
    assert_eq!(v.relays.current(), RelayCommand::new(true, true));
    assert!(v.sink.events.contains(&AppEvent::RemoteTimerChanged {
        from: RemoteTimerState::Idle,
        to: RemoteTimerState::CountingDown,
    }));
}

// ── Scenario 2: run window expires ────────────────────────────

#[test]
fn still_running_one_ms_before_window_ends() {
    let mut v = Vehicle::parked();
    let end = FIRST_CYCLE_MS + REMOTE_RUN_DURATION_MS;
    v.hold_remote_until(end - 1);

    let cmd = v.cycle_at(end - 1);
    assert_eq!(cmd, RelayCommand::new(true, true));
    assert_eq!(v.state(), RemoteTimerState::CountingDown);
    assert_eq!(v.app.build_report(end - 1).timer_remaining_ms, 1);
}

#[test]
fn window_end_latches_off_while_remote_held() {
    let mut v = Vehicle::parked();
    let end = FIRST_CYCLE_MS + REMOTE_RUN_DURATION_MS;
    v.hold_remote_until(end);

    let cmd = v.cycle_at(end);
    assert_eq!(cmd, RelayCommand::OFF);
    assert_eq!(v.state(), RemoteTimerState::Blocked);

    // Remote still held: stays latched, and the next due write cuts the relays.
    let cmd = v.cycle_at(end + 1_000);
    assert_eq!(cmd, RelayCommand::OFF);
    assert_eq!(v.state(), RemoteTimerState::Blocked);
    assert_eq!(v.relays.current(), RelayCommand::OFF);
}

// ── Scenario 3: releasing the remote clears the latch ─────────

#[test]
fn release_after_timeout_returns_to_idle() {
    let mut v = Vehicle::parked();
    let end = FIRST_CYCLE_MS + REMOTE_RUN_DURATION_MS;
    v.hold_remote_until(end + 1);
    v.cycle_at(end + 1);
    assert_eq!(v.state(), RemoteTimerState::Blocked);

    v.inputs.set(false, false, false, false);
    let cmd = v.cycle_at(end + 2);
    assert_eq!(cmd, RelayCommand::OFF);
    assert_eq!(v.state(), RemoteTimerState::Idle);

    // A fresh press starts a new full run.
    v.inputs.set(false, false, false, true);
    assert_eq!(v.cycle_at(end + 100), RelayCommand::new(true, true));
    assert_eq!(v.state(), RemoteTimerState::CountingDown);
}

#[test]
fn all_inputs_low_stays_idle() {
    let mut v = Vehicle::parked();
    for now in [FIRST_CYCLE_MS, FIRST_CYCLE_MS + 50] {
        assert_eq!(v.cycle_at(now), RelayCommand::OFF);
        assert_eq!(v.state(), RemoteTimerState::Idle);
    }
}

// ── Scenario 4: manual switch ─────────────────────────────────

#[test]
fn manual_switch_runs_gas_only() {
    let mut v = Vehicle::parked();
    v.inputs.set(true, false, false, false);
    assert_eq!(v.cycle_at(FIRST_CYCLE_MS), RelayCommand::new(true, false));
    assert_eq!(v.state(), RemoteTimerState::Idle);
}

// ── Scenario 5: cold mode suppresses the remote ───────────────

#[test]
fn cold_mode_with_remote_blocks_and_stays_off() {
    let mut v = Vehicle::parked();
    v.inputs.set(false, true, false, true);
    assert_eq!(v.cycle_at(FIRST_CYCLE_MS), RelayCommand::OFF);
    assert_eq!(v.state(), RemoteTimerState::Blocked);

    // Cold mode clears but the request is still latched out.
    v.inputs.set(false, false, false, true);
    assert_eq!(v.cycle_at(FIRST_CYCLE_MS + 50), RelayCommand::OFF);
    assert_eq!(v.state(), RemoteTimerState::Blocked);
}

#[test]
fn cold_mode_mid_run_cuts_both_relays_same_cycle() {
    let mut v = Vehicle::parked();
    v.inputs.set(false, false, false, true);
    v.cycle_at(FIRST_CYCLE_MS);

    v.inputs.set(false, true, false, true);
    assert_eq!(v.cycle_at(FIRST_CYCLE_MS + 10), RelayCommand::OFF);
    assert_eq!(v.relays.current(), RelayCommand::OFF);
    assert_eq!(v.state(), RemoteTimerState::Blocked);
}

// ── Scenario 6: engine running overrides everything ──────────

#[test]
fn engine_running_with_remote_is_off() {
    let mut v = Vehicle::parked();
    v.inputs.set(false, false, true, true);
    assert_eq!(v.cycle_at(FIRST_CYCLE_MS), RelayCommand::OFF);
    assert_eq!(v.state(), RemoteTimerState::Blocked);

    // Engine stops with the remote still held: no run is started.
    v.inputs.set(false, false, false, true);
    assert_eq!(v.cycle_at(FIRST_CYCLE_MS + 50), RelayCommand::OFF);
}

#[test]
fn engine_start_mid_run_latches_off() {
    let mut v = Vehicle::parked();
    v.inputs.set(true, false, false, true);
    v.cycle_at(FIRST_CYCLE_MS);
    assert_eq!(v.relays.current(), RelayCommand::new(true, true));

    v.inputs.set(true, false, true, true);
    assert_eq!(v.cycle_at(FIRST_CYCLE_MS + 50), RelayCommand::OFF);
    assert_eq!(v.relays.current(), RelayCommand::OFF);
    assert_eq!(v.state(), RemoteTimerState::Blocked);
}

// ── Clock wrap ────────────────────────────────────────────────

#[test]
fn run_spanning_clock_wrap_expires_on_time() {
    let start = u32::MAX - 10_000;
    let clock = FakeClock::starting_at(start);
    let mut sink = RecordingSink::new();
    let mut inputs = MockInputs::new();
    let mut relays = MockRelays::new();
    let mut app = ControllerService::new(ControllerConfig::default(), clock.now_ms());
    inputs.set(false, false, false, true);

    clock.advance(FIRST_CYCLE_MS);
    let started = clock.now_ms();
    app.tick(&mut inputs, &mut relays, &mut sink, started);
    assert_eq!(app.timer_state(), RemoteTimerState::CountingDown);

    let before_end = started.wrapping_add(REMOTE_RUN_DURATION_MS - 1);
    app.tick(&mut inputs, &mut relays, &mut sink, before_end);
    assert_eq!(app.timer_state(), RemoteTimerState::CountingDown);

    let at_end = started.wrapping_add(REMOTE_RUN_DURATION_MS);
    assert_eq!(app.tick(&mut inputs, &mut relays, &mut sink, at_end), RelayCommand::OFF);
    assert_eq!(app.timer_state(), RemoteTimerState::Blocked);
}
