//! Helpers shared by the host-level tests.

use embedded_hal::digital::PinState;
use morse_beacon::{MorseEncoder, OutputChannel, SignalOutputs};

/// One pass of "SOS": one character per tick, `.` while the dot output is
/// high, `-` while the dash output is high, space while both are low.
pub const SOS_PASS: &str = concat!(". . . --- --- --- . . . ", "       ");

/// One pass of "OK" (`---.--`) in the same notation.
pub const OK_PASS: &str = concat!("--- --- --- . --- --- ", "       ");

/// Tracks output levels the way the LEDs would show them.
#[derive(Debug, Default)]
pub struct Recorder {
    dot: bool,
    dash: bool,
    pub writes: Vec<(OutputChannel, PinState)>,
}

impl SignalOutputs for Recorder {
    fn set_output(&mut self, channel: OutputChannel, level: PinState) {
        let high = level == PinState::High;
        match channel {
            OutputChannel::Dot => self.dot = high,
            OutputChannel::Dash => self.dash = high,
        }
        self.writes.push((channel, level));
    }
}

impl Recorder {
    /// What the two outputs show right now.
    pub fn glyph(&self) -> char {
        match (self.dot, self.dash) {
            (false, false) => ' ',
            (true, false) => '.',
            (false, true) => '-',
            (true, true) => '!',
        }
    }
}

/// Runs `ticks` ticks and returns the timeline of output levels.
pub fn run(encoder: &mut MorseEncoder<'_>, recorder: &mut Recorder, ticks: usize) -> String {
    (0..ticks)
        .map(|_| {
            encoder.on_tick(recorder);
            recorder.glyph()
        })
        .collect()
}
