use embassy_time::Duration;

// Unit ratios. Dot : dash : inter-char gap : inter-word gap = 1 : 3 : 1 : 7.
pub const DOT_TICKS: u8 = 1;
pub const DASH_TICKS: u8 = 3;
pub const INTER_CHAR_TICKS: u8 = 1;
pub const INTER_WORD_TICKS: u8 = 7;

/// Milliseconds per tick, from the `MORSE_TICK_MS` build-time setting (default 500).
pub const TICK_MILLIS: u64 = parse_millis(env!("MORSE_TICK_MS"));

/// How often the tick source drives the encoder.
pub const TICK_PERIOD: Duration = Duration::from_millis(TICK_MILLIS);

pub const ONE_DAY: Duration = Duration::from_secs(60 * 60 * 24);

/// Wall-clock length of `ticks` ticks at [`TICK_PERIOD`].
#[must_use]
pub const fn ticks_to_duration(ticks: u32) -> Duration {
    Duration::from_millis(TICK_MILLIS.saturating_mul(ticks as u64))
}

/// Parses a positive whole number of milliseconds at compile time.
///
/// # Panics
///
/// Panics (a compile error in a `const` context) on an empty string, a
/// non-digit, a zero period, or overflow.
#[must_use]
#[expect(clippy::indexing_slicing, reason = "Index is bounded by the loop condition")]
pub const fn parse_millis(text: &str) -> u64 {
    let bytes = text.as_bytes();
    assert!(!bytes.is_empty(), "tick period must not be empty");

    let mut value: u64 = 0;
    let mut index = 0;
    while index < bytes.len() {
        let byte = bytes[index];
        assert!(byte.is_ascii_digit(), "tick period must be a whole number of milliseconds");
        value = match value.checked_mul(10) {
            Some(scaled) => match scaled.checked_add((byte - b'0') as u64) {
                Some(sum) => sum,
                None => panic!("tick period overflows u64"),
            },
            None => panic!("tick period overflows u64"),
        };
        index += 1;
    }
    assert!(value > 0, "tick period must be greater than zero");
    value
}
