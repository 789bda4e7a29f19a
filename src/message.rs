//! Morse symbols and the two messages the beacon can send.
//!
//! A [`Message`] is a non-empty, immutable run of [`Symbol`]s. The two
//! predefined messages are written as dot/dash literals and converted at
//! compile time by [`morse_pattern`], so a malformed literal is a build error
//! rather than something discovered mid-transmission.

use heapless::Vec;

use crate::encoder::Phase;
use crate::outputs::OutputChannel;
use crate::timing::{DASH_TICKS, DOT_TICKS, INTER_CHAR_TICKS, INTER_WORD_TICKS};
use crate::{Error, Result};

/// Longest pattern [`parse_pattern`] accepts.
pub const MAX_SYMBOLS: usize = 32;

/// Symbols parsed at runtime by [`parse_pattern`].
pub type Symbols = Vec<Symbol, MAX_SYMBOLS>;

const SOS_PATTERN: &str = "...---...";
const OK_PATTERN: &str = "---.--";

const SOS_SYMBOLS: [Symbol; SOS_PATTERN.len()] = morse_pattern(SOS_PATTERN);
const OK_SYMBOLS: [Symbol; OK_PATTERN.len()] = morse_pattern(OK_PATTERN);

// ============================================================================
// Symbol
// ============================================================================

/// The atomic unit of a Morse character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    /// Ticks the symbol's output stays high.
    #[must_use]
    pub const fn ticks(self) -> u8 {
        match self {
            Self::Dot => DOT_TICKS,
            Self::Dash => DASH_TICKS,
        }
    }

    /// Each symbol type has its own indicator.
    #[must_use]
    pub const fn channel(self) -> OutputChannel {
        match self {
            Self::Dot => OutputChannel::Dot,
            Self::Dash => OutputChannel::Dash,
        }
    }

    /// The encoder phase that emits this symbol.
    #[must_use]
    pub const fn phase(self) -> Phase {
        match self {
            Self::Dot => Phase::EmittingDot,
            Self::Dash => Phase::EmittingDash,
        }
    }

    const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'.' => Some(Self::Dot),
            b'-' => Some(Self::Dash),
            _ => None,
        }
    }
}

/// Converts a dot/dash literal into symbols at compile time.
///
/// `N` must equal the pattern's length; use it as
/// `morse_pattern::<{ PATTERN.len() }>(PATTERN)` or let a typed `const` infer it.
///
/// # Panics
///
/// Panics (a compile error in a `const` context) if the pattern is empty, has
/// the wrong length, or contains anything other than `.` and `-`.
#[must_use]
#[expect(clippy::indexing_slicing, reason = "Bounds are asserted above the loop")]
pub const fn morse_pattern<const N: usize>(pattern: &str) -> [Symbol; N] {
    let bytes = pattern.as_bytes();
    assert!(N > 0, "a Morse message needs at least one symbol");
    assert!(bytes.len() == N, "pattern length does not match the symbol count");

    let mut symbols = [Symbol::Dot; N];
    let mut index = 0;
    while index < N {
        symbols[index] = match Symbol::from_byte(bytes[index]) {
            Some(symbol) => symbol,
            None => panic!("Morse patterns may only contain '.' and '-'"),
        };
        index += 1;
    }
    symbols
}

/// Parses a dot/dash string at runtime.
///
/// # Errors
///
/// Returns [`Error::InvalidMessage`] for an empty pattern,
/// [`Error::InvalidSymbol`] for any character other than `.` or `-`, and
/// [`Error::MessageTooLong`] if the pattern has more than [`MAX_SYMBOLS`] symbols.
pub fn parse_pattern(pattern: &str) -> Result<Symbols> {
    if pattern.is_empty() {
        return Err(Error::InvalidMessage);
    }
    let mut symbols = Symbols::new();
    for character in pattern.chars() {
        let symbol = match character {
            '.' => Symbol::Dot,
            '-' => Symbol::Dash,
            other => return Err(Error::InvalidSymbol(other)),
        };
        symbols.push(symbol).map_err(|_| Error::MessageTooLong)?;
    }
    Ok(symbols)
}

// ============================================================================
// Message
// ============================================================================

/// An ordered, immutable, non-empty sequence of symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<'a>(&'a [Symbol]);

impl<'a> Message<'a> {
    /// `...---...`
    pub const SOS: Message<'static> = Message(&SOS_SYMBOLS);

    /// `---.--`
    pub const OK: Message<'static> = Message(&OK_SYMBOLS);

    /// Wraps `symbols` as a message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMessage`] if `symbols` is empty.
    pub const fn new(symbols: &'a [Symbol]) -> Result<Self> {
        if symbols.is_empty() {
            Err(Error::InvalidMessage)
        } else {
            Ok(Self(symbols))
        }
    }

    #[must_use]
    pub const fn symbols(self) -> &'a [Symbol] {
        self.0
    }

    /// Number of symbols; never zero.
    #[must_use]
    pub const fn symbol_count(self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(self, index: usize) -> Option<Symbol> {
        self.0.get(index).copied()
    }

    /// The symbol every transmission of this message starts with.
    #[must_use]
    pub const fn first(self) -> Symbol {
        match self.0 {
            [first, ..] => *first,
            [] => unreachable!(),
        }
    }

    /// Ticks for one full pass: every symbol, the gap after each symbol, and
    /// the word gap before the message repeats.
    #[must_use]
    pub fn cycle_ticks(self) -> u32 {
        self.0
            .iter()
            .map(|symbol| u32::from(symbol.ticks()) + u32::from(INTER_CHAR_TICKS))
            .fold(u32::from(INTER_WORD_TICKS), u32::saturating_add)
    }
}

// ============================================================================
// MessageSlot / MessagePair
// ============================================================================

/// Which of the two messages is being sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageSlot {
    #[default]
    Primary,
    Alternate,
}

impl MessageSlot {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Primary => Self::Alternate,
            Self::Alternate => Self::Primary,
        }
    }
}

/// The two messages a toggle request switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessagePair<'a> {
    primary: Message<'a>,
    alternate: Message<'a>,
}

impl<'a> MessagePair<'a> {
    #[must_use]
    pub const fn new(primary: Message<'a>, alternate: Message<'a>) -> Self {
        Self { primary, alternate }
    }

    /// SOS first, OK after the first toggle.
    #[must_use]
    pub const fn sos_ok() -> MessagePair<'static> {
        MessagePair::new(Message::SOS, Message::OK)
    }

    #[must_use]
    pub const fn get(&self, slot: MessageSlot) -> Message<'a> {
        match slot {
            MessageSlot::Primary => self.primary,
            MessageSlot::Alternate => self.alternate,
        }
    }
}

impl Default for MessagePair<'static> {
    fn default() -> Self {
        Self::sos_ok()
    }
}
