//! The tick-driven Morse state machine.
//!
//! See [`MorseEncoder`] for the phase table and usage.

use embedded_hal::digital::PinState;

use crate::message::{Message, MessagePair, MessageSlot, Symbol};
use crate::outputs::{OutputChannel, SignalOutputs};
use crate::timing::{DASH_TICKS, DOT_TICKS, INTER_CHAR_TICKS, INTER_WORD_TICKS};
use crate::toggle::ToggleRequest;
use crate::Result;

#[cfg(feature = "defmt")]
use defmt::{debug, info};

/// What the encoder is doing during the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    EmittingDot,
    EmittingDash,
    InterCharGap,
    InterWordGap,
}

impl Phase {
    /// How many ticks the phase holds its output level.
    #[must_use]
    pub const fn ticks(self) -> u8 {
        match self {
            Self::EmittingDot => DOT_TICKS,
            Self::EmittingDash => DASH_TICKS,
            Self::InterCharGap => INTER_CHAR_TICKS,
            Self::InterWordGap => INTER_WORD_TICKS,
        }
    }

    /// The channel held high for the whole phase, if any.
    #[must_use]
    pub const fn channel(self) -> Option<OutputChannel> {
        match self {
            Self::EmittingDot => Some(OutputChannel::Dot),
            Self::EmittingDash => Some(OutputChannel::Dash),
            Self::InterCharGap | Self::InterWordGap => None,
        }
    }
}

/// Renders one of two messages as timed pulses on two outputs.
///
/// Each call to [`on_tick`](Self::on_tick) is one time unit. Every phase holds
/// its output level for a fixed number of ticks, then hands over:
///
/// | Phase          | Ticks | Output            | Next                                   |
/// |----------------|-------|-------------------|----------------------------------------|
/// | `EmittingDot`  | 1     | `Dot` high        | `InterCharGap`                         |
/// | `EmittingDash` | 3     | `Dash` high       | `InterCharGap`                         |
/// | `InterCharGap` | 1     | both low          | next symbol, or `InterWordGap` at end  |
/// | `InterWordGap` | 7     | both low          | first symbol, after applying a toggle  |
///
/// A toggle request is only looked at when the inter-word gap ends, so the
/// message never changes mid-transmission.
///
/// # Example
///
/// ```
/// use embedded_hal::digital::PinState;
/// use morse_beacon::{MorseEncoder, OutputChannel, Phase, SignalOutputs, ToggleRequest};
///
/// struct Lights([PinState; 2]);
///
/// impl SignalOutputs for Lights {
///     fn set_output(&mut self, channel: OutputChannel, level: PinState) {
///         let index = match channel {
///             OutputChannel::Dot => 0,
///             OutputChannel::Dash => 1,
///         };
///         self.0[index] = level;
///     }
/// }
///
/// static TOGGLE: ToggleRequest = ToggleRequest::new();
/// let mut encoder = MorseEncoder::sos_ok(&TOGGLE);
/// let mut lights = Lights([PinState::Low; 2]);
///
/// encoder.on_tick(&mut lights); // first dot of "SOS"
/// assert_eq!(lights.0, [PinState::High, PinState::Low]);
///
/// encoder.on_tick(&mut lights); // gap
/// assert_eq!(lights.0, [PinState::Low, PinState::Low]);
/// assert_eq!(encoder.phase(), Phase::InterCharGap);
/// ```
#[derive(Debug)]
pub struct MorseEncoder<'a> {
    messages: MessagePair<'a>,
    slot: MessageSlot,
    cursor: usize,
    phase: Phase,
    phase_ticks: u8,
    toggle: &'a ToggleRequest,
}

impl<'a> MorseEncoder<'a> {
    /// Starts at the first symbol of the primary message.
    ///
    /// Any request left on `toggle` from before is dropped, so a fresh encoder
    /// always begins the same way.
    #[must_use]
    pub fn new(messages: MessagePair<'a>, toggle: &'a ToggleRequest) -> Self {
        toggle.clear();
        let slot = MessageSlot::Primary;
        Self {
            phase: messages.get(slot).first().phase(),
            messages,
            slot,
            cursor: 0,
            phase_ticks: 0,
            toggle,
        }
    }

    /// Like [`new`](Self::new), validating raw symbol slices first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMessage`](crate::Error::InvalidMessage) if
    /// either slice is empty.
    pub fn from_symbols(
        primary: &'a [Symbol],
        alternate: &'a [Symbol],
        toggle: &'a ToggleRequest,
    ) -> Result<Self> {
        let messages = MessagePair::new(Message::new(primary)?, Message::new(alternate)?);
        Ok(Self::new(messages, toggle))
    }

    /// "SOS", switching to "OK" on toggle.
    #[must_use]
    pub fn sos_ok(toggle: &'a ToggleRequest) -> Self {
        Self::new(MessagePair::sos_ok(), toggle)
    }

    /// Advances one tick, writing any level change to `outputs`.
    pub fn on_tick(&mut self, outputs: &mut impl SignalOutputs) {
        if self.phase_ticks >= self.phase.ticks() {
            self.finish_phase(outputs);
        }
        self.phase_ticks = self.phase_ticks.saturating_add(1);
        if self.phase_ticks == 1 {
            if let Some(channel) = self.phase.channel() {
                outputs.set_output(channel, PinState::High);
            }
        }
    }

    /// Asks for the other message at the next message boundary.
    pub fn request_toggle(&self) {
        self.toggle.request();
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Ticks spent so far in the current phase.
    #[must_use]
    pub const fn phase_ticks(&self) -> u8 {
        self.phase_ticks
    }

    /// Index of the current symbol, or `None` between messages.
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        match self.phase {
            Phase::InterWordGap => None,
            _ => Some(self.cursor),
        }
    }

    #[must_use]
    pub const fn slot(&self) -> MessageSlot {
        self.slot
    }

    /// The message being sent.
    #[must_use]
    pub const fn message(&self) -> Message<'a> {
        self.messages.get(self.slot)
    }

    #[must_use]
    pub fn is_toggle_pending(&self) -> bool {
        self.toggle.is_pending()
    }

    fn finish_phase(&mut self, outputs: &mut impl SignalOutputs) {
        if let Some(channel) = self.phase.channel() {
            outputs.set_output(channel, PinState::Low);
        }
        self.phase = match self.phase {
            Phase::EmittingDot | Phase::EmittingDash => Phase::InterCharGap,
            Phase::InterCharGap => self.next_symbol(),
            Phase::InterWordGap => self.restart_message(),
        };
        self.phase_ticks = 0;
    }

    fn next_symbol(&mut self) -> Phase {
        self.cursor = self.cursor.saturating_add(1);
        match self.message().get(self.cursor) {
            Some(symbol) => symbol.phase(),
            None => {
                #[cfg(feature = "defmt")]
                debug!("end of message {:?}", self.slot);
                Phase::InterWordGap
            }
        }
    }

    // The only place the message may change.
    fn restart_message(&mut self) -> Phase {
        self.cursor = 0;
        if self.toggle.take() {
            self.slot = self.slot.toggled();
            #[cfg(feature = "defmt")]
            info!("toggle applied, now sending {:?}", self.slot);
        }
        self.message().first().phase()
    }
}
