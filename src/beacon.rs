//! A device abstraction that sends Morse code on two LEDs, switched by two buttons.
//!
//! See [`MorseBeacon`] for usage.

use defmt::info;
use embassy_executor::Spawner;
use embassy_futures::select::select;
use embassy_rp::gpio::{Input, Output};
use embassy_time::Ticker;

use crate::encoder::MorseEncoder;
use crate::outputs::PinOutputs;
use crate::timing::{TICK_MILLIS, TICK_PERIOD};
use crate::toggle::ToggleRequest;
use crate::Result;

/// Both buttons are wired to the same toggle action.
pub const BUTTON_COUNT: usize = 2;

/// Notifier for the [`MorseBeacon`] device: the shared toggle flag.
pub type MorseBeaconNotifier = ToggleRequest;

type BeaconOutputs = PinOutputs<Output<'static>, Output<'static>>;

/// Sends "SOS" on two LEDs (dots on one, dashes on the other) and switches to
/// "OK" and back whenever either button is pressed.
///
/// The switch happens at the next gap between messages, never mid-message.
///
/// # Example
///
/// ```ignore
/// use embassy_rp::gpio::{Input, Level, Output, Pull};
/// use morse_beacon::{MorseBeacon, MorseBeaconNotifier, Result};
/// # use embassy_executor::Spawner;
///
/// async fn example(p: embassy_rp::Peripherals, spawner: Spawner) -> Result<()> {
///     static NOTIFIER: MorseBeaconNotifier = MorseBeacon::notifier();
///     let beacon = MorseBeacon::new(
///         Output::new(p.PIN_2, Level::Low),  // red, dots
///         Output::new(p.PIN_3, Level::Low),  // green, dashes
///         [Input::new(p.PIN_14, Pull::Up), Input::new(p.PIN_15, Pull::Up)],
///         &NOTIFIER,
///         spawner,
///     )?;
///
///     // Buttons toggle on their own; software can ask too.
///     beacon.request_toggle();
///     Ok(())
/// }
/// ```
pub struct MorseBeacon<'a>(&'a MorseBeaconNotifier);

impl MorseBeacon<'_> {
    /// Creates the beacon and spawns its tick and button tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if either task cannot be spawned.
    #[must_use = "Must be used to manage the spawned tasks"]
    pub fn new(
        dot_led: Output<'static>,
        dash_led: Output<'static>,
        buttons: [Input<'static>; BUTTON_COUNT],
        notifier: &'static MorseBeaconNotifier,
        spawner: Spawner,
    ) -> Result<Self> {
        let encoder = MorseEncoder::sos_ok(notifier);
        let outputs = PinOutputs::new(dot_led, dash_led);
        let token = tick_loop(encoder, outputs)?;
        spawner.spawn(token);
        let token = button_loop(buttons, notifier)?;
        spawner.spawn(token);
        Ok(Self(notifier))
    }

    /// Creates a notifier for the beacon.
    ///
    /// This should be assigned to a static variable and passed to [`MorseBeacon::new()`].
    #[must_use]
    pub const fn notifier() -> MorseBeaconNotifier {
        ToggleRequest::new()
    }

    /// Switches messages at the next message boundary, as a button press would.
    pub fn request_toggle(&self) {
        self.0.request();
    }
}

#[embassy_executor::task]
async fn tick_loop(mut encoder: MorseEncoder<'static>, mut outputs: BeaconOutputs) -> ! {
    info!("Morse tick loop started, {} ms per tick", TICK_MILLIS);
    let mut ticker = Ticker::every(TICK_PERIOD);
    loop {
        ticker.next().await;
        encoder.on_tick(&mut outputs);
    }
}

#[embassy_executor::task]
async fn button_loop(
    buttons: [Input<'static>; BUTTON_COUNT],
    toggle: &'static ToggleRequest,
) -> ! {
    let [mut first, mut second] = buttons;
    loop {
        // Pull-ups: a press is a falling edge.
        select(first.wait_for_falling_edge(), second.wait_for_falling_edge()).await;
        info!("Button pressed; message toggle requested");
        toggle.request();
    }
}
