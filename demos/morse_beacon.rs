//! Sends "SOS" in Morse code on two LEDs; either button switches to "OK" (and back)
//! at the next gap between messages.
//!
//! Wiring: red LED on GPIO 2 (dots), green LED on GPIO 3 (dashes), push buttons
//! from GPIO 14 and GPIO 15 to ground.
#![no_std]
#![no_main]

#[cfg(not(any(feature = "pico1", feature = "pico2")))]
compile_error!("morse_beacon needs a board feature: `pico1` or `pico2`");

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
use morse_beacon::{Hardware, MorseBeacon, MorseBeaconNotifier, Never, ONE_DAY, Result};
use panic_probe as _;

// The RP2350 boot ROM only starts images that carry this block.
#[cfg(feature = "pico2")]
#[expect(unsafe_code, reason = "Placing the image definition needs link_section")]
#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: embassy_rp::block::ImageDef = embassy_rp::block::ImageDef::secure_exe();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    static NOTIFIER: MorseBeaconNotifier = MorseBeacon::notifier();
    let hardware = Hardware::default();

    let _beacon = MorseBeacon::new(
        hardware.dot_led,
        hardware.dash_led,
        hardware.buttons,
        &NOTIFIER,
        spawner,
    )?;
    info!("Morse beacon running");

    // The beacon's tasks do the work; sleep forever.
    loop {
        Timer::after(ONE_DAY).await;
    }
}
