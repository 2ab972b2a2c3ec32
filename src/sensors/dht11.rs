//! Bit-banged single-wire decoder for the DHT11 temperature/humidity sensor.
//!
//! The DHT11 has no UART; readings are reconstructed from microsecond-scale
//! pulse widths on one bidirectional line.  The driver is synchronous — the
//! protocol's timing windows are too tight to yield mid-frame — and blocks
//! the caller for the duration of one frame (18 ms request pulse plus up to
//! ~5 ms of reply).
//!
//! Frame layout: 40 bits MSB-first into five bytes — humidity integer,
//! humidity fraction, temperature integer, temperature fraction, checksum.
//! The checksum is the low 8 bits of the sum of the four data bytes.  The
//! fraction bytes are always zero on a DHT11 and are ignored (the checksum
//! still covers them).
//!
//! Every wait-for-transition is a bounded poll loop.  A stuck line surfaces
//! as [`Dht11Error::Timeout`] instead of hanging the control loop.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

// Protocol timing.
const REQUEST_LOW_MS: u32 = 18; // MCU holds the line low to request a frame.
const REQUEST_RELEASE_US: u32 = 30; // Line released high before the sensor takes over.
const BIT_SAMPLE_DELAY_US: u32 = 28; // Shorter than the shortest '1' high pulse (~70 us).
const POLL_DELAY_US: u32 = 1; // Delay between pin polls when waiting for an edge.
const MAX_POLL_ATTEMPTS: usize = 100; // Bound on every wait-for-transition step.

/// One validated climate reading.  The DHT11 reports whole units only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimateReading {
    /// Temperature in degrees Celsius.
    pub temperature_c: i32,
    /// Relative humidity in percent.
    pub humidity_pct: i32,
}

/// Decoder failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dht11Error<E> {
    /// GPIO access failed.
    Pin(E),
    /// The sensor never pulled the line low after the request pulse.
    NoResponse,
    /// A wait-for-transition exceeded [`MAX_POLL_ATTEMPTS`].
    Timeout,
    /// The trailing parity byte did not match the data bytes.
    ChecksumMismatch,
}

impl<E> From<E> for Dht11Error<E> {
    fn from(e: E) -> Self {
        Dht11Error::Pin(e)
    }
}

/// The DHT11 driver.  Generic over the pin and delay providers so the
/// decoder runs against scripted line levels and a fake clock in tests.
pub struct Dht11<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pin: P,
    delay: D,
}

impl<P, D> Dht11<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Read one validated frame.  Callable at most once per polling period;
    /// the sensor needs about a second between frames to recover.
    ///
    /// The line is re-driven high before returning, on success and on every
    /// error path past the request pulse, so the next request cycle starts
    /// from the idle-high state the protocol expects.
    pub fn read(&mut self) -> Result<ClimateReading, Dht11Error<P::Error>> {
        self.send_request()?;

        let result = self.receive_frame();

        // Reclaim the line: drive it high until the next request.
        self.pin.set_high()?;

        let data = result?;
        Self::validate_checksum(&data)?;

        Ok(ClimateReading {
            temperature_c: i32::from(data[2]),
            humidity_pct: i32::from(data[0]),
        })
    }

    /// Hold the line low for 18 ms, then release it for the sensor.
    fn send_request(&mut self) -> Result<(), Dht11Error<P::Error>> {
        self.pin.set_low()?;
        self.delay.delay_ms(REQUEST_LOW_MS);
        self.pin.set_high()?;
        self.delay.delay_us(REQUEST_RELEASE_US);
        Ok(())
    }

    /// Acknowledgement handshake plus 40 bit-slots into five bytes.
    fn receive_frame(&mut self) -> Result<[u8; 5], Dht11Error<P::Error>> {
        // The sensor acknowledges with an 80 us low pulse then an 80 us high
        // pulse.  If the line is still high at the first sample, nothing is
        // driving it.
        if self.pin.is_high()? {
            return Err(Dht11Error::NoResponse);
        }
        self.wait_for(PinState::High)?;
        self.wait_for(PinState::Low)?;

        let mut data = [0u8; 5];
        for slot in 0..40 {
            // Each slot: ~50 us low, then a high pulse whose width encodes
            // the bit.  Sample part-way through the high phase; a '0' pulse
            // (~28 us) has already ended, a '1' pulse (~70 us) has not.
            self.wait_for(PinState::High)?;
            self.delay.delay_us(BIT_SAMPLE_DELAY_US);
            if self.pin.is_high()? {
                data[slot / 8] |= 1 << (7 - (slot % 8));
            }
            self.wait_for(PinState::Low)?;
        }

        Ok(data)
    }

    /// Poll until the line reaches `state`, bounded by [`MAX_POLL_ATTEMPTS`].
    fn wait_for(&mut self, state: PinState) -> Result<(), Dht11Error<P::Error>> {
        for _ in 0..MAX_POLL_ATTEMPTS {
            let reached = match state {
                PinState::High => self.pin.is_high()?,
                PinState::Low => self.pin.is_low()?,
            };
            if reached {
                return Ok(());
            }
            self.delay.delay_us(POLL_DELAY_US);
        }
        Err(Dht11Error::Timeout)
    }

    fn validate_checksum(data: &[u8; 5]) -> Result<(), Dht11Error<P::Error>> {
        let sum = data[0]
            .wrapping_add(data[1])
            .wrapping_add(data[2])
            .wrapping_add(data[3]);
        if sum == data[4] {
            Ok(())
        } else {
            Err(Dht11Error::ChecksumMismatch)
        }
    }
}
