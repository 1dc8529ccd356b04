// Metrics shim for the decoder: one counter for rejected buffers.

#[cfg(feature = "metrics")]
mod inner {
    use once_cell::sync::Lazy;
    use prometheus::{register_int_counter, IntCounter};

    pub static INCORRECT_LENGTH_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
        register_int_counter!(
            "args_decoder_incorrect_length_total",
            "Decode calls rejected with IncorrectDataLength"
        )
        .expect("register args_decoder_incorrect_length_total")
    });
}

#[cfg(feature = "metrics")]
#[inline]
pub fn incorrect_length_inc() {
    inner::INCORRECT_LENGTH_TOTAL.inc();
}

/// Current value of the rejection counter.
#[cfg(feature = "metrics")]
pub fn incorrect_length_total() -> u64 {
    inner::INCORRECT_LENGTH_TOTAL.get()
}

// no-ops when metrics are disabled
#[cfg(not(feature = "metrics"))]
#[inline]
pub fn incorrect_length_inc() {}

/// Touch the lazy counter so it shows up in the registry before the first
/// rejection.
#[cfg(feature = "metrics")]
pub fn register_decoder_metrics() {
    let _ = &*inner::INCORRECT_LENGTH_TOTAL;
}

#[cfg(not(feature = "metrics"))]
pub fn register_decoder_metrics() {}
