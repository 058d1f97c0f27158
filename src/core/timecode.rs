/// Format a playback time in seconds as `M:SS` for the overlay labels.
/// A not-a-number input (duration not known yet) renders as `0:00`.
pub fn format_timestamp(seconds: f64) -> String {
    if seconds.is_nan() {
        return "0:00".to_string();
    }
    let mins = (seconds / 60.0).floor() as i64;
    let secs = (seconds % 60.0).floor() as i64;
    format!("{}:{:02}", mins, secs)
}

/// Coerce slider input to a usable number: anything non-finite becomes 0.
pub fn coerce_finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Clamp a slider value into `[0, max]`. A non-finite or negative max
/// collapses the range to zero instead of panicking in `f64::clamp`.
pub fn clamp_to_range(value: f64, max: f64) -> f64 {
    let max = if max.is_finite() { max.max(0.0) } else { 0.0 };
    coerce_finite(value).clamp(0.0, max)
}
