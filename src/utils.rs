//! Utility functions for the garnet-chefiq-ble crate.

/// Round a value to the given number of decimal places.
///
/// # Example
///
/// ```
/// use garnet_chefiq_ble::utils::round_to;
///
/// assert_eq!(round_to(12.345_6, 2), 12.35);
/// assert_eq!(round_to(12.3, 2), 12.3);
/// ```
#[inline]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Shorten a Bluetooth address to its last two octets.
///
/// Accepts `:` or `-` separated addresses and returns the final four hex
/// digits in upper case, which is how device titles are suffixed.
///
/// # Example
///
/// ```
/// use garnet_chefiq_ble::utils::short_address;
///
/// assert_eq!(short_address("aa:bb:cc:dd:ee:ff"), "EEFF");
/// assert_eq!(short_address("AA-BB-CC-DD-12-34"), "1234");
/// ```
pub fn short_address(address: &str) -> String {
    let octets: Vec<&str> = address.split([':', '-']).collect();
    let tail = match octets.as_slice() {
        [.., a, b] => format!("{a}{b}"),
        [only] => (*only).to_string(),
        [] => String::new(),
    };
    let tail = tail.to_uppercase();
    let start = tail
        .char_indices()
        .rev()
        .nth(3)
        .map(|(index, _)| index)
        .unwrap_or(0);
    tail[start..].to_string()
}
