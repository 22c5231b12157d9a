//! Time-of-day greeting shown on the home screen.

/// Greeting for a local hour in `0..24`.
#[must_use]
pub const fn greeting(hour: u32) -> &'static str {
    match hour {
        0..12 => "Selamat Pagi",
        12..18 => "Selamat Siang",
        18 => "Selamat Sore",
        _ => "Selamat Malam",
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::greeting;

    #[rstest]
    #[case(0, "Selamat Pagi")]
    #[case(11, "Selamat Pagi")]
    #[case(12, "Selamat Siang")]
    #[case(17, "Selamat Siang")]
    #[case(18, "Selamat Sore")]
    #[case(19, "Selamat Malam")]
    #[case(23, "Selamat Malam")]
    fn greeting_boundaries(#[case] hour: u32, #[case] expected: &str) {
        assert_eq!(greeting(hour), expected);
    }
}
