const UNITS: [&str; 10] = [
    "", "uni", "bi", "tri", "quadri", "quinque", "sex", "septem", "octo", "novem",
];

const TEENS: [&str; 10] = [
    "decem",
    "undecim",
    "duodecim",
    "tredecim",
    "quatuordecim",
    "quindecim",
    "sedecim",
    "septendecim",
    "octodecim",
    "novemdecim",
];

// Unit suffixes used after a tens stem.
const COMPOUND_UNITS: [&str; 10] = [
    "", "uno", "duo", "tre", "quatuor", "quinque", "sex", "septem", "octo", "novem",
];

const TENS: [(u32, &str); 2] = [(2, "viginti"), (3, "triginta")];

/// Latin stem for a small decimal numeral, as used in numeric epithets
/// ("3-notatus" reads "trinotatus").
///
/// Anything that is not a numeral with a known stem comes back unchanged.
pub fn num_to_str(num: &str) -> String {
    if num.is_empty() || !num.bytes().all(|b| b.is_ascii_digit()) {
        return num.to_string();
    }
    let Ok(n) = num.parse::<u32>() else {
        return num.to_string();
    };
    let n_idx = n as usize;
    match n {
        1..=9 => UNITS[n_idx].to_string(),
        10..=19 => TEENS[n_idx - 10].to_string(),
        _ => match TENS.iter().find(|(tens, _)| *tens == n / 10) {
            Some((_, stem)) => format!("{stem}{}", COMPOUND_UNITS[n_idx % 10]),
            None => num.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_tens_and_units() {
        assert_eq!(num_to_str("29"), "vigintinovem");
        assert_eq!(num_to_str("33"), "trigintatre");
    }

    #[test]
    fn zero_and_leading_zeroes() {
        assert_eq!(num_to_str("0"), "0");
        assert_eq!(num_to_str("03"), "tri");
    }
}
