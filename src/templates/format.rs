/// `1234567` -> `"1,234,567"`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Round half away from zero, clamped at zero.
pub fn whole(x: f64) -> u64 {
    if x.is_finite() && x > 0.0 {
        x.round() as u64
    } else {
        0
    }
}

/// `2500.4` -> `"$2,500"`.
pub fn dollars(x: f64) -> String {
    if x < 0.0 {
        format!("-${}", thousands(whole(-x)))
    } else {
        format!("${}", thousands(whole(x)))
    }
}

/// Visit counts as shown to the user: rounded, with separators.
pub fn people(x: f64) -> String {
    thousands(whole(x))
}
