// File: crates/churn-charts/src/labels.rs
// Summary: Number formatting for chart labels (thousands separators, money, p-values).

/// `2825` -> `"2,825"`.
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

/// Whole dollars with separators: `"$2,542,079"`.
pub fn dollars(v: f64) -> String {
    format!("${}", thousands(v.round().max(0.0) as u64))
}

/// Millions with two decimals: `"$2.54M"`.
pub fn millions(v: f64) -> String {
    format!("${:.2}M", v / 1_000_000.0)
}

/// P-values below 0.001 collapse to `"p<0.0001"`.
pub fn p_value(p: f64) -> String {
    if p < 0.001 {
        "p<0.0001".to_string()
    } else {
        format!("p={p:.3}")
    }
}
