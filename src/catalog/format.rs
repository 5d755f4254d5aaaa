use serde::Serialize;

/// Pure `f64 -> String` tooltip formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipFormat {
    /// Thousands-grouped integer, e.g. `1,200`.
    Integer,
    /// Thousands-grouped fixed-point number with a unit suffix, e.g. `2,345.6 / sq mi`.
    Decimal { places: usize, suffix: &'static str },
    /// Fraction rendered as a percentage, e.g. `0.0523 -> 5.23%`.
    Percent { places: usize },
    /// Whole dollars, e.g. `$72,500`.
    Currency,
}

impl TooltipFormat {
    pub fn apply(&self, value: f64) -> String {
        match *self {
            TooltipFormat::Integer => group_fixed(value, 0),
            TooltipFormat::Decimal { places, suffix } => format!("{}{suffix}", group_fixed(value, places)),
            TooltipFormat::Percent { places } => {
                let scaled = value * 100.0;
                let text = format!("{:.places$}", scaled.abs());
                format!("{}{text}%", sign(scaled, &text))
            }
            TooltipFormat::Currency => {
                let amount = group_fixed(value, 0);
                match amount.strip_prefix('-') {
                    Some(abs) => format!("-${abs}"),
                    None => format!("${amount}"),
                }
            }
        }
    }
}

/// Named color scales understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorScale {
    Blues,
    Greens,
    Purples,
    RdBu,
}

impl ColorScale {
    pub fn to_str(&self) -> &'static str {
        match self {
            ColorScale::Blues => "Blues",
            ColorScale::Greens => "Greens",
            ColorScale::Purples => "Purples",
            ColorScale::RdBu => "RdBu",
        }
    }
}

/// `"-"` for a negative value whose rounded text is not all zeros.
fn sign(value: f64, rounded: &str) -> &'static str {
    if value < 0.0 && rounded.bytes().any(|b| matches!(b, b'1'..=b'9')) { "-" } else { "" }
}

/// Fixed-point text with a comma-grouped whole part.
fn group_fixed(value: f64, places: usize) -> String {
    let text = format!("{:.places$}", value.abs());
    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + whole.len() / 3 + 1);
    out.push_str(sign(value, &text));
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_groups_thousands() {
        assert_eq!(TooltipFormat::Integer.apply(1200.0), "1,200");
        assert_eq!(TooltipFormat::Integer.apply(999.0), "999");
        assert_eq!(TooltipFormat::Integer.apply(1234567.4), "1,234,567");
        assert_eq!(TooltipFormat::Integer.apply(0.0), "0");
        assert_eq!(TooltipFormat::Integer.apply(-4500.0), "-4,500");
        assert_eq!(TooltipFormat::Integer.apply(-0.2), "0");
    }

    #[test]
    fn decimal_keeps_places_and_suffix() {
        let fmt = TooltipFormat::Decimal { places: 1, suffix: " / sq mi" };
        assert_eq!(fmt.apply(2345.64), "2,345.6 / sq mi");
        assert_eq!(fmt.apply(12.0), "12.0 / sq mi");
    }

    #[test]
    fn percent_scales_fraction() {
        let fmt = TooltipFormat::Percent { places: 2 };
        assert_eq!(fmt.apply(0.0523), "5.23%");
        assert_eq!(fmt.apply(-0.1), "-10.00%");
        assert_eq!(fmt.apply(-0.00001), "0.00%");
        assert_eq!(fmt.apply(-0.0001), "-0.01%");
    }

    #[test]
    fn currency_has_no_cents() {
        assert_eq!(TooltipFormat::Currency.apply(72500.0), "$72,500");
        assert_eq!(TooltipFormat::Currency.apply(-1250.0), "-$1,250");
    }
}
