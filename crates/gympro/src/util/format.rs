use jiff::civil::Date;

/// Insert thousands separators into a non-negative integer
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format an amount held in cents, e.g. `4999` -> `$49.99`
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
}

/// Format a whole-dollar amount held in cents, e.g. `200_000_00` -> `$200,000`
pub fn format_currency_short(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let dollars = (cents.unsigned_abs() + 50) / 100;
    format!("{sign}${}", group_thousands(dollars))
}

/// Format a ratio as a whole percentage, e.g. `0.873` -> `87%`
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Long date, e.g. `January 1, 2022`
pub fn format_date(date: Date) -> String {
    date.strftime("%B %-d, %Y").to_string()
}

/// Short date for table columns, e.g. `Feb 14`
pub fn format_short_date(date: Date) -> String {
    date.strftime("%b %-d").to_string()
}

/// Replace every character with a bullet for password fields
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}
