use std::fmt::Display;
use num_traits::ToPrimitive;

// Joins (monomial, coefficient) pairs as "3x² - x + 1".
pub fn lc<X, R, S>(mut terms: S) -> String
where
    X: Display,
    R: Display,
    S: Iterator<Item = (X, R)>
{
    let mut res: Vec<String> = vec![];

    if let Some((x, r)) = terms.next() {
        let r = r.to_string();
        let x = x.to_string();

        let term = if r == "1" {
            x
        } else if r == "-1" {
            if x == "1" { r } else { format!("-{x}") }
        } else if x == "1" {
            r
        } else {
            format!("{r}{x}")
        };

        res.push(term)
    } else {
        return "0".to_string()
    }

    for (x, r) in terms {
        let r = r.to_string();
        let x = x.to_string();

        let (op, r) = match r.strip_prefix('-') {
            Some(r) => ("-", r.to_owned()),
            None => ("+", r.clone())
        };

        let term = if r == "1" {
            x
        } else if x == "1" {
            r
        } else {
            format!("{r}{x}")
        };

        res.push(op.to_string());
        res.push(term);
    }

    res.join(" ")
}

// x^d, with superscripts when d is integral.
pub fn fmt_mono(x: &str, d: f64) -> String {
    if d == 0.0 {
        "1".to_string()
    } else if d == 1.0 {
        x.to_string()
    } else if let Some(i) = integral(d) {
        let e = superscript(i);
        format!("{x}{e}")
    } else {
        format!("{x}^{d}")
    }
}

fn integral(d: f64) -> Option<isize> {
    if d.fract() == 0.0 {
        d.to_isize()
    } else {
        None
    }
}

pub fn superscript(i: isize) -> String {
    let mut res = String::new();
    if i < 0 {
        res.push('\u{207B}');
    }

    for c in i.unsigned_abs().to_string().chars() {
        let c = match c {
            '1' => '\u{00B9}',
            '2' => '\u{00B2}',
            '3' => '\u{00B3}',
            _ => {
                let d = c.to_digit(10).unwrap_or(0);
                char::from_u32(('\u{2070}' as u32) + d).unwrap_or('?')
            }
        };
        res.push(c);
    }

    res
}
