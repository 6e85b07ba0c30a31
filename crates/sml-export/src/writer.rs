//! Output primitives for the SML grammar.
//!
//! [`SexprWriter`] is an append-only sink: encoders only ever add text at the
//! end, there is no random access or rewriting. Numeric formatting goes
//! through [`Gf`], which renders floats with six significant digits the way
//! C's `%g` does, so the same model always produces the same bytes.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

/// Display adapter that formats an `f64` like C's `%g`.
///
/// Six significant digits, trailing zeros trimmed, scientific notation with a
/// two-digit exponent outside the `1e-4..1e6` magnitude range.
#[derive(Debug, Clone, Copy)]
pub struct Gf(pub f64);

impl fmt::Display for Gf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == 0.0 {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
        }
        // Round to six significant digits first; the decimal exponent of the
        // rounded value decides between fixed and scientific form.
        let sci = format!("{:.5e}", v);
        let Some((mantissa, exp)) = sci.split_once('e') else {
            return f.write_str(&sci);
        };
        let Ok(exp) = exp.parse::<i32>() else {
            return f.write_str(&sci);
        };
        if !(-4..6).contains(&exp) {
            let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
            let (sign, magnitude) = if exp < 0 { ('-', -exp) } else { ('+', exp) };
            write!(f, "{mantissa}e{sign}{magnitude:02}")
        } else {
            let fixed = format!("{:.*}", (5 - exp) as usize, v);
            if fixed.contains('.') {
                f.write_str(fixed.trim_end_matches('0').trim_end_matches('.'))
            } else {
                f.write_str(&fixed)
            }
        }
    }
}

/// Display adapter that renders a string as a quoted SML literal.
///
/// Embedded `"` and `\` are escaped with a backslash; everything else passes
/// through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Quoted<'a>(pub &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            if c == '"' || c == '\\' {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char('"')
    }
}

/// Sequential writer for nested `(tag ...)` blocks.
pub struct SexprWriter<W: Write> {
    out: W,
}

impl<W: Write> SexprWriter<W> {
    /// Wrap an output sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Open a multi-line block: `(tag`.
    pub fn open(&mut self, tag: &str) -> io::Result<()> {
        writeln!(self.out, "({tag}")
    }

    /// Close the innermost block.
    pub fn close(&mut self) -> io::Result<()> {
        writeln!(self.out, ")")
    }

    /// Open a grouped list block: `(tag (`.
    ///
    /// The extra inner pair exists so encoders can lay out tuple rows freely;
    /// it carries no meaning of its own.
    pub fn begin_list(&mut self, tag: &str) -> io::Result<()> {
        writeln!(self.out, "({tag} (")
    }

    /// Close a grouped list block: `))`.
    pub fn end_list(&mut self) -> io::Result<()> {
        writeln!(self.out, "))")
    }

    /// Single float field: `(tag 1.5)`.
    pub fn num(&mut self, tag: &str, value: f64) -> io::Result<()> {
        writeln!(self.out, "({tag} {})", Gf(value))
    }

    /// Single integer field: `(tag 42)`.
    pub fn int(&mut self, tag: &str, value: i64) -> io::Result<()> {
        writeln!(self.out, "({tag} {value})")
    }

    /// Flat float tuple: `(tag 1 2 3)`.
    pub fn nums(&mut self, tag: &str, values: &[f64]) -> io::Result<()> {
        write!(self.out, "({tag}")?;
        for v in values {
            write!(self.out, " {}", Gf(*v))?;
        }
        writeln!(self.out, ")")
    }

    /// Parenthesized float tuple: `(tag (1 2 3))`.
    pub fn vector(&mut self, tag: &str, values: &[f64]) -> io::Result<()> {
        write!(self.out, "({tag} (")?;
        let mut sep = "";
        for v in values {
            write!(self.out, "{sep}{}", Gf(*v))?;
            sep = " ";
        }
        writeln!(self.out, "))")
    }

    /// Parenthesized integer tuple: `(tag (1 2 3))`.
    pub fn int_group(&mut self, tag: &str, values: &[u32]) -> io::Result<()> {
        write!(self.out, "({tag} (")?;
        let mut sep = "";
        for v in values {
            write!(self.out, "{sep}{v}")?;
            sep = " ";
        }
        writeln!(self.out, "))")
    }

    /// Quoted string field: `(tag "hello")`.
    pub fn text(&mut self, tag: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "({tag} {})", Quoted(value))
    }

    /// Bare atom field: `(tag png)`.
    pub fn atom(&mut self, tag: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "({tag} {value})")
    }

    /// Boolean field: `(tag true)`.
    pub fn boolean(&mut self, tag: &str, value: bool) -> io::Result<()> {
        writeln!(self.out, "({tag} {value})")
    }

    /// Raw formatted output, for tuple rows inside grouped lists.
    pub fn raw_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(v: f64) -> String {
        Gf(v).to_string()
    }

    #[test]
    fn float_formatting_matches_percent_g() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(1.0), "1");
        assert_eq!(g(-1.0), "-1");
        assert_eq!(g(0.5), "0.5");
        assert_eq!(g(1.5), "1.5");
        assert_eq!(g(100.0), "100");
        assert_eq!(g(0.0001), "0.0001");
        assert_eq!(g(0.00001), "1e-05");
        assert_eq!(g(123456.0), "123456");
        assert_eq!(g(1000000.0), "1e+06");
        assert_eq!(g(123456789.0), "1.23457e+08");
        assert_eq!(g(-0.25), "-0.25");
        assert_eq!(g(3.14159265), "3.14159");
    }

    #[test]
    fn quoting_escapes_quotes_and_backslashes() {
        assert_eq!(Quoted("plain").to_string(), r#""plain""#);
        assert_eq!(Quoted(r#"a"b"#).to_string(), r#""a\"b""#);
        assert_eq!(Quoted(r"C:\fonts").to_string(), r#""C:\\fonts""#);
    }

    #[test]
    fn writer_nests_blocks() {
        let mut w = SexprWriter::new(Vec::new());
        w.open("scene").unwrap();
        w.text("name", "Main").unwrap();
        w.int_group("layers", &[1, 2]).unwrap();
        w.vector("location", &[0.0, 1.5, -2.0]).unwrap();
        w.close().unwrap();

        let out = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(
            out,
            "(scene\n(name \"Main\")\n(layers (1 2))\n(location (0 1.5 -2))\n)\n"
        );
    }
}
