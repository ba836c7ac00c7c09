//! Small generic helpers over numeric types.
//!
//! # Examples
//!
//! ```
//! use generic_ds::numeric::{double, print_printable, PrintableFloat};
//!
//! assert_eq!(double(21u8), 42);
//! assert_eq!(double(1.25f32), 2.5);
//! assert_eq!(PrintableFloat(1.23456).to_string(), "1.23");
//!
//! // Prints "1.23".
//! print_printable(&PrintableFloat(1.23456));
//! ```

use std::fmt;
use std::io;

use num_traits::{Num, ToPrimitive};

/// Returns `2 * n` for any integer or float type.
pub fn double<T>(n: T) -> T
where
    T: Num + Copy,
{
    (T::one() + T::one()) * n
}

/// A number that knows how to render itself for display.
pub trait Printable: fmt::Display + ToPrimitive {}

/// A float that displays with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PrintableFloat(pub f64);

impl fmt::Display for PrintableFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl ToPrimitive for PrintableFloat {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl Printable for PrintableFloat {}

/// Writes `value` followed by a newline to `writer`.
pub fn write_printable<W, P>(writer: &mut W, value: &P) -> io::Result<()>
where
    W: io::Write,
    P: Printable,
{
    writeln!(writer, "{}", value)
}

/// Prints `value` followed by a newline to stdout.
pub fn print_printable<P>(value: &P)
where
    P: Printable,
{
    println!("{}", value);
}
