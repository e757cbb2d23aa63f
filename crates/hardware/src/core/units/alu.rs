//! Arithmetic Logic Unit (ALU).
//!
//! Implements the two data operations of the instruction set: 8-bit addition and
//! equality comparison. Addition wraps on overflow (two's complement); there is
//! no overflow trap and no carry flag.

/// Arithmetic Logic Unit for 8-bit register operations.
#[derive(Debug, Clone, Copy)]
pub struct Alu;

impl Alu {
    /// Adds two signed bytes with wrapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytesim_core::core::units::alu::Alu;
    ///
    /// assert_eq!(Alu::add(100, 27), 127);
    /// assert_eq!(Alu::add(127, 1), -128);
    /// assert_eq!(Alu::add(-128, -1), 127);
    /// ```
    #[inline]
    pub const fn add(a: i8, b: i8) -> i8 {
        a.wrapping_add(b)
    }

    /// Equality comparison used by `CMP`.
    #[inline]
    pub const fn equal(a: i8, b: i8) -> bool {
        a == b
    }
}
