/// An integer type which can apply the comparisons and arithmetic a trigger comparator needs
/// No panic shall occur from any method
pub trait Integer {
    fn sub(self, other: Self) -> Self;
    fn shr(self, other: Self) -> Self;

    fn lt(self, other: Self) -> bool;
    fn gte(self, other: Self) -> bool;
    fn lte(self, other: Self) -> bool;
    fn eq(self, other: Self) -> bool;
}
macro_rules! impl_integer {
    ($($name:ident),*) => {
        $(
            impl Integer for $name {
                #[inline(always)]
                fn sub(self, other: Self) -> Self { $name::wrapping_sub(self, other) }
                #[inline(always)]
                fn shr(self, other: Self) -> Self { $name::wrapping_shr(self, other as _) }

                #[inline(always)]
                fn lt(self, other: Self) -> bool { self < other }
                #[inline(always)]
                fn gte(self, other: Self) -> bool { self >= other }
                #[inline(always)]
                fn lte(self, other: Self) -> bool { self <= other }
                #[inline(always)]
                fn eq(self, other: Self) -> bool { self == other }
            }
        )*
    };
}
impl_integer! { u32 }

/// Byte order independent interpretation of a register
pub trait Xlen {
    /// The concrete unsigned type that the inner value represents
    type Unsigned: Integer + Copy;

    /// Interpret the register as an unsigned value
    fn unsigned(self) -> Self::Unsigned;
    /// Create a register from an unsigned value
    fn from_unsigned(from: Self::Unsigned) -> Self;
    /// Return the value as an unsigned system-native value
    fn usize(self) -> usize;
}

/// Operations on a register carried out by the trigger comparators
pub trait Register: Xlen + Sized + Default + Copy {
    /// Subtract other from self where both are unsigned, wrapping on underflow
    fn sub_unsigned(self, other: Self) -> Self {
        Self::from_unsigned(self.unsigned().sub(other.unsigned()))
    }

    /// Tests if self is equal to other
    fn eq(self, other: Self) -> bool {
        self.unsigned().eq(other.unsigned())
    }
    /// Tests if self is less than other where both are interpreted as unsigned values
    fn lt_unsigned(self, other: Self) -> bool {
        self.unsigned().lt(other.unsigned())
    }
    /// Tests if self is greater than or equal to other where both are interpreted as unsigned values
    fn gte_unsigned(self, other: Self) -> bool {
        self.unsigned().gte(other.unsigned())
    }
    /// Tests if self is less than or equal to other where both are interpreted as unsigned values
    fn lte_unsigned(self, other: Self) -> bool {
        self.unsigned().lte(other.unsigned())
    }

    /// Create a register with the lower portion set to the byte and the rest set to zeroes
    fn zero_extended_byte(byte: u8) -> Self;
    /// Test whether bit `index` is set
    fn bit(self, index: u32) -> bool;
    /// Extract `width` bits starting at bit `shift`, right aligned
    fn field(self, shift: u32, width: u32) -> Self::Unsigned;
}

/// A 32-bit value with byte-order independent operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Register32(pub [u8; 4]);
impl Xlen for Register32 {
    type Unsigned = u32;
    fn unsigned(self) -> u32 {
        u32::from_le_bytes(self.0)
    }
    fn from_unsigned(from: u32) -> Self {
        Self(from.to_le_bytes())
    }
    fn usize(self) -> usize {
        self.unsigned() as usize
    }
}
impl Register for Register32 {
    #[inline]
    fn zero_extended_byte(byte: u8) -> Self {
        Self([byte, 0, 0, 0])
    }
    #[inline]
    fn bit(self, index: u32) -> bool {
        self.unsigned().shr(index) & 1 != 0
    }
    #[inline]
    fn field(self, shift: u32, width: u32) -> u32 {
        let mask = if width >= 32 { u32::MAX } else { (1 << width) - 1 };
        self.unsigned().shr(shift) & mask
    }
}
impl From<u32> for Register32 {
    fn from(value: u32) -> Self {
        Self::from_unsigned(value)
    }
}
impl From<Register32> for u32 {
    fn from(register: Register32) -> Self {
        register.unsigned()
    }
}
impl std::fmt::LowerHex for Register32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.unsigned(), f)
    }
}

/// Clocked storage for a single register
///
/// A value passed to [`Cell::write`] is held aside until the next [`Cell::clock`]; until then
/// [`Cell::read`] keeps returning the previously committed value.
#[derive(Clone, Debug)]
pub struct Cell<R: Register> {
    value: R,
    staged: Option<R>,
    reset: R,
}
impl<R: Register> Cell<R> {
    /// Create a cell holding its reset value
    pub fn new(reset: R) -> Self {
        Self {
            value: reset,
            staged: None,
            reset,
        }
    }

    /// Return to the reset value, dropping any staged write
    pub fn reset(&mut self) {
        self.value = self.reset;
        self.staged = None;
    }

    /// The last committed value
    #[inline(always)]
    pub fn read(&self) -> R {
        self.value
    }

    /// Stage a value to be loaded on the next clock edge
    #[inline(always)]
    pub fn write(&mut self, value: R) {
        self.staged = Some(value)
    }

    /// Commit the staged value, if any
    pub fn clock(&mut self) {
        if let Some(value) = self.staged.take() {
            self.value = value
        }
    }
}
