//! Register definitions for the Hivek calling convention

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of registers
pub const NUM_REGISTERS: usize = 32;

/// Register (r0-r31)
///
/// Roles are fixed by convention, not hardware: r2-r3 return values,
/// r4-r7 arguments, r8-r9 temporaries, r29 stack pointer, r30 frame
/// pointer, r31 return address. Only r0 is special: it reads as zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    R0 = 0, // zero - hardwired to 0
    R1 = 1,
    R2 = 2,   // v0 - return value
    R3 = 3,   // v1
    R4 = 4,   // a0 - argument 0
    R5 = 5,   // a1
    R6 = 6,   // a2
    R7 = 7,   // a3
    R8 = 8,   // t0 - temporary
    R9 = 9,   // t1
    R10 = 10,
    R11 = 11,
    R12 = 12,
    R13 = 13,
    R14 = 14,
    R15 = 15,
    R16 = 16,
    R17 = 17,
    R18 = 18,
    R19 = 19,
    R20 = 20,
    R21 = 21,
    R22 = 22,
    R23 = 23,
    R24 = 24,
    R25 = 25,
    R26 = 26,
    R27 = 27,
    R28 = 28,
    R29 = 29, // sp - stack pointer
    R30 = 30, // fp - frame pointer
    R31 = 31, // ra - return address
}

impl Register {
    pub const ZERO: Self = Self::R0;
    pub const V0: Self = Self::R2;
    pub const V1: Self = Self::R3;
    pub const A0: Self = Self::R4;
    pub const A1: Self = Self::R5;
    pub const A2: Self = Self::R6;
    pub const A3: Self = Self::R7;
    pub const T0: Self = Self::R8;
    pub const T1: Self = Self::R9;
    pub const SP: Self = Self::R29;
    pub const FP: Self = Self::R30;
    pub const RA: Self = Self::R31;

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < NUM_REGISTERS {
            Some(unsafe { std::mem::transmute::<u8, Register>(index as u8) })
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::R0 => "zero",
            Self::R1 => "r1",
            Self::R2 => "v0",
            Self::R3 => "v1",
            Self::R4 => "a0",
            Self::R5 => "a1",
            Self::R6 => "a2",
            Self::R7 => "a3",
            Self::R8 => "t0",
            Self::R9 => "t1",
            Self::R10 => "r10",
            Self::R11 => "r11",
            Self::R12 => "r12",
            Self::R13 => "r13",
            Self::R14 => "r14",
            Self::R15 => "r15",
            Self::R16 => "r16",
            Self::R17 => "r17",
            Self::R18 => "r18",
            Self::R19 => "r19",
            Self::R20 => "r20",
            Self::R21 => "r21",
            Self::R22 => "r22",
            Self::R23 => "r23",
            Self::R24 => "r24",
            Self::R25 => "r25",
            Self::R26 => "r26",
            Self::R27 => "r27",
            Self::R28 => "r28",
            Self::R29 => "sp",
            Self::R30 => "fp",
            Self::R31 => "ra",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
