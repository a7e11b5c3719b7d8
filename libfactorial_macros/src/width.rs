/// Integer types a `factorial!` literal may carry as its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntType {
  U8,
  U16,
  U32,
  U64,
  U128,
  Usize,
  I8,
  I16,
  I32,
  I64,
  I128,
  Isize,
}

impl Default for IntType {
  fn default() -> Self {
    IntType::U128
  }
}

impl IntType {
  pub fn name(&self) -> &'static str {
    match self {
      IntType::U8 => "u8",
      IntType::U16 => "u16",
      IntType::U32 => "u32",
      IntType::U64 => "u64",
      IntType::U128 => "u128",
      IntType::Usize => "usize",
      IntType::I8 => "i8",
      IntType::I16 => "i16",
      IntType::I32 => "i32",
      IntType::I64 => "i64",
      IntType::I128 => "i128",
      IntType::Isize => "isize",
    }
  }

  /// Largest representable value. Pointer-sized types assume the host target.
  pub fn max(&self) -> u128 {
    match self {
      IntType::U8 => u8::MAX as u128,
      IntType::U16 => u16::MAX as u128,
      IntType::U32 => u32::MAX as u128,
      IntType::U64 => u64::MAX as u128,
      IntType::U128 => u128::MAX,
      IntType::Usize => usize::MAX as u128,
      IntType::I8 => i8::MAX as u128,
      IntType::I16 => i16::MAX as u128,
      IntType::I32 => i32::MAX as u128,
      IntType::I64 => i64::MAX as u128,
      IntType::I128 => i128::MAX as u128,
      IntType::Isize => isize::MAX as u128,
    }
  }
}

impl<'a> TryFrom<&'a str> for IntType {
  type Error = ();

  fn try_from(suffix: &'a str) -> std::result::Result<Self, Self::Error> {
    match suffix {
      "" | "u128" => Ok(IntType::U128),
      "u8" => Ok(IntType::U8),
      "u16" => Ok(IntType::U16),
      "u32" => Ok(IntType::U32),
      "u64" => Ok(IntType::U64),
      "usize" => Ok(IntType::Usize),
      "i8" => Ok(IntType::I8),
      "i16" => Ok(IntType::I16),
      "i32" => Ok(IntType::I32),
      "i64" => Ok(IntType::I64),
      "i128" => Ok(IntType::I128),
      "isize" => Ok(IntType::Isize),
      _ => Err(()),
    }
  }
}
