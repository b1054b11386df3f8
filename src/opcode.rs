use std::fmt;

macro_rules! opcodes {
    ( $( ($code:literal, $name:ident, $text:expr, $imm:ident, $run:expr), )*) => {
        impl Opcode {
            pub fn from_code(code: u8) -> Option<Opcode> {
                match code {
                    $(
                        $code => Some(Opcode { code: $code, text: $text, imm: ImmediateType::$imm, supported: $run }),
                    )*
                    _ => None,
                }
            }
        }

        $(
            pub const $name: u8 = $code;
        )*
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ImmediateType {
    None,
    Block,
    Branch,
    Local,
    Call,
    Memory,
    I32,
    F32,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Opcode {
    pub code: u8,
    pub text: &'static str,
    pub imm: ImmediateType,
    pub supported: bool,
}

impl Opcode {
    pub fn immediate_type(&self) -> ImmediateType {
        self.imm
    }

    /// Returns true if the interpreter can execute this opcode.
    pub fn is_supported(&self) -> bool {
        self.supported
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/*
 * code: opcode
 * NAME: constant name
 * text: opcode name in the text format
 *  imm: immediate operand that follows the opcode
 *  run: executed by the interpreter
 *
 *  code  NAME          text         imm     run
 *  ============================================= */
opcodes!{
  (0x01, NOP,         "nop",         None,   true),
  (0x02, BLOCK,       "block",       Block,  false),
  (0x03, LOOP,        "loop",        Block,  false),
  (0x0b, END,         "end",         None,   true),
  (0x0c, BR,          "br",          Branch, false),
  (0x0d, BR_IF,       "br_if",       Branch, false),
  (0x10, CALL,        "call",        Call,   false),
  (0x20, LOCAL_GET,   "local.get",   Local,  true),
  (0x21, LOCAL_SET,   "local.set",   Local,  false),
  (0x3a, I32_STORE8,  "i32.store8",  Memory, false),
  (0x41, I32_CONST,   "i32.const",   I32,    true),
  (0x43, F32_CONST,   "f32.const",   F32,    false),
  (0x45, I32_EQZ,     "i32.eqz",     None,   false),
  (0x46, I32_EQ,      "i32.eq",      None,   false),
  (0x5b, F32_EQ,      "f32.eq",      None,   false),
  (0x5d, F32_LT,      "f32.lt",      None,   false),
  (0x5e, F32_GT,      "f32.gt",      None,   false),
  (0x6a, I32_ADD,     "i32.add",     None,   true),
  (0x6b, I32_SUB,     "i32.sub",     None,   true),
  (0x6c, I32_MUL,     "i32.mul",     None,   true),
  (0x6d, I32_DIV_S,   "i32.div_s",   None,   true),
  (0x71, I32_AND,     "i32.and",     None,   false),
  (0x92, F32_ADD,     "f32.add",     None,   false),
  (0x93, F32_SUB,     "f32.sub",     None,   false),
  (0x94, F32_MUL,     "f32.mul",     None,   false),
  (0x95, F32_DIV,     "f32.div",     None,   false),
}
