use super::{Address, Opcode};
use crate::lang::{Line, Operand, Token};

/// One loaded instruction. The 0-based source line rides along for
/// error reports only; the instruction's address is its position in
/// the program.

#[derive(Debug, PartialEq)]
pub struct Instruction {
    opcode: Opcode,
    operand: Operand,
    line: usize,
}

impl Instruction {
    fn from_line(line: Line) -> Instruction {
        let number = line.number();
        let (opcode, operand) = match line.into_token() {
            Token::Empty => (Opcode::Empty, Operand::None),
            Token::Label(name) => (Opcode::Label, Operand::Name(name)),
            Token::Statement(mnemonic, operand) => (Opcode::from_mnemonic(&mnemonic), operand),
        };
        Instruction {
            opcode,
            operand,
            line: number,
        }
    }

    pub fn opcode(&self) -> &Opcode {
        &self.opcode
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

/// ## Loaded program
///
/// Ordered and immutable after load. Every input line becomes exactly
/// one instruction, blank and comment lines included, so addresses and
/// reported line numbers stay aligned with the source file.

#[derive(Debug, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn compile(source: &str) -> Program {
        let instructions = source
            .lines()
            .enumerate()
            .map(|(number, text)| Instruction::from_line(Line::from_str(number, text)))
            .collect();
        Program { instructions }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, addr: Address) -> Option<&Instruction> {
        self.instructions.get(addr)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_instruction_per_line() {
        let source = "PUSH 1\n\n# comentário\nloop:\nHALT\n";
        let program = Program::compile(source);
        assert_eq!(program.len(), 5);
        for (addr, instruction) in program.instructions().iter().enumerate() {
            assert_eq!(instruction.line(), addr);
        }
        assert_eq!(*program.get(1).unwrap().opcode(), Opcode::Empty);
        assert_eq!(*program.get(2).unwrap().opcode(), Opcode::Empty);
        assert_eq!(*program.get(3).unwrap().opcode(), Opcode::Label);
    }

    #[test]
    fn test_unknown_mnemonics_load() {
        let program = Program::compile("FOO 1");
        assert_eq!(
            *program.get(0).unwrap().opcode(),
            Opcode::Unknown("FOO".into())
        );
    }
}
