use super::{Address, Opcode, Program};
use crate::error;
use crate::lang::{Error, Operand};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Label resolution
///
/// Built once after load, read-only during execution. A control
/// transfer names a label or gives a literal address; a literal is
/// bounds-checked against the program, a name is looked up here.

#[derive(Debug, Default)]
pub struct Link {
    symbols: HashMap<Rc<str>, Address>,
}

impl Link {
    pub fn link(program: &Program) -> Result<Link> {
        let mut symbols: HashMap<Rc<str>, Address> = HashMap::new();
        for (addr, instruction) in program.instructions().iter().enumerate() {
            if *instruction.opcode() != Opcode::Label {
                continue;
            }
            if let Operand::Name(name) = instruction.operand() {
                if symbols.insert(name.clone(), addr).is_some() {
                    return Err(error!(DuplicateLabel, Some(instruction.line());
                        format!("Label duplicado: {}", name)));
                }
            }
        }
        Ok(Link { symbols })
    }

    pub fn get(&self, name: &str) -> Option<Address> {
        self.symbols.get(name).copied()
    }

    pub fn resolve(&self, operand: &Operand, program_len: usize) -> Result<Address> {
        match operand {
            Operand::Name(name) => match self.symbols.get(name) {
                Some(addr) => Ok(*addr),
                None => Err(error!(UnresolvedLabel;
                    format!("Label '{}' não encontrado", name))),
            },
            Operand::Integer(n) => {
                if *n < 0 || *n as usize >= program_len {
                    Err(error!(InvalidAddress;
                        format!("Endereço {} fora do alcance (0-{})", n, program_len as i64 - 1)))
                } else {
                    Ok(*n as Address)
                }
            }
            Operand::Decimal(_) | Operand::None => Err(error!(InvalidAddress)),
        }
    }
}
