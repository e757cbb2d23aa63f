//! Assembly source builder.
//!
//! Writes one `<address>\t<instruction>` line per call, numbering addresses
//! sequentially from the starting address. Register arguments are the mnemonic
//! numbers (`1` is `R1`).

/// Fluent builder for `<address>\t<instruction>` source text.
#[derive(Debug, Clone)]
pub struct ProgramBuilder {
    next: u32,
    lines: Vec<String>,
}

impl Default for ProgramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramBuilder {
    /// Starts a program at address 0.
    pub fn new() -> Self {
        Self::at(0)
    }

    /// Starts a program at `addr`.
    pub fn at(addr: u32) -> Self {
        Self {
            next: addr,
            lines: Vec::new(),
        }
    }

    /// Address the next instruction will be placed at.
    pub fn next_addr(&self) -> u32 {
        self.next
    }

    /// Appends a raw instruction text at the next address.
    pub fn inst(mut self, text: &str) -> Self {
        self.lines.push(format!("{}\t{}", self.next, text));
        self.next += 1;
        self
    }

    /// Appends `MOV Rrd, imm`.
    pub fn mov(self, rd: u8, imm: i8) -> Self {
        self.inst(&format!("MOV R{rd}, {imm}"))
    }

    /// Appends `ADD Rrd, Rrs`.
    pub fn add(self, rd: u8, rs: u8) -> Self {
        self.inst(&format!("ADD R{rd}, R{rs}"))
    }

    /// Appends `ADD Rrd, imm`.
    pub fn addi(self, rd: u8, imm: i8) -> Self {
        self.inst(&format!("ADD R{rd}, {imm}"))
    }

    /// Appends `CMP Rrs1, Rrs2`.
    pub fn cmp(self, rs1: u8, rs2: u8) -> Self {
        self.inst(&format!("CMP R{rs1}, R{rs2}"))
    }

    /// Appends `JE target`.
    pub fn je(self, target: i8) -> Self {
        self.inst(&format!("JE {target}"))
    }

    /// Appends `JMP target`.
    pub fn jmp(self, target: i8) -> Self {
        self.inst(&format!("JMP {target}"))
    }

    /// Appends `LD Rrd, [Rbase]`.
    pub fn ld(self, rd: u8, base: u8) -> Self {
        self.inst(&format!("LD R{rd}, [R{base}]"))
    }

    /// Appends `ST [Rbase], Rrs`.
    pub fn st(self, base: u8, rs: u8) -> Self {
        self.inst(&format!("ST [R{base}], R{rs}"))
    }

    /// Returns the source text, newline separated.
    pub fn build(&self) -> String {
        self.lines.join("\n")
    }
}
