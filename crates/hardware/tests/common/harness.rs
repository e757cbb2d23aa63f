use bytesim_core::Simulator;
use bytesim_core::common::{ExecError, Reg};
use bytesim_core::config::{Config, IndexPolicy, IndirectMode};
use bytesim_core::core::Cpu;
use bytesim_core::stats::SimStats;

/// A decoded program ready to run, with accessors for the resulting state.
#[derive(Debug)]
pub struct TestContext {
    /// The simulator under test.
    pub sim: Simulator,
}

impl TestContext {
    /// Decodes `source` with the default configuration.
    ///
    /// Panics if the source does not decode; use `Simulator::from_source` to test decode errors.
    pub fn new(source: &str) -> Self {
        Self::with_config(source, &Config::default())
    }

    /// Decodes `source` with an explicit configuration and installs the test log writer.
    pub fn with_config(source: &str, config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("bytesim_core=trace")
            .try_init();

        let sim = Simulator::from_source(source, config).unwrap();
        Self { sim }
    }

    /// Decodes `source` with `[Rm]` resolved to the value held in `Rm`.
    pub fn value_addressed(source: &str, policy: IndexPolicy) -> Self {
        let mut config = Config::default();
        config.memory.indirect_mode = IndirectMode::RegisterValue;
        config.memory.index_policy = policy;
        Self::with_config(source, &config)
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Convenience accessor for the run counters.
    pub fn stats(&self) -> &SimStats {
        &self.sim.cpu.stats
    }

    /// Runs to completion, panicking on a runtime error.
    pub fn run(mut self) -> Self {
        if let Err(e) = self.sim.run() {
            panic!("unexpected runtime error: {e}");
        }
        self
    }

    /// Runs to completion and returns the runtime error.
    pub fn run_err(mut self) -> ExecError {
        match self.sim.run() {
            Ok(stats) => panic!("expected a runtime error, run finished with {stats:?}"),
            Err(e) => e,
        }
    }

    /// Executes a single instruction.
    pub fn step(&mut self) -> bool {
        self.sim.step().unwrap()
    }

    /// Reads a register by mnemonic number (`1` is `R1`).
    pub fn reg(&self, n: u8) -> i8 {
        self.sim.cpu.regs.read(Reg::from_number(n).unwrap())
    }
}
