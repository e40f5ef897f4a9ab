// src/circuits/mod.rs

//! The append-only circuit description protocols are assembled into.
//!
//! A [`Circuit`] owns the qubit and classical-bit handles it declares and
//! the ordered sequence of [`Operation`]s applied to them. Handles are
//! allocated from a per-circuit counter, so repeated sub-protocol
//! invocations can never collide; labels exist for rendering and
//! diagnostics and must be unique within the circuit.
//!
//! Every append is validated before anything is pushed: operations may only
//! reference declared handles, a classical bit is written by at most one
//! measurement, and a conditioned operation may only read a bit an earlier
//! measurement has written. A rejected append leaves the circuit exactly
//! as it was; the sequence is never truncated or reordered around an
//! error.

use crate::core::{ClbitId, QrelayError, QubitId};
use crate::operations::{Gate, Operation};
use std::collections::HashSet;
use std::fmt;

/// An ordered, validated sequence of operations over declared registers.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Label per qubit; the index is the qubit's handle value.
    qubit_labels: Vec<String>,
    /// Label per classical bit; the index is the bit's outcome position.
    clbit_labels: Vec<String>,
    /// All labels declared so far, for duplicate rejection.
    labels: HashSet<String>,
    /// Per-clbit flag: has a measurement written this bit yet?
    written: Vec<bool>,
    /// The operation sequence. Append-only.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            qubit_labels: Vec::new(),
            clbit_labels: Vec::new(),
            labels: HashSet::new(),
            written: Vec::new(),
            operations: Vec::new(),
        }
    }

    /// Declares one qubit of storage and returns its handle.
    ///
    /// # Errors
    /// [`QrelayError::DuplicateRegister`] if `label` is already declared on
    /// this circuit.
    pub fn add_qubit(&mut self, label: impl Into<String>) -> Result<QubitId, QrelayError> {
        let label = label.into();
        self.claim_label(&label)?;
        let id = QubitId(self.qubit_labels.len() as u64);
        self.qubit_labels.push(label);
        Ok(id)
    }

    /// Declares one classical bit and returns its handle. Its position in
    /// outcome strings is the declaration index.
    ///
    /// # Errors
    /// [`QrelayError::DuplicateRegister`] if `label` is already declared on
    /// this circuit.
    pub fn add_clbit(&mut self, label: impl Into<String>) -> Result<ClbitId, QrelayError> {
        let label = label.into();
        self.claim_label(&label)?;
        let id = ClbitId(self.clbit_labels.len() as u64);
        self.clbit_labels.push(label);
        self.written.push(false);
        Ok(id)
    }

    fn claim_label(&mut self, label: &str) -> Result<(), QrelayError> {
        if !self.labels.insert(label.to_string()) {
            return Err(QrelayError::DuplicateRegister {
                label: label.to_string(),
            });
        }
        Ok(())
    }

    /// Number of declared qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubit_labels.len()
    }

    /// Number of declared classical bits; also the width of outcome strings.
    pub fn num_clbits(&self) -> usize {
        self.clbit_labels.len()
    }

    /// Label of a declared qubit.
    pub fn qubit_label(&self, qubit: QubitId) -> Option<&str> {
        self.qubit_labels.get(qubit.index()).map(String::as_str)
    }

    /// Label of a declared classical bit.
    pub fn clbit_label(&self, clbit: ClbitId) -> Option<&str> {
        self.clbit_labels.get(clbit.position()).map(String::as_str)
    }

    /// The ordered operation sequence.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Total number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// `true` if no operation has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Appends an operation after validating every handle it references.
    ///
    /// # Errors
    /// * [`QrelayError::ReferenceViolation`]: an undeclared qubit or clbit.
    /// * [`QrelayError::InvalidOperation`]: a multi-qubit operation naming
    ///   the same qubit twice, a measurement into an already-written bit,
    ///   or a conditioned operation reading a bit no earlier measurement
    ///   has written.
    pub fn append(&mut self, op: Operation) -> Result<(), QrelayError> {
        for qubit in op.involved_qubits() {
            if qubit.index() >= self.qubit_labels.len() {
                return Err(QrelayError::ReferenceViolation {
                    message: format!("{} is not declared on this circuit", qubit),
                });
            }
        }
        self.check_distinct(&op)?;

        match &op {
            Operation::Measure { qubit, clbit } => {
                self.check_clbit_declared(*clbit)?;
                if self.written[clbit.position()] {
                    return Err(QrelayError::InvalidOperation {
                        message: format!(
                            "{} is already written; a classical bit receives at most one measurement (attempted from {})",
                            clbit, qubit
                        ),
                    });
                }
                self.written[clbit.position()] = true;
            }
            Operation::Conditioned { control, .. } => {
                self.check_clbit_declared(*control)?;
                if !self.written[control.position()] {
                    return Err(QrelayError::InvalidOperation {
                        message: format!(
                            "conditioned operation reads {}, which no earlier measurement has written",
                            control
                        ),
                    });
                }
            }
            _ => {}
        }

        self.operations.push(op);
        Ok(())
    }

    fn check_clbit_declared(&self, clbit: ClbitId) -> Result<(), QrelayError> {
        if clbit.position() >= self.clbit_labels.len() {
            return Err(QrelayError::ReferenceViolation {
                message: format!("{} is not declared on this circuit", clbit),
            });
        }
        Ok(())
    }

    fn check_distinct(&self, op: &Operation) -> Result<(), QrelayError> {
        let qubits = op.involved_qubits();
        let mut seen = HashSet::with_capacity(qubits.len());
        for qubit in &qubits {
            if !seen.insert(*qubit) {
                return Err(QrelayError::InvalidOperation {
                    message: format!("{} appears more than once in one operation", qubit),
                });
            }
        }
        Ok(())
    }

    // --- Convenience appenders, mirroring the standard gate vocabulary ---

    /// Hadamard on `target`.
    pub fn h(&mut self, target: QubitId) -> Result<(), QrelayError> {
        self.append(Operation::Single {
            target,
            gate: Gate::Hadamard,
        })
    }

    /// Bit flip on `target`.
    pub fn x(&mut self, target: QubitId) -> Result<(), QrelayError> {
        self.append(Operation::Single {
            target,
            gate: Gate::PauliX,
        })
    }

    /// Phase flip on `target`.
    pub fn z(&mut self, target: QubitId) -> Result<(), QrelayError> {
        self.append(Operation::Single {
            target,
            gate: Gate::PauliZ,
        })
    }

    /// Controlled-NOT from `control` to `target`.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> Result<(), QrelayError> {
        self.append(Operation::ControlledNot { control, target })
    }

    /// Controlled swap of `first` and `second`, gated by `control`.
    pub fn cswap(
        &mut self,
        control: QubitId,
        first: QubitId,
        second: QubitId,
    ) -> Result<(), QrelayError> {
        self.append(Operation::ControlledSwap {
            control,
            first,
            second,
        })
    }

    /// Measure `qubit` into `clbit`.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> Result<(), QrelayError> {
        self.append(Operation::Measure { qubit, clbit })
    }

    /// Bit flip on `target` when `control` was measured as 1.
    pub fn x_if(&mut self, control: ClbitId, target: QubitId) -> Result<(), QrelayError> {
        self.append(Operation::Conditioned {
            control,
            value: true,
            target,
            gate: Gate::PauliX,
        })
    }

    /// Phase flip on `target` when `control` was measured as 1.
    pub fn z_if(&mut self, control: ClbitId, target: QubitId) -> Result<(), QrelayError> {
        self.append(Operation::Conditioned {
            control,
            value: true,
            target,
            gate: Gate::PauliZ,
        })
    }

    /// Scheduling barrier. No semantic effect on outcomes.
    pub fn barrier(&mut self) -> Result<(), QrelayError> {
        self.append(Operation::Barrier)
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.qubit_labels.is_empty() {
            return writeln!(f, "qrelay::Circuit[0 operations on 0 qubits]");
        }

        let ops = &self.operations;
        let num_ops = ops.len();
        let num_qubits = self.qubit_labels.len();

        let max_label_width = self
            .qubit_labels
            .iter()
            .map(|l| l.len())
            .max()
            .unwrap_or(0);
        let label_padding = " ".repeat(max_label_width + 2);

        const GATE_WIDTH: usize = 7;
        const WIRE: &str = "───────";
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // op_grid[row][time] holds the gate/wire segment for that cell;
        // v_connect[row][time] the connector drawn below the row.
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_qubits];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre = total_dashes / 2;
                let post = total_dashes - pre;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre),
                    symbol,
                    H_WIRE.to_string().repeat(post)
                )
            }
        }

        let connect = |grid: &mut Vec<Vec<char>>, rows: &[usize], t: usize| {
            let (Some(r_min), Some(r_max)) = (rows.iter().min(), rows.iter().max()) else {
                return;
            };
            for row_vec in grid.iter_mut().take(*r_max).skip(*r_min) {
                row_vec[t] = V_WIRE;
            }
        };

        for (t, op) in ops.iter().enumerate() {
            match op {
                Operation::Single { target, gate } => {
                    op_grid[target.index()][t] = format_gate(gate.symbol());
                }
                Operation::ControlledNot { control, target } => {
                    op_grid[control.index()][t] = format_gate("@");
                    op_grid[target.index()][t] = format_gate("X");
                    connect(&mut v_connect, &[control.index(), target.index()], t);
                }
                Operation::ControlledSwap {
                    control,
                    first,
                    second,
                } => {
                    op_grid[control.index()][t] = format_gate("@");
                    op_grid[first.index()][t] = format_gate("×");
                    op_grid[second.index()][t] = format_gate("×");
                    connect(
                        &mut v_connect,
                        &[control.index(), first.index(), second.index()],
                        t,
                    );
                }
                Operation::Measure { qubit, .. } => {
                    op_grid[qubit.index()][t] = format_gate("M");
                }
                Operation::Conditioned { target, gate, .. } => {
                    let symbol = format!("{}?", gate.symbol());
                    op_grid[target.index()][t] = format_gate(&symbol);
                }
                Operation::Barrier => {
                    for row in op_grid.iter_mut() {
                        row[t] = format_gate("┆");
                    }
                }
            }
        }

        writeln!(
            f,
            "qrelay::Circuit[{} operations on {} qubits, {} clbits]",
            num_ops,
            num_qubits,
            self.clbit_labels.len()
        )?;
        for r in 0..num_qubits {
            let label = format!("{}: ", self.qubit_labels[r]);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let connector = v_connect[r][t];
                    let padding_needed = GATE_WIDTH.saturating_sub(1);
                    let pre = padding_needed / 2;
                    let post = padding_needed - pre;
                    write!(f, "{}{}{}", " ".repeat(pre), connector, " ".repeat(post))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
