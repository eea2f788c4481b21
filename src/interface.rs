pub mod command;
pub mod view;

use std::io::{BufRead, Write};

use anyhow::Result;
use log::*;
use rand::Rng;

use crate::memory::{AllocError, PartitionTable, Process, ProcessId};
use command::{parse_integer, Command};
use view::TableView;

/// Interactive session driving a partition table from a line-based
/// input, one menu choice at a time.
pub struct Interface<R, W, G> {
    /// The simulated memory.
    memory: PartitionTable,
    /// Last process id handed out; ids start at 1.
    last_process_id: ProcessId,
    /// Source of process sizes.
    rng: G,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write, G: Rng> Interface<R, W, G> {
    pub fn new(memory: PartitionTable, rng: G, input: R, output: W) -> Self {
        Self {
            memory,
            last_process_id: 0,
            rng,
            input,
            output,
        }
    }

    pub fn memory(&self) -> &PartitionTable {
        &self.memory
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the user exits or the input is
    /// exhausted.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(answer) = self.prompt("Choose an option: ")? else {
                info!("Input closed, leaving.");
                return Ok(());
            };

            // Anything that is not one of the menu keys is
            // reported and the menu is shown again.
            let command = match answer.parse::<Command>() {
                Ok(command) => command,
                Err(error) => {
                    debug!("{error}");
                    writeln!(self.output, "Wrong input\n\n\n")?;
                    continue;
                }
            };

            if !self.dispatch(command)? {
                return Ok(());
            }
        }
    }

    /// Executes a single command. Returns `false` once the session
    /// should stop.
    pub fn dispatch(&mut self, command: Command) -> Result<bool> {
        debug!("Dispatching {command:?}.");

        match command {
            Command::ShowTable => self.show_memory_table()?,
            Command::AddProcess => self.add_process()?,
            Command::EndProcess => self.end_process()?,
            Command::Convert => self.convert()?,
            Command::Exit => return Ok(false),
        }

        Ok(true)
    }

    fn print_menu(&mut self) -> Result<()> {
        for command in Command::ALL {
            writeln!(self.output, "{}. {}", command.key(), command.label())?;
        }
        Ok(())
    }

    fn show_memory_table(&mut self) -> Result<()> {
        let view = TableView::new(&self.memory.render());
        writeln!(self.output, "{view}")?;
        Ok(())
    }

    fn add_process(&mut self) -> Result<()> {
        // The id is consumed even if the process cannot be
        // loaded, so ids of refused processes are never reused.
        self.last_process_id += 1;
        let size = self.rng.gen_range(1..=self.memory.memory_size());
        let process = Process::new(self.last_process_id, size)?;

        match self.memory.allocate(process) {
            Ok(partition) => {
                info!(
                    "Loaded {} ({} bytes) at {:04X}.",
                    process,
                    size,
                    partition.address()
                );
            }
            Err(error @ AllocError::OutOfSpace { .. }) => {
                warn!("{error}");
                writeln!(self.output, "Not enough space to load a process")?;
            }
            Err(error) => return Err(error.into()),
        }

        Ok(())
    }

    fn end_process(&mut self) -> Result<()> {
        let Some(answer) = self.prompt("Enter a process id: ")? else {
            return Ok(());
        };

        let process_id = match parse_integer::<ProcessId>(&answer) {
            Ok(process_id) => process_id,
            Err(error) => {
                debug!("{error}");
                writeln!(self.output, "Process id must be an integer!")?;
                return Ok(());
            }
        };

        match self.memory.release(process_id) {
            Ok(process) => info!("Ended {process}."),
            Err(error) => writeln!(self.output, "{error}")?,
        }

        Ok(())
    }

    fn convert(&mut self) -> Result<()> {
        let Some(process_id) = self.prompt("Enter a process id: ")? else {
            return Ok(());
        };
        let Some(offset) = self.prompt("Enter an offset: ")? else {
            return Ok(());
        };

        let parsed = parse_integer::<ProcessId>(&process_id)
            .and_then(|id| Ok((id, parse_integer::<u64>(&offset)?)));
        let (process_id, offset) = match parsed {
            Ok(parsed) => parsed,
            Err(error) => {
                debug!("{error}");
                writeln!(self.output, "Process id and offset must be integers!")?;
                return Ok(());
            }
        };

        match self.memory.translate(process_id, offset) {
            Ok(address) => writeln!(self.output, "{address:04X}")?,
            Err(error @ AllocError::OffsetOutOfRange { .. }) => {
                debug!("{error}");
                writeln!(self.output, "Offset cannot be larger than the partition size")?;
            }
            Err(error) => writeln!(self.output, "{error}")?,
        }

        Ok(())
    }

    /// Prints the prompt and reads one line. `None` means the input
    /// reached its end.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end().to_string()))
    }
}
