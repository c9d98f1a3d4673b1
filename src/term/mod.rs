/*!
## Terminal front-end

Runs a source file with the terminal as the host: INPUT reads a line
through linefeed, PRINT and LIST write straight through, Ctrl-C ends the
program cooperatively.

*/

use ansi_term::Style;
use cyclone::mach::{Delegate, Runtime};
use linefeed::{DefaultTerminal, Interface, ReadResult};
use std::io::Write;

pub fn main() {
    let mut args = std::env::args();
    let _executable = args.next();
    let filename = args.next();
    if args.next().is_some() {
        println!("Usage: cyclone [FILENAME]");
        return;
    }
    let result = match filename {
        Some(filename) => run_file(&filename),
        // No file: take the program from standard input.
        None => {
            let mut source = String::new();
            match std::io::Read::read_to_string(&mut std::io::stdin(), &mut source) {
                Ok(_) => run_source(&source),
                Err(error) => Err(Box::from(error)),
            }
        }
    };
    if let Err(error) = result {
        eprintln!(
            "{}",
            Style::new().bold().paint(format!("?{}", error))
        );
    }
}

fn run_file(filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(filename)?;
    run_source(&source)
}

fn run_source(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut runtime = Runtime::new();
    runtime.set_delegate(Box::new(TermDelegate::new()?));
    runtime.load_code(source)?;
    let stopper = runtime.stopper();
    ctrlc::set_handler(move || {
        stopper.end_program();
    })?;
    runtime.run()?;
    Ok(())
}

struct TermDelegate {
    interface: Interface<DefaultTerminal>,
}

impl TermDelegate {
    fn new() -> std::io::Result<TermDelegate> {
        let interface = Interface::new("INPUT")?;
        interface.set_prompt("? ")?;
        Ok(TermDelegate { interface })
    }
}

impl Delegate for TermDelegate {
    fn print(&mut self, text: &str) {
        let _ = self.interface.write_fmt(format_args!("{}", text));
    }

    fn input(&mut self) -> String {
        match self.interface.read_line() {
            Ok(ReadResult::Input(line)) => {
                self.interface.add_history_unique(line.clone());
                line
            }
            _ => String::new(),
        }
    }

    fn clear(&mut self) {
        print!("\x1B[2J\x1B[1;1H");
        let _ = std::io::stdout().flush();
    }

    fn list(&mut self, entries: &[(String, String)]) {
        for (name, val) in entries {
            let _ = self
                .interface
                .write_fmt(format_args!("{} = {}\n", name, val));
        }
    }
}
