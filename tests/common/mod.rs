use cyclone::mach::{Delegate, Runtime};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub struct Host {
    output: Rc<RefCell<String>>,
    inputs: VecDeque<String>,
}

impl Delegate for Host {
    fn print(&mut self, text: &str) {
        self.output.borrow_mut().push_str(text);
    }

    fn input(&mut self) -> String {
        self.inputs.pop_front().unwrap_or_default()
    }

    fn clear(&mut self) {
        self.output.borrow_mut().clear();
    }

    fn list(&mut self, entries: &[(String, String)]) {
        let mut output = self.output.borrow_mut();
        for (name, val) in entries {
            output.push_str(&format!("{} = {}\n", name, val));
        }
    }
}

pub fn runtime_with_inputs(source: &str, inputs: &[&str]) -> (Runtime, Rc<RefCell<String>>) {
    let output = Rc::new(RefCell::new(String::new()));
    let host = Host {
        output: Rc::clone(&output),
        inputs: inputs.iter().map(|s| s.to_string()).collect(),
    };
    let mut r = Runtime::new();
    r.set_delegate(Box::new(host));
    r.load_code(source).unwrap();
    (r, output)
}

pub fn runtime(source: &str) -> (Runtime, Rc<RefCell<String>>) {
    runtime_with_inputs(source, &[])
}

pub fn exec(source: &str) -> String {
    exec_with_inputs(source, &[])
}

pub fn exec_with_inputs(source: &str, inputs: &[&str]) -> String {
    let (mut r, output) = runtime_with_inputs(source, inputs);
    r.run().unwrap();
    let out = output.borrow().clone();
    out
}
