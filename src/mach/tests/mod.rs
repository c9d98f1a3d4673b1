use super::{Delegate, Runtime, Val};
use std::cell::RefCell;
use std::rc::Rc;

mod for_test;

#[derive(Default)]
struct Capture {
    output: Rc<RefCell<String>>,
    inputs: Rc<RefCell<Vec<String>>>,
}

impl Delegate for Capture {
    fn print(&mut self, text: &str) {
        self.output.borrow_mut().push_str(text);
    }
    fn input(&mut self) -> String {
        let mut inputs = self.inputs.borrow_mut();
        if inputs.is_empty() {
            String::new()
        } else {
            inputs.remove(0)
        }
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

fn runtime(source: &str) -> (Runtime, Rc<RefCell<String>>) {
    let capture = Capture::default();
    let output = Rc::clone(&capture.output);
    let mut r = Runtime::new();
    r.set_delegate(Box::new(capture));
    r.load_code(source).unwrap();
    (r, output)
}

fn exec(source: &str) -> String {
    let (mut r, output) = runtime(source);
    r.run().unwrap();
    let out = output.borrow().clone();
    out
}
