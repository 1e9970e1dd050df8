// Example demonstrating the parse API on a handful of inputs

use picoval::{parse, Value, ValueType};

fn main() {
    let inputs = [
        "null", " true ", "false", "-0", "3.1416", "1E+10", "0123", "1.", "1 2", "   ", "1e400",
    ];

    let mut value = Value::default();
    for input in inputs {
        match parse(&mut value, input) {
            Ok(()) => match value.value_type() {
                ValueType::Number => println!("{input:?} -> number {:?}", value.as_f64()),
                other => println!("{input:?} -> {other:?}"),
            },
            Err(e) => println!("{input:?} -> error {e}"),
        }
    }
}
