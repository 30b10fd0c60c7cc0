use stackcalc_rs::Calculator;

fn main() {
    pretty_env_logger::init();

    let statements: Vec<String> = (0..8)
        .map(|i| format!("({i} + 38) * 4.5 - {i} / 3"))
        .chain(["(1 + 2".to_string(), "4 / (2 - 2)".to_string()])
        .collect();

    let calculator = Calculator::new();
    let results = calculator.evaluate_batch(&statements);
    for (statement, result) in statements.iter().zip(results) {
        println!("{}: {:?}", statement, result);
    }
}
