use stackcalc_rs::{Calculator, EvaluatorOptions};

fn main() {
    pretty_env_logger::init();

    let statements = [
        "(1 + 38) * 4.5 - 1 / 2.",
        "2 * 3",
        "10 / 4",
        "1 / 3",
        "1 - 2 * 3 + 4",
        "1 / 0",
        "1,5",
    ];

    let calculator = Calculator::new();
    let legacy = Calculator::with_options(EvaluatorOptions::legacy());

    for statement in statements {
        match calculator.try_evaluate(statement) {
            Ok(result) => println!("{statement:>28} = {result}"),
            Err(err) => println!("{statement:>28} : invalid ({err})"),
        }
        println!("{:>28}   single-pop: {:?}", "", legacy.evaluate(statement));
    }
}
