use stackcalc_rs::build_pyramid;

fn main() {
    pretty_env_logger::init();

    let inputs = vec![vec![1, 3, 2, 9, 4, 5], vec![1, 2, 3, 4]];

    for numbers in inputs {
        match build_pyramid(&numbers) {
            Ok(pyramid) => {
                for row in pyramid {
                    println!("{:?}", row);
                }
            }
            Err(err) => println!("{:?}: {}", numbers, err),
        }
    }
}
