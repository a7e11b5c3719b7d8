use factorial::Factorial;

const _: u128 = Factorial::<200>::VALUE;

fn main() {}
