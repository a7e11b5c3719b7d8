use factorial::Factorial;

const _: u128 = Factorial::<{ -3 }>::VALUE;

fn main() {}
