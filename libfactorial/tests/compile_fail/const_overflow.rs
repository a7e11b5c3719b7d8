use factorial::Factorial;

const _: u128 = Factorial::<35>::VALUE;

fn main() {}
