use factorial::factorial;

fn main() {
  let _ = factorial!(2 + 3);
}
