use factorial::factorial;

fn main() {
  let _ = factorial!(13i32);
}
