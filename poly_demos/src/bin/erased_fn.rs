//! A bare-bones `std::function` analog built on the erased-callable support.

use poly_runtime::ErasedFn;

fn main() {
    simplelog::SimpleLogger::init(log::LevelFilter::Debug, simplelog::Config::default()).ok();

    let tostring: ErasedFn<i32, String> = ErasedFn::new(|i: i32| i.to_string());
    assert_eq!(tostring.call(1), "1");
    assert_eq!(tostring.call(2), "2");
    assert_eq!(tostring.call(3), "3");
    assert_eq!(tostring.call(-10), "-10");
    println!("tostring(-10) = {}", tostring.call(-10));

    let add: ErasedFn<(i32, i32), i32> = (|(a, b): (i32, i32)| a + b).into();
    println!("add(1, 2) = {}", add.call((1, 2)));
}
