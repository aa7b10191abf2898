//! Erase shapes behind a uniform holder and dispatch by operation name.
//!
//! Demonstrates both construction paths: building the dispatch table inline,
//! and sharing a table through a registry.

use poly_runtime::{impl_poly_type, poly_trait, Registry};

poly_trait! {
    /// Things that have an area.
    pub trait HasArea {
        fn area(&self) -> f64;
    }
    table HasAreaTable;
    poly AreaPoly;
}

struct Circle {
    radius: f64,
}

struct Square {
    side: f64,
}

impl_poly_type!(Circle);
impl_poly_type!(Square);

impl HasArea for Circle {
    fn area(&self) -> f64 {
        3.1415 * (self.radius * self.radius)
    }
}

impl HasArea for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

fn print_area(shape: &AreaPoly) {
    println!("This shape has an area of {}", shape.area());
}

fn main() {
    simplelog::SimpleLogger::init(log::LevelFilter::Debug, simplelog::Config::default()).ok();

    let c = Circle { radius: 1.0 };
    print_area(&AreaPoly::new(c));

    // The same call code routes each holder to its own type's implementation.
    let shapes = vec![
        AreaPoly::new(Circle { radius: 2.0 }),
        AreaPoly::new(Square { side: 2.0 }),
    ];
    for shape in &shapes {
        print_area(shape);
    }

    let registry = Registry::new();
    registry
        .add_impl_for_type::<Circle, AreaPoly>(HasAreaTable::for_type::<Circle>())
        .expect("fresh registry");
    let shape = AreaPoly::from_registry(&registry, Circle { radius: 3.0 })
        .expect("impl registered above");
    print_area(&shape);
}
