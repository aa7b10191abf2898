use poly_runtime::{impl_poly_type, match_type, poly_trait, Error, Registry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

poly_trait! {
    /// Things that have an area.
    pub trait HasArea {
        fn area(&self) -> f64;
    }
    table HasAreaTable;
    poly AreaPoly;
}

poly_trait! {
    /// Values that can be scaled and described.
    pub trait Scale {
        fn scaled(&self, factor: f64) -> f64;
        fn describe(&self, prefix: String) -> String;
    }
    table ScaleTable;
    poly ScalePoly;
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

impl Scale for Circle {
    fn scaled(&self, factor: f64) -> f64 {
        self.radius * factor
    }

    fn describe(&self, prefix: String) -> String {
        format!("{} circle of radius {}", prefix, self.radius)
    }
}

#[test]
fn dispatches_to_the_concrete_impl() {
    let shape = AreaPoly::new(Circle { radius: 1.0 });
    assert_eq!(shape.area(), 3.1415);
}

#[test]
fn no_cross_talk_between_backing_types() {
    let shapes = vec![
        AreaPoly::new(Circle { radius: 1.0 }),
        AreaPoly::new(Square { side: 2.0 }),
    ];
    let areas: Vec<f64> = shapes.iter().map(|s| s.area()).collect();
    assert_eq!(areas, vec![3.1415, 4.0]);
}

#[test]
fn operations_forward_their_arguments() {
    let v = ScalePoly::new(Circle { radius: 2.0 });
    assert_eq!(v.scaled(1.5), 3.0);
    assert_eq!(v.describe("a".to_string()), "a circle of radius 2");
}

#[test]
fn construction_through_a_registry() {
    let registry = Registry::new();
    registry
        .add_impl_for_type::<Circle, AreaPoly>(HasAreaTable::for_type::<Circle>())
        .unwrap();

    let shape = AreaPoly::from_registry(&registry, Circle { radius: 2.0 }).unwrap();
    assert_eq!(shape.area(), 3.1415 * 4.0);

    // Square was never registered; construction fails before any call.
    match AreaPoly::from_registry(&registry, Square { side: 1.0 }) {
        Err(Error::MissingImpl { .. }) => (),
        r => panic!("expected MissingImpl, got {:?}", r.map(|_| ())),
    }
}

#[test]
fn registry_tables_are_shared() {
    let registry = Registry::new();
    registry
        .add_impl_for_type::<Circle, AreaPoly>(HasAreaTable::for_type::<Circle>())
        .unwrap();

    let a = AreaPoly::from_registry(&registry, Circle { radius: 1.0 }).unwrap();
    let b = AreaPoly::from_registry(&registry, Circle { radius: 3.0 }).unwrap();
    assert_eq!(a.area(), 3.1415);
    assert_eq!(b.area(), 3.1415 * 9.0);
}

#[test]
fn duplicate_registration_is_rejected() {
    let registry = Registry::new();
    registry
        .add_impl_for_type::<Circle, AreaPoly>(HasAreaTable::for_type::<Circle>())
        .unwrap();
    assert!(matches!(
        registry.add_impl_for_type::<Circle, AreaPoly>(HasAreaTable::for_type::<Circle>()),
        Err(Error::DuplicateImpl { .. })
    ));
}

#[test]
fn typed_access_to_the_backing_value() {
    let shape = AreaPoly::new(Circle { radius: 1.0 });
    assert!(shape.as_type::<Square>().is_none());
    assert_eq!(shape.as_type::<Circle>().unwrap().radius, 1.0);

    let name = match_type!(shape.value_type().clone() => {
        Square => "square",
        Circle => "circle",
        => "other"
    });
    assert_eq!(name, "circle");

    let circle = shape.into_type::<Circle>().ok().unwrap();
    assert_eq!(circle.radius, 1.0);
}

#[test]
fn into_type_with_the_wrong_type_returns_the_holder() {
    let shape = AreaPoly::new(Circle { radius: 1.0 });
    let shape = match shape.into_type::<Square>() {
        Ok(_) => panic!("downcast to the wrong type succeeded"),
        Err(shape) => shape,
    };
    assert_eq!(shape.area(), 3.1415);
}

#[test]
fn drop_runs_the_concrete_destructor_once() {
    struct Guard {
        count: Arc<AtomicUsize>,
        area: f64,
    }

    impl_poly_type!(Guard);

    impl HasArea for Guard {
        fn area(&self) -> f64 {
            self.area
        }
    }

    impl Drop for Guard {
        fn drop(&mut self) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    let count = Arc::new(AtomicUsize::new(0));
    let shape = AreaPoly::new(Guard {
        count: count.clone(),
        area: 7.0,
    });
    assert_eq!(shape.area(), 7.0);
    assert_eq!(count.load(Ordering::SeqCst), 0);
    drop(shape);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
