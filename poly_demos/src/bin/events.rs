//! Event callbacks with statically checked event names.

use poly_runtime::event_set;
use poly_runtime::events::EventSet;

event_set! {
    /// The demo event set.
    pub struct DemoEvents {
        foo: Foo(String),
        bar: Bar(i32),
        baz: Baz(f64),
    }
}

fn main() {
    simplelog::SimpleLogger::init(log::LevelFilter::Trace, simplelog::Config::default()).ok();

    let mut events = DemoEvents::default();

    events.on(Foo, |s: &String| println!("foo with '{}'!", s));
    events.on(Foo, |s: &String| println!("foo with '{}' again!", s));
    events.on(Bar, |i: &i32| println!("bar with '{}'!", i));
    events.on(Baz, |d: &f64| println!("baz with '{}'!", d));
    // events.on(Unknown, |_: &()| {}); // does not compile

    events.trigger(Foo, "hello".to_string()); // no lookup for unknown events
    events.trigger(Bar, 4);
    events.trigger(Baz, 3.3);
    // events.trigger(Unknown, ()); // does not compile
}
