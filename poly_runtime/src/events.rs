//! Statically checked event callbacks.
//!
//! An event set declares a closed collection of events, each with a payload
//! type and a zero-sized token. Registering or triggering an event the set
//! does not declare is a compile error, so triggering never probes a lookup
//! table for unknown names.

/// A callback registered for an event with payload `Args`.
pub type Callback<Args> = Box<dyn Fn(&Args) + Send + Sync>;

/// An event declared by the event set `S`.
///
/// Implemented for event tokens by [`event_set!`](crate::event_set).
pub trait Event<S>: Copy {
    /// The payload delivered to callbacks.
    type Args;

    /// The callbacks registered in `set`, in registration order.
    fn handlers(set: &S) -> &[Callback<Self::Args>];

    /// Mutable access to the callbacks registered in `set`.
    fn handlers_mut(set: &mut S) -> &mut Vec<Callback<Self::Args>>;
}

/// Registration and triggering over the events a set declares.
pub trait EventSet: Sized {
    /// Register a callback for an event.
    ///
    /// Callbacks for one event run in the order they were registered.
    fn on<E: Event<Self>>(&mut self, _event: E, f: impl Fn(&E::Args) + Send + Sync + 'static) {
        E::handlers_mut(self).push(Box::new(f));
    }

    /// Invoke every callback registered for an event, in registration order.
    ///
    /// Triggering an event with no registered callbacks is a no-op.
    fn trigger<E: Event<Self>>(&self, _event: E, args: E::Args) {
        log::trace!("triggering {}", std::any::type_name::<E>());
        for f in E::handlers(self) {
            f(&args);
        }
    }
}

/// Declare an event set with statically checked event names.
///
/// Each declaration names a storage field, a zero-sized token type, and the
/// payload type callbacks receive. The tokens are the only way to refer to an
/// event, so a name outside the declaration does not compile.
///
/// ```
/// use poly_runtime::event_set;
/// use poly_runtime::events::EventSet;
///
/// event_set! {
///     /// Demo events.
///     pub struct DemoEvents {
///         foo: Foo(String),
///         bar: Bar(i32),
///     }
/// }
///
/// let mut events = DemoEvents::default();
/// events.on(Foo, |s: &String| println!("foo with '{}'", s));
/// events.trigger(Foo, "hello".to_string());
/// events.trigger(Bar, 4); // declared, no callbacks: a no-op
/// // events.trigger(Baz, ()); // does not compile
/// ```
#[macro_export]
macro_rules! event_set {
    (
        $(#[$attr:meta])*
        $vis:vis struct $set:ident {
            $(
                $(#[$eattr:meta])*
                $field:ident : $tok:ident ( $args:ty )
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Default)]
        $vis struct $set {
            $( $field: Vec<$crate::events::Callback<$args>>, )+
        }

        impl $crate::events::EventSet for $set {}

        $(
            $(#[$eattr])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            $vis struct $tok;

            impl $crate::events::Event<$set> for $tok {
                type Args = $args;

                fn handlers(set: &$set) -> &[$crate::events::Callback<$args>] {
                    &set.$field
                }

                fn handlers_mut(set: &mut $set) -> &mut Vec<$crate::events::Callback<$args>> {
                    &mut set.$field
                }
            }
        )+
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    event_set! {
        struct TestEvents {
            strings: Strings(String),
            numbers: Numbers(i32),
        }
    }

    #[test]
    fn callbacks_run_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut events = TestEvents::default();
        let s = seen.clone();
        events.on(Strings, move |v: &String| s.lock().push(format!("first {}", v)));
        let s = seen.clone();
        events.on(Strings, move |v: &String| s.lock().push(format!("second {}", v)));

        events.trigger(Strings, "hello".to_string());
        assert_eq!(&*seen.lock(), &["first hello", "second hello"]);
    }

    #[test]
    fn events_do_not_cross_talk() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut events = TestEvents::default();
        let s = seen.clone();
        events.on(Numbers, move |v: &i32| s.lock().push(*v));

        events.trigger(Strings, "ignored".to_string());
        assert!(seen.lock().is_empty());

        events.trigger(Numbers, 4);
        assert_eq!(&*seen.lock(), &[4]);
    }

    #[test]
    fn trigger_without_callbacks_is_a_noop() {
        let events = TestEvents::default();
        events.trigger(Numbers, 4);
        events.trigger(Strings, "nobody listens".to_string());
    }

    #[test]
    fn tokens_are_plain_identifiers() {
        assert_eq!(Strings, Strings);
        let copied = Numbers;
        assert_eq!(copied, Numbers);
    }
}
