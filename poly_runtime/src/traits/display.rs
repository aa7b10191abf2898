//! The Display poly trait and helper utilities.

use crate::error::Result;
use crate::poly_trait;
use crate::type_system::Registry;

poly_trait! {
    /// Format a value for user output.
    pub trait Display {
        fn fmt(&self) -> String;
    }
    table DisplayTable;
    poly DisplayPoly;
}

macro_rules! display_basic {
    ( $t:ty ) => {
        impl Display for $t {
            fn fmt(&self) -> String {
                self.to_string()
            }
        }
    };
}

display_basic!(bool);
display_basic!(i64);
display_basic!(f64);
display_basic!(String);

impl Display for () {
    fn fmt(&self) -> String {
        String::new()
    }
}

/// Register the Display implementations for the basic rust types.
pub fn register_all(registry: &Registry) -> Result<()> {
    registry.add_impl_for_type::<(), DisplayPoly>(DisplayTable::for_type::<()>())?;
    registry.add_impl_for_type::<bool, DisplayPoly>(DisplayTable::for_type::<bool>())?;
    registry.add_impl_for_type::<i64, DisplayPoly>(DisplayTable::for_type::<i64>())?;
    registry.add_impl_for_type::<f64, DisplayPoly>(DisplayTable::for_type::<f64>())?;
    registry.add_impl_for_type::<String, DisplayPoly>(DisplayTable::for_type::<String>())?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_basic_types() {
        let registry = Registry::new();
        register_all(&registry).unwrap();

        let v = DisplayPoly::from_registry(&registry, 42i64).unwrap();
        assert_eq!(v.fmt(), "42");

        let v = DisplayPoly::from_registry(&registry, true).unwrap();
        assert_eq!(v.fmt(), "true");

        let v = DisplayPoly::from_registry(&registry, String::from("direct")).unwrap();
        assert_eq!(v.fmt(), "direct");
    }

    #[test]
    fn register_all_is_one_time() {
        let registry = Registry::new();
        register_all(&registry).unwrap();
        assert!(register_all(&registry).is_err());
    }
}
