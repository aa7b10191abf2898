//! UUID namespaces and utilities.

pub use uuid::Uuid;

/// The root namespace UUID, for use with v5 UUIDs.
pub const NAMESPACE_POLY: Uuid = Uuid::from_bytes([
    0x8a, 0x47, 0x0d, 0xd6, 0x3b, 0x18, 0x4e, 0xf5, 0x9f, 0x1c, 0x25, 0xe2, 0x7c, 0x60, 0x1f, 0x84,
]);

/// Create a v5 UUID within the poly namespace.
pub fn poly_uuid(name: &[u8]) -> Uuid {
    Uuid::new_v5(&NAMESPACE_POLY, name)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stable_ids() {
        assert_eq!(poly_uuid(b"trait"), poly_uuid(b"trait"));
        assert_ne!(poly_uuid(b"trait"), poly_uuid(b"type"));
    }
}
