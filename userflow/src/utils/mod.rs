//! Utility functions for identifier generation.

mod ids;

pub use ids::{generate_uuid, generate_uuid_v7, IdStrategy};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uuid_is_valid() {
        let id = generate_uuid();
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_generate_uuid_v7_is_valid() {
        let id = generate_uuid_v7();
        assert_eq!(id.get_version_num(), 7);
    }
}
