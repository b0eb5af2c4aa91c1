mod fraction;
mod id;
mod test_util;

pub use fraction::Fraction;
pub use id::{
    Id,
    Identifiable,
};
#[cfg(test)]
pub(crate) use test_util::{
    test_deserialization,
    test_serialization,
    test_string_deserialization,
    test_string_serialization,
};
