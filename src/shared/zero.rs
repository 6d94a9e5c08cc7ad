//! Zero-value detection used to omit unset fields from outgoing payloads.
//!
//! Fields opt in with `#[serde(skip_serializing_if = "is_zero")]`, so the
//! omission happens inside the serializer and no runtime type walk is needed.
//!
//! Rules:
//! - numbers are zero at `0`, `bool` at `false`, strings when empty;
//! - sequences, maps and sets are zero when empty;
//! - fixed-size arrays and tuples are zero when every element is zero;
//! - `Option<T>` is zero when `None` or when the inner value is zero;
//! - structs are zero when every listed field is zero (see [`impl_is_zero!`]).
//!
//! A field explicitly set to its zero value cannot be told apart from an
//! unset one and is omitted too.
//!
//! [`impl_is_zero!`]: crate::impl_is_zero

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Whether a value equals its type's zero/default value.
pub trait IsZero {
    fn is_zero(&self) -> bool;
}

/// Free-function form, usable as a serde `skip_serializing_if` path.
pub fn is_zero<T: IsZero + ?Sized>(value: &T) -> bool {
    value.is_zero()
}

macro_rules! zero_when_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IsZero for $ty {
                fn is_zero(&self) -> bool {
                    *self == <$ty>::default()
                }
            }
        )*
    };
}

zero_when_default!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, ()
);

impl IsZero for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for VecDeque<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsZero for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsZero for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> IsZero for HashSet<T, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for BTreeSet<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsZero, const N: usize> IsZero for [T; N] {
    fn is_zero(&self) -> bool {
        self.iter().all(IsZero::is_zero)
    }
}

impl<T: IsZero> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.as_ref().map_or(true, IsZero::is_zero)
    }
}

impl<T: IsZero + ?Sized> IsZero for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

macro_rules! zero_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: IsZero),+> IsZero for ($($name,)+) {
            fn is_zero(&self) -> bool {
                true $(&& self.$idx.is_zero())+
            }
        }
    };
}

zero_tuple!(A.0);
zero_tuple!(A.0, B.1);
zero_tuple!(A.0, B.1, C.2);
zero_tuple!(A.0, B.1, C.2, D.3);

/// Implement [`IsZero`] for a struct: zero when every listed field is zero.
///
/// ```rust,ignore
/// struct Limits { second: i64, minute: i64 }
/// kong_admin::impl_is_zero!(Limits { second, minute });
/// ```
#[macro_export]
macro_rules! impl_is_zero {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::shared::zero::IsZero for $ty {
            fn is_zero(&self) -> bool {
                true $(&& $crate::shared::zero::IsZero::is_zero(&self.$field))*
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Window {
        size: u32,
        label: String,
        bounds: [i64; 2],
    }

    crate::impl_is_zero!(Window { size, label, bounds });

    #[test]
    fn test_scalars() {
        assert!(0i64.is_zero());
        assert!(!5i64.is_zero());
        assert!(0.0f64.is_zero());
        assert!(!0.5f64.is_zero());
        assert!(false.is_zero());
        assert!(!true.is_zero());
        assert!("".is_zero());
        assert!(!"a".is_zero());
        assert!(String::new().is_zero());
    }

    #[test]
    fn test_collections_zero_when_empty() {
        assert!(Vec::<String>::new().is_zero());
        assert!(!vec![String::new()].is_zero());
        assert!(HashMap::<String, i32>::new().is_zero());
        assert!(BTreeSet::<u8>::new().is_zero());
    }

    #[test]
    fn test_arrays_and_tuples_elementwise() {
        assert!([0u8; 4].is_zero());
        assert!(![0u8, 0, 1, 0].is_zero());
        assert!((0u8, String::new(), false).is_zero());
        assert!(!(0u8, String::from("x"), false).is_zero());
    }

    #[test]
    fn test_option_derefs() {
        assert!(None::<i32>.is_zero());
        assert!(Some(0i32).is_zero());
        assert!(!Some(3i32).is_zero());
        assert!(Some(Box::new(String::new())).is_zero());
    }

    #[test]
    fn test_struct_macro() {
        assert!(Window::default().is_zero());
        assert!(!Window { size: 1, ..Default::default() }.is_zero());
        assert!(!Window { bounds: [0, 9], ..Default::default() }.is_zero());
        assert!(Some(Window::default()).is_zero());
    }
}
