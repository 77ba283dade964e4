//! Accessor and construction macros
//!
//! `impl_enum_accessors!` uses `paste` internally for identifier
//! concatenation.

/// Generate is_xxx, as_xxx, as_xxx_mut for enums with typed variants
///
/// Uses paste's `:camel` modifier to convert method name to variant name.
/// Boxed variants deref to their inner type.
///
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&Type>`
/// - `as_xxx_mut(&mut self) -> Option<&mut Type>`
///
/// # Example
/// ```ignore
/// impl Node {
///     // element -> Element, text -> Text, fragment -> Fragment
///     impl_enum_accessors!(element, text, fragment);
/// }
/// ```
#[macro_export]
macro_rules! impl_enum_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " node"]
                #[inline]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " reference"]
                #[inline]
                pub fn [<as_ $variant>](&self) -> Option<&[<$variant:camel>]> {
                    match self {
                        Self::[<$variant:camel>](v) => {
                            let v: &[<$variant:camel>] = v;
                            Some(v)
                        }
                        _ => None,
                    }
                }

                #[doc = "Try to get as mutable " $variant " reference"]
                #[inline]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut [<$variant:camel>]> {
                    match self {
                        Self::[<$variant:camel>](v) => {
                            let v: &mut [<$variant:camel>] = v;
                            Some(v)
                        }
                        _ => None,
                    }
                }
            )*
        }
    };
}

/// Build a [`Props`](crate::vnode::Props) map in insertion order
///
/// # Example
/// ```
/// use tola_vnode::{props, vnode::PropValue};
///
/// let props = props! {
///     "id" => "main",
///     "tabindex" => 0,
///     "title" => PropValue::Null,
/// };
/// assert_eq!(props.len(), 3);
/// assert_eq!(props.get_str("id"), Some("main"));
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::vnode::Props::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::vnode::Props::new();
        $(props.set($key, $value);)+
        props
    }};
}
