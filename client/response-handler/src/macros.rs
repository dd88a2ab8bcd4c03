/// Maps a string to the enum variant whose name it exactly matches, or `None`.
///
/// The variants must be in scope, usually through `use EnumName::*;`.
///
/// # Example
///
/// ```ignore
/// use LayerType::*;
///
/// let layer_type = match_string_to_enum!(match ("Rect") { Folder, Rect });
/// assert_eq!(layer_type, Some(Rect));
/// ```
macro_rules! match_string_to_enum {
	(match ($e:expr) { $($var:ident),* $(,)? }) => {
		match $e {
			$(
				stringify!($var) => Some($var),
			)*
			_ => None,
		}
	};
}

/// Creates a string representation of an enum value that exactly matches the given name of each enum variant
///
/// # Example
///
/// ```ignore
/// enum E {
/// 	A(u8),
/// 	B
/// }
///
/// // this line is important
/// use E::*;
///
/// let a = E::A(7);
/// let s = match_variant_name!(match (a) { A, B });
/// ```
///
/// expands to
///
/// ```ignore
/// // ...
///
/// let s = match a {
/// 	A { .. } => "A",
/// 	B { .. } => "B"
/// };
/// ```
macro_rules! match_variant_name {
	(match ($e:expr) { $($v:ident),* $(,)? }) => {
		match $e {
			$(
				$v { .. } => stringify!($v)
			),*
		}
	};
}
