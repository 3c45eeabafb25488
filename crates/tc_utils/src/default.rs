/// An ergonomic abbreviation for [`Default::default()`] to make initializing structs easier.
///
/// # Example
///
/// ```
/// use tc_utils::default;
///
/// #[derive(Default)]
/// struct Tile {
///   n: i32,
///   layer: u8,
///   solid: bool,
/// }
///
/// let tile = Tile {
///   n: 10,
///   ..default()
/// };
/// assert_eq!(tile.layer, 0);
/// ```
#[inline(always)]
pub fn default<T: Default>() -> T {
    T::default()
}
